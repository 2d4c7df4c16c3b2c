pub mod authenticate;
pub mod membership;
pub mod role;
pub mod user;
