pub mod health;
pub mod tank;
pub mod user;
