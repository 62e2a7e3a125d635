pub mod admin;
pub mod extract;
pub mod health;
pub mod otp;
