pub mod admin;
pub mod issue;
pub mod session;
pub mod sweep;
pub mod verify;
