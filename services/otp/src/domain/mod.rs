pub mod email;
pub mod message;
pub mod repository;
pub mod types;
