pub mod build;
pub mod verify;
