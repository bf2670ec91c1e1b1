pub mod songs;
pub mod upload;
