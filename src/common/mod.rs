pub mod errors;
pub mod file_operations;
pub mod logger;
pub mod types;

pub use types::*;
