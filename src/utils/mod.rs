pub mod error;
pub mod format;

pub use error::{Result, TidyError};
pub use format::{human_size, pluralize};
