pub mod errors;

pub use errors::{ConfigError, ShellError};

pub type Result<T> = std::result::Result<T, ShellError>;
