//! Reader error handling module
//!
//! - Categorized error kinds with stable codes
//! - One error type for fatal failures and lenient-mode diagnostics
//! - Byte ranges into the input text

mod codes;
mod error;

pub use codes::ErrorKind;
pub use error::{Result, Severity, SyntaxError};
