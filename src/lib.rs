pub mod analyzer;
pub mod cancel;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use analyzer::{resolve_fix_version, FixVersionScanner};
pub use cancel::CancellationToken;
pub use config::FixVersionConfig;
pub use domain::{FixVersionResult, ScanReport};
pub use error::{Result, WhichFixError};
