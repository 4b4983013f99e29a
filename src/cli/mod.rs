//! Command-line workflow, independent of argument parsing

pub mod orchestration;

pub use orchestration::{assemble_config, complete_interactively, prepare_repository, ResolveArgs};
