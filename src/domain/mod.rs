//! Domain logic - pure release and version rules independent of git operations

pub mod branch;
pub mod catalog;
pub mod identifier;
pub mod outcome;
pub mod version;

pub use branch::BranchRef;
pub use catalog::BranchCatalog;
pub use identifier::ReleaseIdentifierSet;
pub use outcome::{FixVersionResult, ScanReport};
pub use version::Version;
