// Crate root: declare modules and control visibility
pub mod artifacts;
pub mod case_policy;
pub mod collector;
pub mod config;
pub mod error;
pub mod fs_access;
pub mod logging;
pub mod matcher;
pub mod notify;
pub mod output;
pub mod prompt;
pub mod resolver;
pub mod selector;
pub mod utils;
pub mod validate;
pub mod walker;

// Re-export commonly used API from the library for binaries/tests
pub use artifacts::{ArtifactExtensions, Candidate, ResolvedPaths};
pub use case_policy::CaseSensitivity;
pub use config::ResolverConfig;
pub use error::{ConfigError, ResolveError};
pub use resolver::ArtifactResolver;
