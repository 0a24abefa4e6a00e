//! Finds GLSL shader sources under a directory tree and compiles each one to
//! SPIR-V with an external compiler, writing `<source>.spv` next to it.

pub mod compiler;
pub mod config;
pub mod discover;
pub mod driver;
pub mod error;
pub mod job;
pub mod stage;

pub use compiler::{Compiler, CompilerOutput, Glslc};
pub use config::{Config, FailurePolicy};
pub use driver::{build, BuildReport, JobOutcome};
pub use error::BuildError;
pub use stage::ShaderStage;
