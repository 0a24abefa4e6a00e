use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {var} is not set, cannot locate the shader compiler")]
    MissingSdk { var: &'static str },
    #[error("shader root {} is not a directory", path.display())]
    RootNotDirectory { path: PathBuf },
}

/// The compiler process could not be started at all.
#[derive(Debug, Error)]
#[error("failed to run {}: {source}", program.display())]
pub struct InvocationError {
    pub program: PathBuf,
    #[source]
    pub source: io::Error,
}

/// The compiler ran and rejected the input.
#[derive(Debug, Error)]
#[error("{} failed to compile ({}){}", input.display(), describe_code(*code), describe_stderr(stderr))]
pub struct CompileError {
    pub input: PathBuf,
    pub code: Option<i32>,
    pub stderr: String,
}

/// Why a single job did not produce its output.
#[derive(Debug, Error)]
pub enum JobFailure {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error("{} was not compiled: {source}", input.display())]
    NotStarted {
        input: PathBuf,
        #[source]
        source: InvocationError,
    },
}

impl JobFailure {
    pub fn input(&self) -> &Path {
        match self {
            JobFailure::Compile(e) => &e.input,
            JobFailure::NotStarted { input, .. } => input,
        }
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),
    #[error("invalid shader root pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("{count} shader(s) failed to compile")]
    Failed { count: usize },
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_owned(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
