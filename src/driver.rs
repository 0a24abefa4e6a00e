use std::path::PathBuf;

use log::{error, info, warn};

use crate::compiler::Compiler;
use crate::config::{Config, FailurePolicy};
use crate::discover::discover;
use crate::error::{BuildError, CompileError, JobFailure};
use crate::job::CompileJob;

#[derive(Debug)]
pub enum JobOutcome {
    Compiled,
    Failed(JobFailure),
}

impl JobOutcome {
    pub fn is_compiled(&self) -> bool {
        matches!(self, JobOutcome::Compiled)
    }

    /// The compiler process ran, whatever it returned.
    pub fn was_invoked(&self) -> bool {
        !matches!(self, JobOutcome::Failed(JobFailure::NotStarted { .. }))
    }

    /// Progress line for `job`: `<output> done` whenever the compiler ran,
    /// even if it rejected the input, otherwise the reason it could not start.
    pub fn marker(&self, job: &CompileJob) -> String {
        match self {
            JobOutcome::Failed(JobFailure::NotStarted { source, .. }) => source.to_string(),
            _ => format!("{} done", job.output.display()),
        }
    }
}

/// Result of a whole run. `skipped` holds shaders that were found but never
/// attempted because an earlier failure stopped the batch.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub succeeded: Vec<PathBuf>,
    pub failed: Vec<JobFailure>,
    pub skipped: Vec<PathBuf>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn into_result(self) -> Result<Self, BuildError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(BuildError::Failed {
                count: self.failed.len(),
            })
        }
    }
}

/// Runs `compiler` once for `job` and turns whatever happened into an outcome.
pub fn compile_one<C>(compiler: &C, job: &CompileJob) -> JobOutcome
where
    C: Compiler + ?Sized,
{
    info!("Compiling {}", job.input.display());
    let output = match compiler.compile(job) {
        Ok(output) => output,
        Err(source) => {
            error!("{}", source);
            return JobOutcome::Failed(JobFailure::NotStarted {
                input: job.input.clone(),
                source,
            });
        }
    };

    if !output.stdout.trim().is_empty() {
        info!("{}: {}", job.input.display(), output.stdout.trim());
    }
    if output.success() {
        if !output.stderr.trim().is_empty() {
            warn!("{}: {}", job.input.display(), output.stderr.trim());
        }
        JobOutcome::Compiled
    } else {
        let failure = CompileError {
            input: job.input.clone(),
            code: output.code,
            stderr: output.stderr,
        };
        error!("{}", failure);
        JobOutcome::Failed(failure.into())
    }
}

/// Compiles every shader under `config.root`, one at a time in discovery
/// order. `observer` sees each job right after it was attempted.
pub fn build<C, F>(config: &Config, compiler: &C, mut observer: F) -> Result<BuildReport, BuildError>
where
    C: Compiler + ?Sized,
    F: FnMut(&CompileJob, &JobOutcome),
{
    config.validate()?;
    if config.debug_symbols {
        warn!("Debug symbols were requested but are not applied to any shader");
    }
    info!("Compiling shaders under {}", config.root.display());

    let mut report = BuildReport::default();
    let mut sources = discover(&config.root)?;
    while let Some(source) = sources.next() {
        let job = CompileJob::new(&source, config.debug_symbols);
        let outcome = compile_one(compiler, &job);
        observer(&job, &outcome);
        match outcome {
            JobOutcome::Compiled => report.succeeded.push(job.input),
            JobOutcome::Failed(failure) => {
                report.failed.push(failure);
                if config.policy == FailurePolicy::FailFast {
                    report.skipped.extend(sources.by_ref().map(|s| s.path));
                    break;
                }
            }
        }
    }

    if !report.skipped.is_empty() {
        warn!("Stopped early, {} shader(s) not attempted", report.skipped.len());
    }
    info!(
        "{} compiled, {} failed, {} skipped",
        report.succeeded.len(),
        report.failed.len(),
        report.skipped.len()
    );
    Ok(report)
}
