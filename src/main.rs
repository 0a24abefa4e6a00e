use std::env;
use std::path::PathBuf;

use anyhow::Context;
use argh::FromArgs;
use log::{error, LevelFilter};

use shader_build::config::{DEFAULT_SHADER_ROOT, SDK_VAR};
use shader_build::{build, Config, FailurePolicy, Glslc};

/// Compile all GLSL shaders under a directory with glslc
#[derive(FromArgs, Debug)]
struct Arguments {
    /// path to the glslc executable, takes precedence over $VULKAN_SDK
    #[argh(option)]
    glslc: Option<PathBuf>,

    /// compile with debug symbols (accepted, not applied)
    #[argh(switch)]
    g: bool,

    /// directory to scan for shaders
    #[argh(option, default = "PathBuf::from(DEFAULT_SHADER_ROOT)")]
    root: PathBuf,

    /// keep compiling after a shader fails and report every failure
    #[argh(switch)]
    keep_going: bool,

    /// log level filter
    #[argh(option, default = "LevelFilter::Info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args: Arguments = argh::from_env();
    env_logger::Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .init();

    let policy = if args.keep_going {
        FailurePolicy::KeepGoing
    } else {
        FailurePolicy::FailFast
    };
    let config = Config::resolve(&args.root, args.glslc.as_deref(), env::var_os(SDK_VAR))?
        .with_debug_symbols(args.g)
        .with_policy(policy);
    let compiler = Glslc::new(&config.compiler);

    let report = build(&config, &compiler, |job, outcome| {
        println!("{}", outcome.marker(job))
    })
    .with_context(|| format!("cannot compile shaders under {}", config.root.display()))?;

    for failure in &report.failed {
        error!("Failed: {}", failure.input().display());
    }
    report.into_result()?;
    Ok(())
}
