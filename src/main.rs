use anyhow::Result;
use clap::Parser;
use ecsup::cli::{self, LaunchArgs};
use ecsup::infra::config::default_config_dir;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ecsup",
    about = "Launches a Fargate service on an Amazon ECS cluster",
    version
)]
struct Cli {
    /// Configuration directory (default: ~/.config/ecsup)
    #[arg(long, env = "ECSUP_CONFIG_DIR", value_name = "DIR")]
    config_dir: Option<String>,

    /// AWS region to use
    #[arg(long, env = "AWS_REGION", value_name = "REGION")]
    region: Option<String>,

    #[command(flatten)]
    launch: LaunchArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Argument mistakes exit 1; --help and --version exit 0.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_tracing();

    let config_dir = match cli.config_dir {
        Some(raw) => PathBuf::from(shellexpand::tilde(&raw).into_owned()),
        None => default_config_dir(),
    };

    cli::launch::run(cli.launch, &config_dir, cli.region).await
}

// Logs go to stderr so stdout carries nothing but the ARN line.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
