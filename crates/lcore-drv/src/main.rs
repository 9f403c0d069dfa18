use clap::Parser;
use lcore_drv::{cli, Cli, DriverError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "lcore_drv=info",
        1 => "lcore_drv=debug",
        _ => "lcore_drv=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    match cli::run(&cli) {
        Ok(()) => std::process::exit(0),
        Err(DriverError::CompilationFailed) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
