use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(about = "Column-major matrix and swizzle math", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[cfg(feature = "benchmark")]
    /// Run a benchmarking target
    Benchmark {
        /// Benchmarking target to run
        #[arg(short, long, value_enum)]
        target: raymath::benchmark::Target,

        /// Number of seconds to run the target for (it will always be run at least
        /// once)
        #[arg(short, long, default_value_t = 0.0)]
        duration: f64,

        /// Minimum number of seconds from the program is started until the target
        /// is run
        #[arg(long, default_value_t = 0.0)]
        delay: f64,
    },
    #[cfg(not(feature = "benchmark"))]
    /// Run a benchmarking target (requires the `benchmark` feature)
    Benchmark,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "benchmark")]
        Command::Benchmark {
            target,
            duration,
            delay,
        } => {
            let settings = raymath::benchmark::RunSettings::from_secs(duration, delay)
                .context("Duration and delay must be finite non-negative seconds")?;
            raymath::benchmark::benchmark(target, settings);
            Ok(())
        }
        #[cfg(not(feature = "benchmark"))]
        Command::Benchmark => {
            anyhow::bail!(
                "The `benchmark` subcommand requires the `benchmark` feature to be enabled."
            )
        }
    }
}
