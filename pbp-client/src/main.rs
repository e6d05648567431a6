use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use pbp_client::{OutputFormat, commands};

#[derive(Parser)]
#[command(
    name = "pbptool",
    about = "PBP container tool for PSP bundles",
    version,
    author,
    long_about = "A command-line tool for working with PBP containers (PSP bundles): \
                  inspect header and section metadata, split a container into its \
                  sections, or assemble one from up to 8 input files."
)]
struct Cli {
    /// Set the logging level
    #[arg(short, long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Output format
    #[arg(short = 'o', long, value_enum, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print header and section metadata without extracting data
    Analyze {
        /// Path to the container file
        input: PathBuf,
    },

    /// Split a container into its sections, one file per present slot
    Unpack {
        /// Path to the container file
        input: PathBuf,

        /// Directory for the extracted sections (created if missing)
        output_dir: PathBuf,
    },

    /// Assemble a container from up to 8 input files
    Pack {
        /// Path of the container to create
        output: PathBuf,

        /// Exactly 8 inputs in slot order (PARAM.SFO, ICON0.PNG,
        /// ICON1.PMF, PIC0.PNG, PIC1.PNG, SND0.AT3, DATA.PSP,
        /// DATA.PSAR); the literal "NULL" marks an absent slot
        #[arg(num_args = 8, value_name = "INPUT")]
        inputs: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing; diagnostics go to stderr so they never mix
    // with command output.
    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze { input } => commands::analyze::handle(&input, cli.format)?,
        Commands::Unpack { input, output_dir } => commands::unpack::handle(&input, &output_dir)?,
        Commands::Pack { output, inputs } => commands::pack::handle(&output, &inputs)?,
    }

    Ok(())
}
