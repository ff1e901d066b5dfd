use clap::{ArgAction, Parser as ClapParser, Subcommand};
use cypher_dsl::cli::{self, CliError, RenderOptions};
use cypher_dsl::Capability;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "cypher-dsl")]
#[command(about = "cypher-dsl - Render JSON values as typed Cypher expressions")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Coerce a JSON value and print it as a Cypher expression
    Render {
        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Capability to coerce the input to
        #[arg(long = "as", default_value = "any")]
        capability: Capability,
    },

    /// List the capability names accepted by --as
    Capabilities,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Render { input, capability } => run_render(input, capability),
        Commands::Capabilities => {
            print!("{}", cli::capability_listing());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so rendered output on stdout stays clean. `RUST_LOG`
/// takes precedence over the verbosity flag.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "cypher_dsl=warn",
        1 => "cypher_dsl=debug",
        _ => "cypher_dsl=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_render(input: Option<String>, capability: Capability) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = RenderOptions { input, capability };
    println!("{}", cli::execute_render(&options)?);
    Ok(())
}
