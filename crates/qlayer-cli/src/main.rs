//! qlayer Command-Line Interface
//!
//! Builds and samples layered quantum circuits on the dense simulator.
//!
//! ```text
//! qlayer demo
//! qlayer qft --qubits 3 --draw
//! qlayer phase --precision 5 --gate T
//! qlayer grover --qubits 4 --marked 11
//! qlayer run --qubits 2 --layer H,I --layer CNOT --trials 100
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod diagram;

use commands::common::{OutputFormat, Session};
use commands::{demo, grover, phase, qft, run, version};

/// qlayer - layered state-vector quantum circuit simulator
#[derive(Parser)]
#[command(name = "qlayer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Seed for random state preparation and sampling
    #[arg(long, env = "QLAYER_SEED", global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through QFT and phase estimation examples
    Demo,

    /// Quantum Fourier transform on |0…0⟩
    Qft {
        /// Number of qubits
        #[arg(short, long, default_value = "2")]
        qubits: usize,

        /// Build the inverse transform instead
        #[arg(long)]
        inverse: bool,

        /// Number of measurement trials
        #[arg(short, long, env = "QLAYER_TRIALS", default_value = "10")]
        trials: usize,

        /// Print the circuit diagram
        #[arg(long)]
        draw: bool,

        /// Print the composite unitary
        #[arg(long)]
        matrix: bool,
    },

    /// Phase estimation of a single-qubit gate
    Phase {
        /// Number of counting qubits
        #[arg(short, long, default_value = "3")]
        precision: usize,

        /// Gate whose eigenphase is estimated (T, S, Z, ...)
        #[arg(short, long, default_value = "T")]
        gate: String,

        /// Eigenvector of the gate (0, 1, +, -)
        #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
        eigenvector: String,

        /// Number of measurement trials
        #[arg(short, long, env = "QLAYER_TRIALS", default_value = "10")]
        trials: usize,

        /// Print the circuit diagram
        #[arg(long)]
        draw: bool,
    },

    /// Grover search for one marked basis state
    Grover {
        /// Number of qubits
        #[arg(short, long, default_value = "3")]
        qubits: usize,

        /// Index of the marked basis state
        #[arg(short, long)]
        marked: usize,

        /// Grover iterations (defaults to the optimal count)
        #[arg(short, long)]
        iterations: Option<usize>,

        /// Number of measurement trials
        #[arg(short, long, env = "QLAYER_TRIALS", default_value = "100")]
        trials: usize,

        /// Print the circuit diagram
        #[arg(long)]
        draw: bool,
    },

    /// Build a circuit from gate labels and sample it
    Run {
        /// Number of qubits
        #[arg(short, long)]
        qubits: usize,

        /// A layer of comma-separated gate labels, e.g. "H,I" (repeatable)
        #[arg(short, long = "layer")]
        layers: Vec<String>,

        /// Initial state: "random" or comma-separated 0, 1, +, -
        #[arg(long, allow_hyphen_values = true)]
        init: Option<String>,

        /// Number of measurement trials
        #[arg(short, long, env = "QLAYER_TRIALS", default_value = "10")]
        trials: usize,

        /// Print the circuit diagram
        #[arg(long)]
        draw: bool,

        /// Print the composite unitary
        #[arg(long)]
        matrix: bool,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::new(cli.seed, cli.format);

    // Execute command
    let result = match cli.command {
        Commands::Demo => demo::execute(&mut session),

        Commands::Qft {
            qubits,
            inverse,
            trials,
            draw,
            matrix,
        } => qft::execute(&mut session, qubits, inverse, trials, draw, matrix),

        Commands::Phase {
            precision,
            gate,
            eigenvector,
            trials,
            draw,
        } => phase::execute(&mut session, precision, &gate, &eigenvector, trials, draw),

        Commands::Grover {
            qubits,
            marked,
            iterations,
            trials,
            draw,
        } => grover::execute(&mut session, qubits, marked, iterations, trials, draw),

        Commands::Run {
            qubits,
            layers,
            init,
            trials,
            draw,
            matrix,
        } => run::execute(
            &mut session,
            qubits,
            &layers,
            init.as_deref(),
            trials,
            draw,
            matrix,
        ),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
