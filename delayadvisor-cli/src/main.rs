//! DelayAdvisor CLI - 555 monostable delay circuit calculation from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use delayadvisor::{
    AdvisorError, CircuitRequest, DelayAdvisor, Report, TransistorCatalog,
};
use std::io::Write;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "delayadvisor")]
#[command(about = "555 timer monostable delay circuit component calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute component values and print the wiring report
    Advise {
        /// Delay in seconds; prompted for when omitted
        #[arg(short, long)]
        delay: Option<f64>,

        /// Supply voltage in volts; prompted for when omitted
        #[arg(long)]
        voltage: Option<f64>,

        /// Load current in milliamps; prompted for when omitted
        #[arg(short, long)]
        load: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Path to a custom transistor catalog JSON file
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },

    /// List the transistor selection table
    Transistors {
        /// Show descriptions and current brackets
        #[arg(short, long)]
        verbose: bool,

        /// Path to a custom transistor catalog JSON file
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Human,
    /// JSON output for scripting
    Json,
}

fn main() {
    let cli = Cli::parse();

    init_logger(cli.debug);
    tracing::debug!("Starting delayadvisor CLI");

    let exit_code = match cli.command {
        Commands::Advise {
            delay,
            voltage,
            load,
            format,
            catalog,
        } => handle_advise(delay, voltage, load, format, catalog.as_deref()),
        Commands::Transistors { verbose, catalog } => {
            handle_transistors(verbose, catalog.as_deref())
        }
    };

    process::exit(exit_code);
}

fn init_logger(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("delayadvisor=debug,delayadvisor_cli=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("delayadvisor=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn handle_advise(
    delay: Option<f64>,
    voltage: Option<f64>,
    load: Option<f64>,
    format: OutputFormat,
    catalog_path: Option<&std::path::Path>,
) -> i32 {
    let request = match gather_request(delay, voltage, load) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let catalog = match load_catalog(catalog_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match DelayAdvisor::recommend_with_catalog(&request, &catalog) {
        Ok(recommendation) => {
            let report = Report::build(&request, &recommendation);
            match output_report(&report, &format) {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Fill in any inputs the flags left out by prompting on stdin, in the
/// original prompt order: delay, voltage, load current.
fn gather_request(
    delay: Option<f64>,
    voltage: Option<f64>,
    load: Option<f64>,
) -> Result<CircuitRequest, AdvisorError> {
    let delay_seconds = match delay {
        Some(v) => v,
        None => prompt_number("Delay (seconds): ")?,
    };
    let voltage = match voltage {
        Some(v) => v,
        None => prompt_number("Voltage (V): ")?,
    };
    let load_current_ma = match load {
        Some(v) => v,
        None => prompt_number("Load Current (mA): ")?,
    };

    Ok(CircuitRequest {
        delay_seconds,
        voltage,
        load_current_ma,
    })
}

fn prompt_number(prompt: &str) -> Result<f64, AdvisorError> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut line = String::new();
    let read = std::io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Err(AdvisorError::InvalidInput(format!(
            "missing entry for {}",
            prompt.trim_end_matches(": ")
        )));
    }

    line.trim().parse::<f64>().map_err(|_| {
        AdvisorError::InvalidInput(format!(
            "expected a number for {}, got '{}'",
            prompt.trim_end_matches(": "),
            line.trim()
        ))
    })
}

fn load_catalog(path: Option<&std::path::Path>) -> Result<TransistorCatalog, AdvisorError> {
    match path {
        Some(p) => TransistorCatalog::from_json_file(p),
        None => Ok(TransistorCatalog::with_builtin_parts()),
    }
}

fn output_report(report: &Report, format: &OutputFormat) -> Result<(), AdvisorError> {
    match format {
        OutputFormat::Human => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

fn handle_transistors(verbose: bool, catalog_path: Option<&std::path::Path>) -> i32 {
    let catalog = match load_catalog(catalog_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    println!("Transistor selection table ({}):\n", catalog.name());
    for part in catalog.parts() {
        println!("  {}", part.part_number);
        if verbose {
            println!("    {}", part.description);
            if part.min_load_ma > 0.0 {
                println!("    Load current above {} mA", part.min_load_ma);
            } else {
                println!("    Fallback for any remaining load");
            }
        }
        println!();
    }
    0
}
