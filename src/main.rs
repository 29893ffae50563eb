//! ncsmc-simplify CLI
//!
//! Usage:
//!   ncsmc-simplify                          # Simplify the default log
//!   ncsmc-simplify -f run.out               # Simplify run.out → run.out_simplified
//!   ncsmc-simplify -f run.out --stdout      # Print the view, write nothing
//!   ncsmc-simplify -f run.out --json        # Also print the JSON report
//!   ncsmc-simplify --serve                  # HTTP API server

use clap::Parser;
use colored::Colorize;

use ncsmc_simplify::core::{read_log, run_server, simplify_file, simplify_text, format_value};
use ncsmc_simplify::types::{SimplifiedReport, SimplifyError};
use ncsmc_simplify::{DEFAULT_INPUT, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "ncsmc-simplify",
    version = VERSION,
    about = "Summarise the bound states reported in an NCSMC output log",
    long_about = "Reads an NCSMC .out log and keeps only what matters for bound states:\n\
                  the threshold and ground-state energies, and for each bound state its\n\
                  energy, J, T, parity and detail lines.\n\n\
                  The result is written next to the input as <FILE>_simplified."
)]
struct Args {
    /// Output log to simplify
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    file: String,

    /// Also print the report as JSON
    #[arg(long)]
    json: bool,

    /// Print the simplified view instead of writing it to disk
    #[arg(long)]
    stdout: bool,

    /// Show one line per bound state
    #[arg(long)]
    verbose: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    if args.serve {
        if let Err(e) = run_server(&args.addr).await {
            eprintln!("{} {}", "Server error:".red(), e);
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = run_simplify(&args) {
        eprintln!("{} {}", format!("error[{}]:", e.code()).as_str().red().bold(), e);
        std::process::exit(1);
    }
}

/// Simplify one log, writing or printing the view
fn run_simplify(args: &Args) -> Result<(), SimplifyError> {
    println!("{} {}", "Simplifying".cyan(), args.file);

    let report = if args.stdout {
        let text = read_log(&args.file)?;
        let (report, rendered) = simplify_text(&args.file, &text)?;
        print!("{}", rendered);
        report
    } else {
        let outcome = simplify_file(&args.file)?;
        println!("{}", "Done simplifying!".green());
        println!("Output: {}", outcome.output_path.display());
        outcome.report
    };

    if args.verbose {
        print_verbose(&report);
    }

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{} {}", "JSON output failed:".red(), e),
        }
    }

    Ok(())
}

/// Print one line per bound state
fn print_verbose(report: &SimplifiedReport) {
    let summary = &report.summary;
    println!("{}", report.to_parseable_string().as_str().dimmed());
    println!(
        "  threshold={} MeV | ground={} MeV",
        format_value(summary.threshold_energy),
        format_value(summary.ground_state_energy),
    );

    if !summary.has_bound_states() {
        println!("  {}", "no bound states".yellow());
        return;
    }

    for (i, state) in summary.bound_states.iter().enumerate() {
        println!(
            "  [{}] E={} MeV | J={} | T={} | parity={} | details={} lines",
            i + 1,
            format_value(Some(state.energy)),
            format_value(state.j),
            format_value(state.t),
            state.parity.as_deref().unwrap_or(ncsmc_simplify::SENTINEL),
            state.detail_line_count(),
        );
    }

    if let Some(deepest) = summary.deepest_bound_state() {
        println!(
            "  {} E={} MeV",
            "deepest:".green(),
            format_value(Some(deepest.energy)),
        );
    }
}
