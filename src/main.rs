//! sorting-network CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use sorting_network::config::{MAX_RENDER_SCALE, NetworkConfig, RenderConfig, VerifyConfig};
use sorting_network::engine::{Verifier, sort};
use sorting_network::parsers::parse_with_config;
use sorting_network::{ComparisonNetwork, render_svg_with_config};

/// Check, apply and draw comparison networks.
#[derive(Parser, Debug)]
#[command(
    name = "sorting-network",
    version = env!("SORTING_NETWORK_VERSION"),
    about = "Check, apply and draw comparison networks"
)]
struct Cli {
    /// File containing the comparison network definition (reads stdin if not provided)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Check whether it is a sorting network
    #[arg(short = 'c', long = "check")]
    check: bool,

    /// Sort a comma-separated list of integers with the network
    #[arg(short = 's', long = "sort", allow_hyphen_values = true)]
    sort: Option<String>,

    /// Print the network as SVG
    #[arg(long = "svg")]
    svg: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Worker threads for --check (default: one per core)
    #[arg(long = "threads")]
    threads: Option<usize>,

    /// Refuse to --check networks with more wires than this
    #[arg(long = "max-wires", default_value = "24")]
    max_wires: usize,

    /// SVG scale factor (1-64); multiplies spacing, endpoint radius and stroke width
    #[arg(
        long = "scale",
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_RENDER_SCALE))
    )]
    scale: u32,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let text = match read_input(cli.input.as_deref()) {
        Ok(s) => s,
        Err(e) => fail(&e),
    };

    let network = match parse_with_config(&text, &NetworkConfig::default()) {
        Ok(n) => n,
        Err(e) => fail(&format!("failed to parse comparison network: {e}")),
    };
    info!(
        comparators = network.len(),
        wires = network.wire_count(),
        "parsed network"
    );

    let rendered = match run(&cli, &network) {
        Ok(s) => s,
        Err(e) => fail(&e),
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(&format!("cannot write '{}': {}", path, e));
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(&format!("cannot flush stdout: {}", e));
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path, e))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
            Ok(buf)
        }
    }
}

/// Run the requested actions in order (check, sort, svg) and collect their output.
fn run(cli: &Cli, network: &ComparisonNetwork) -> Result<String, String> {
    let mut out = String::new();
    let acted = cli.check || cli.sort.is_some() || cli.svg;

    if cli.check {
        let config = VerifyConfig {
            max_wires: cli.max_wires,
            threads: cli.threads,
        };
        let verifier = Verifier::new(network, config);
        match verifier.find_counterexample().map_err(|e| e.to_string())? {
            None => out.push_str("It is a sorting network!\n"),
            Some(seq) => {
                let bits = format!("{:0width$b}", seq, width = network.wire_count());
                info!(input = %bits, "counterexample (wire 0 is the rightmost bit)");
                out.push_str("It is not a sorting network.\n");
            }
        }
    }

    if let Some(ref list) = cli.sort {
        let mut numbers = parse_numbers(list)?;
        sort(network, &mut numbers).map_err(|e| e.to_string())?;
        for num in numbers {
            out.push_str(&format!("{num}\n"));
        }
    }

    if cli.svg {
        let config = RenderConfig::with_scale(cli.scale).map_err(|e| e.to_string())?;
        out.push_str(&render_svg_with_config(network, &config));
        out.push('\n');
    }

    if !acted {
        out.push_str(&format!("{network}\n"));
    }
    Ok(out)
}

fn parse_numbers(list: &str) -> Result<Vec<i64>, String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i64>().map_err(|_| format!("invalid number '{s}' in --sort")))
        .collect()
}

fn fail(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}
