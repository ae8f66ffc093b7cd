//! CLI tool for computing indicators and browsing indicator help
//!
//! Usage:
//!   indicators compute <function> [--period N ...] < input.json > output.json
//!   indicators help [INDICATOR] [--category C] [--search Q] [--open] [--format F]
//!   indicators available
//!
//! `compute` reads either a JSON array (taken as close prices) or an object of
//! named series (`open`, `high`, `low`, `close`, `volume`) on stdin.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use talib_facade::compute::COMPUTABLE;
use talib_facade::{
    Category, HelpCatalog, HelpFormat, HelpOutput, HelpRequest, MaType, Params, Result, SeriesSet,
    Tai, TaLib, TaLibConfig,
};

#[derive(Parser, Debug)]
#[command(
    name = "indicators",
    version,
    about = "TA-Lib indicators from the command line",
    disable_help_subcommand = true
)]
struct Cli {
    /// Path to the TA-Lib shared library (searched before TA_LIB_PATH)
    #[arg(long, global = true)]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute an indicator over JSON read from stdin
    Compute {
        /// Indicator name, e.g. sma, macd, bbands
        function: String,

        #[arg(long)]
        period: Option<i32>,

        #[arg(long)]
        fast_period: Option<i32>,

        #[arg(long)]
        slow_period: Option<i32>,

        #[arg(long)]
        signal_period: Option<i32>,

        #[arg(long)]
        nbdev_up: Option<f64>,

        #[arg(long)]
        nbdev_down: Option<f64>,

        /// Standard deviation multiplier for stddev and var
        #[arg(long)]
        nbdev: Option<f64>,

        /// Moving average kind (name or 0..8)
        #[arg(long)]
        ma_type: Option<MaType>,
    },

    /// Show documentation for an indicator, a category or a search
    Help {
        /// Indicator key, or `all`
        indicator: Option<String>,

        #[arg(long)]
        category: Option<Category>,

        #[arg(long)]
        search: Option<String>,

        /// Open the documentation page in a browser
        #[arg(long)]
        open: bool,

        /// resource, uri or hash
        #[arg(long, default_value = "resource")]
        format: HelpFormat,
    },

    /// Report whether TA-Lib could be loaded
    Available,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_engine(library: Option<PathBuf>) -> TaLib {
    let config = TaLibConfig::from_env();
    match library {
        Some(path) => TaLib::with_config(&config.with_library(path)),
        None => TaLib::with_config(&config),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Compute {
            function,
            period,
            fast_period,
            slow_period,
            signal_period,
            nbdev_up,
            nbdev_down,
            nbdev,
            ma_type,
        } => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            let value: serde_json::Value = serde_json::from_str(&input)?;
            let series = SeriesSet::from_json(&value)?;
            let params = Params {
                period,
                fast_period,
                slow_period,
                signal_period,
                nbdev_up,
                nbdev_down,
                nbdev,
                ma_type,
            };

            let tai = Tai::with_engine(load_engine(cli.library));
            if !COMPUTABLE.contains(&function.to_lowercase().as_str()) {
                eprintln!("Computable functions: {}", COMPUTABLE.join(", "));
            }
            let result = tai.compute(&function, &series, &params)?;
            let output = serde_json::to_string(&result)?;
            io::stdout().write_all(output.as_bytes())?;
            Ok(())
        }
        Command::Help {
            indicator,
            category,
            search,
            open,
            format,
        } => {
            let catalog = HelpCatalog::bundled()?;
            let request = HelpRequest {
                indicator,
                category,
                search,
                open,
                format,
            };
            let mut stdout = io::stdout();
            match catalog.query(&request)? {
                HelpOutput::Resource(resource) => writeln!(stdout, "{resource}")?,
                HelpOutput::Uri(uri) => writeln!(stdout, "{uri}")?,
                HelpOutput::Summary(summary) => {
                    writeln!(stdout, "{}", serde_json::to_string_pretty(&summary)?)?
                }
                HelpOutput::Listing(listing) => {
                    for (key, url) in listing {
                        writeln!(stdout, "{key:<24} {url}")?;
                    }
                }
            }
            Ok(())
        }
        Command::Available => {
            let engine = load_engine(cli.library);
            match engine.library_path() {
                Some(path) => println!("TA-Lib available: {}", path.display()),
                None => {
                    println!("TA-Lib not available");
                    println!("{}", talib_facade::INSTALL_HINT);
                }
            }
            Ok(())
        }
    }
}
