//! `svgfigures <FIGURE> <OUTPUT>`: render one catalog figure to an SVG file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use fig_render::{RenderConfig, RenderError, render_figure};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "svgfigures", version, about = "Render a built-in figure to an SVG file")]
struct Cli {
    /// Figure number, 1 to 10
    #[arg(allow_negative_numbers = true)]
    figure: String,
    /// Output SVG path
    output: PathBuf,
    /// JSON file overriding the render settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: &Cli) -> Result<i64, RenderError> {
    let n: i64 = cli
        .figure
        .trim()
        .parse()
        .map_err(|_| RenderError::InvalidSelector(cli.figure.clone()))?;
    let config = match &cli.config {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };
    debug!(?config, "render settings");
    render_figure(n, &cli.output, &config)?;
    Ok(n)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(n) => {
            println!("wrote figure {n} to {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
