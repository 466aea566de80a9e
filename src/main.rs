mod archive;
mod cmd;
mod progress;
mod report;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "rind")]
#[command(about = "Find what makes a saved container image heavy, layer by layer")]
#[command(version)]
struct Cli {
    /// Path to a `docker save` tar archive, or "-" to read from stdin
    #[arg(default_value = "-")]
    archive: String,

    /// Maximum number of files to list per layer
    #[arg(short = 'n', long, default_value_t = 10)]
    max_files: usize,

    /// Total width of the rendered report, in characters
    #[arg(short = 'l', long, default_value_t = 100)]
    line_width: usize,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let opts = report::ReportOptions {
        max_files: cli.max_files,
        line_width: cli.line_width,
    };
    cmd::report::run(&cli.archive, &opts, cli.no_color)
}
