use std::fs::File;
use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};

use crate::archive;
use crate::progress::Spinner;
use crate::report::{self, ReportOptions};

pub fn run(path: &str, opts: &ReportOptions, no_color: bool) -> Result<()> {
    let reader = open_input(path)?;

    let spinner = Spinner::new("Scanning archive...");
    let contents = match archive::walker::scan(reader) {
        Ok(contents) => contents,
        Err(err) => {
            spinner.abandon();
            return Err(err);
        }
    };
    spinner.finish(scan_summary(&contents));

    let reports = report::build(&contents, opts)?;

    let color = !no_color && io::stdout().is_terminal();
    let mut stdout = io::stdout().lock();
    report::render::write_report(&mut stdout, &reports, opts.line_width, color)
        .context("failed to write report")?;

    Ok(())
}

fn open_input(path: &str) -> Result<Box<dyn Read>> {
    if path == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        let file = File::open(path).with_context(|| format!("unable to open {path}"))?;
        Ok(Box::new(file))
    }
}

fn scan_summary(contents: &archive::ArchiveContents) -> String {
    let layers = contents.layers.len();
    let tag = contents
        .manifest
        .as_ref()
        .and_then(|entries| entries.first())
        .and_then(|entry| entry.repo_tags.first());

    match tag {
        Some(tag) => format!("Scanned {layers} layers of {tag}"),
        None => format!("Scanned {layers} layers"),
    }
}
