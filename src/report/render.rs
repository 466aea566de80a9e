use std::io::{self, Write};

use crossterm::style::Stylize;

use super::{LayerReport, SIZE_WIDTH};

/// Write the formatted report blocks to `out`.
///
/// Each block is a `=` rule, a summary line (layer size + build command),
/// another rule, then one line per ranked file. The summary line is blue
/// when `color` is set.
pub fn write_report<W: Write>(
    out: &mut W,
    reports: &[LayerReport],
    line_width: usize,
    color: bool,
) -> io::Result<()> {
    let rule = "=".repeat(line_width);

    for report in reports {
        let summary = format!(
            "{} \t $ {}",
            format_bytes(report.total_size),
            report.command
        );

        writeln!(out)?;
        writeln!(out, "{rule}")?;
        if color {
            writeln!(out, "{}", summary.blue())?;
        } else {
            writeln!(out, "{summary}")?;
        }
        writeln!(out, "{rule}")?;

        for file in &report.files {
            writeln!(out, "{} \t {}", format_bytes(file.size), file.name)?;
        }
    }

    Ok(())
}

/// Humanize a byte count, right-aligned in the size column.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            let text = if size.fract() < 0.05 {
                format!("{size:.0} {unit}")
            } else {
                format!("{size:.1} {unit}")
            };
            return format!("{text:>width$}", width = SIZE_WIDTH);
        }
        size /= 1024.0;
    }
    format!("{:>width$}", format!("{size:.1} TB"), width = SIZE_WIDTH)
}
