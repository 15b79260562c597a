//! Report command handler
//!
//! Generates network reports in Markdown or HTML.

use crate::commands::network::load_network;
use music_graph::config::Config;
use music_graph::report::{reporter_for, ReportContext, ReportFormat};
use music_graph::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// Returns `false` when no report was written.
pub fn run(input_file: &Path, output_file: Option<&Path>, format_str: &str, config: &Config) -> bool {
    match generate_report(input_file, output_file, format_str, config) {
        Ok(path) => {
            println!("✓ Report generated: {}", path.display());
            info!("Report exported to: {}", path.display());
            true
        }
        Err(err) => {
            error!(
                "Report generation failed for {}: {err}",
                input_file.display()
            );
            eprintln!("{err}");
            false
        }
    }
}

/// Default report location: `<reports_dir>/<network file stem>_report.<ext>`
fn default_output_path(
    input_file: &Path,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let filename = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("network");
    Ok(reports_dir.join(format!("{filename}_report.{}", format.extension())))
}

fn generate_report(
    input_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let network = load_network(input_file, config)?;

    let output_path = match output_file {
        Some(output) => output.to_path_buf(),
        None => default_output_path(input_file, format, config)?,
    };

    let ctx = ReportContext::new(&network);
    reporter_for(format)
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    println!("\n=== Summary ===");
    print!("{network}");
    println!("Connected groups: {}", ctx.components.len());

    Ok(output_path)
}
