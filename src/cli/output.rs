//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{ExportArgs, OutputFormat};
use crate::error::Result;
use crate::export::ExportSummary;

/// Output a run summary in the selected format.
pub fn output_summary(message: &str, summary: &ExportSummary, args: &ExportArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_summary_human(message, summary, args),
        OutputFormat::Json => output_json(summary, args),
    }
}

/// Output a summary in human-readable format.
fn output_summary_human(message: &str, summary: &ExportSummary, args: &ExportArgs) -> Result<()> {
    if args.verbosity() == 0 && summary.is_success() {
        return Ok(());
    }

    println!("{message}");
    println!("═══════════════");
    println!("Input: {}", summary.input);
    if let Some(dir) = &summary.output_dir {
        println!("Output directory: {dir}");
    }
    println!("Rows read: {}", summary.rows_read);
    println!("Documents written: {}", summary.documents_written);

    if args.verbosity() > 1 {
        println!("Time: {}ms", summary.duration_ms);
    }

    if !summary.failures.is_empty() {
        println!();
        println!("Failed rows ({}):", summary.failures.len());
        println!("───────────");
        for failure in &summary.failures {
            match &failure.id {
                Some(id) => println!("  row {} (id {id}): {}", failure.row, failure.message),
                None => println!("  row {}: {}", failure.row, failure.message),
            }
        }
    }

    Ok(())
}

/// Output in JSON format.
pub fn output_json<T: Serialize>(result: &T, args: &ExportArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
