//! Command implementations for the narrative exporter CLI.

use std::io::Write;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::converter::RowConverter;
use crate::document::mapper::{DocumentMapper, MappedDocument};
use crate::error::{ExportError, Result};
use crate::export::Exporter;

/// Execute a CLI command.
pub fn execute_command(args: ExportArgs) -> Result<()> {
    match &args.command {
        Command::Convert(convert_args) => convert(convert_args, &args),
        Command::Validate(validate_args) => validate(validate_args, &args),
        Command::Preview(preview_args) => preview(preview_args, &args),
    }
}

/// Convert a table into upload documents.
fn convert(args: &ConvertArgs, cli_args: &ExportArgs) -> Result<()> {
    let exporter = Exporter::new(args.to_config())?;
    let summary = exporter.run()?;

    output_summary("Conversion finished", &summary, cli_args)?;
    summary.into_result().map(|_| ())
}

/// Map every row without writing anything.
fn validate(args: &ValidateArgs, cli_args: &ExportArgs) -> Result<()> {
    let exporter = Exporter::new(args.to_config())?;
    let summary = exporter.run()?;

    output_summary("Validation finished", &summary, cli_args)?;
    summary.into_result().map(|_| ())
}

/// Print the document a single row maps to.
fn preview(args: &PreviewArgs, _cli_args: &ExportArgs) -> Result<()> {
    let mapped = preview_row(&args.table, args.row as usize)?;
    info!("Row {} maps to {}", args.row, mapped.file_name);

    let bytes = mapped.document.to_file_bytes()?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&bytes)?;
    writeln!(stdout)?;
    Ok(())
}

/// Map data row `row` (1-based) of the table.
pub fn preview_row(table: &TableArgs, row: usize) -> Result<MappedDocument> {
    let config = table.to_config();
    config.validate()?;

    let rows = config.row_converter().convert(&config.input)?;
    let mut available = 0;
    for raw in rows.take(row) {
        let raw = raw?;
        available += 1;
        if available == row {
            return DocumentMapper::new().map_row(&raw);
        }
    }

    Err(ExportError::RowOutOfRange {
        requested: row,
        available,
    })
}
