//! narrative-export CLI binary.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use narrative_export::cli::args::ExportArgs;
use narrative_export::cli::commands::execute_command;

fn init_logging(level: LevelFilter) {
    // RUST_LOG, when set, refines the level picked by -q/-v.
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}

fn main() -> ExitCode {
    let args = ExportArgs::parse();
    init_logging(args.log_level());

    match execute_command(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
