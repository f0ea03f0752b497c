//! ppdfgrep CLI: parallel pdfgrep over every PDF found under the given paths.

use anyhow::Result;
use clap::Parser;
use ppdfgrep::engine::arg_parser::Cli;
use ppdfgrep::engine::handle_run;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> Result<ExitCode> {
    let start_time = Instant::now();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1 like the search tool does; --help exits 0.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return Ok(ExitCode::from(code));
        }
    };
    let status = handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(ExitCode::from(status.exit_code() as u8))
}
