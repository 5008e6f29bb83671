use std::io;
use std::process::ExitCode;

use squares_pipeline::{logging, PipelineRunner};
use tracing::debug;

fn main() -> ExitCode {
    logging::init();

    let runner = PipelineRunner::default();
    let stdout = io::stdout();
    match runner.run(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "pipeline aborted");
            eprintln!("squares_pipeline: {}", e);
            ExitCode::FAILURE
        }
    }
}
