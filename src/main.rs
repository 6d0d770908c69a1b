use std::process::ExitCode;

use verstamp::ui::output;

fn main() -> ExitCode {
    match verstamp::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(err);
            ExitCode::FAILURE
        }
    }
}
