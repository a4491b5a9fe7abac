use std::process::ExitCode;

fn main() -> ExitCode {
    let _log_guard = match navrouter::logging::init_logging() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: {:#}", e);
            None
        }
    };

    match navrouter::cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
