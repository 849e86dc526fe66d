use std::process::ExitCode;

fn main() -> ExitCode {
    match app_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Shown to the user by the calling editor
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
