use std::process::ExitCode;

fn main() -> ExitCode {
    match dashshell::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dashshell: {err:#}");
            ExitCode::FAILURE
        }
    }
}
