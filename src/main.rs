use device_matrix::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let cli_args = cli::parse_args();

    // Process the command
    match cli::process_command(cli_args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
