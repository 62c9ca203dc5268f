// src/main.rs

use std::process::ExitCode;

use vscode_test_launcher::errors::LaunchError;
use vscode_test_launcher::{cli, logging, run};

#[tokio::main]
async fn main() -> ExitCode {
    match run_main().await {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(LaunchError::TestsFailed) => {
            eprintln!("Failed");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("vscode-test-launcher error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run_main() -> vscode_test_launcher::errors::Result<i32> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
