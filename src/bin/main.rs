use loan_invest_advisor::{config::AdvisorConfig, error::AdvisorError, Shell};
use std::io;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = AdvisorConfig::from_env()?;

    // Initialize tracing on stderr; stdout carries the report
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(output = ?config.output_format, "Advisor starting");

    let stdin = io::stdin();
    let mut shell = Shell::with_format(stdin.lock(), io::stdout(), config.output_format);

    // Report the failure once, then exit non-zero
    match shell.run() {
        Ok(()) => {
            info!("Advisor finished");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn failure_message(error: &AdvisorError) -> String {
    format!("Advisor failed: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_is_single_line() {
        let err = AdvisorError::IoError(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"));
        let message = failure_message(&err);

        assert_eq!(message, "Advisor failed: IO error: stdout closed");
        assert_eq!(message.lines().count(), 1);
    }
}
