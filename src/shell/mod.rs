//! Interactive Shell
//!
//! Console front end. States:
//! AWAITING MODE CHOICE → (custom) AWAITING INPUTS ⇄ retry → DISPLAYING → DONE
//!                      → (demo)   DISPLAYING → DONE
//!                      → (other)  DONE
//!
//! Generic over reader and writer so whole sessions run against buffers.

use crate::config::OutputFormat;
use crate::error::AdvisorError;
use crate::models::{AnalysisReport, RiskTolerance};
use crate::report::analyze;
use crate::Result;
use std::io::{BufRead, Write};
use tracing::{info, warn};

pub const SEPARATOR_WIDTH: usize = 50;

pub const NOTE: &str =
    "Note: The AI doesn't just give yes/no but provides contextual reasoning.";

/// Fixed values used by demo mode
pub const DEMO_LOAN_RATE: f64 = 4.5;
pub const DEMO_INVESTMENT_RETURN: f64 = 7.0;
pub const DEMO_RISK_TOLERANCE: &str = "high";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Custom,
    Demo,
}

impl Mode {
    /// Only the literal choices "1" and "2" are accepted
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Mode::Custom),
            "2" => Some(Mode::Demo),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisInputs {
    pub loan_rate: f64,
    pub investment_return: f64,
    pub risk_tolerance: String,
}

impl AnalysisInputs {
    pub fn demo() -> Self {
        Self {
            loan_rate: DEMO_LOAN_RATE,
            investment_return: DEMO_INVESTMENT_RETURN,
            risk_tolerance: DEMO_RISK_TOLERANCE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellState {
    AwaitingModeChoice,
    AwaitingInputs,
    Displaying { inputs: AnalysisInputs, mode: Mode },
    Done,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_format(input, output, OutputFormat::Text)
    }

    pub fn with_format(input: R, output: W, format: OutputFormat) -> Self {
        Self {
            input,
            output,
            format,
        }
    }

    /// Drive the session until it reaches `Done`
    pub fn run(&mut self) -> Result<()> {
        let mut state = ShellState::AwaitingModeChoice;

        loop {
            state = match state {
                ShellState::AwaitingModeChoice => self.choose_mode()?,
                ShellState::AwaitingInputs => self.collect_inputs()?,
                ShellState::Displaying { inputs, mode } => self.display(inputs, mode)?,
                ShellState::Done => break,
            };
        }

        self.output.flush()?;
        Ok(())
    }

    /// Give back the writer, e.g. to inspect a buffered session
    pub fn into_output(self) -> W {
        self.output
    }

    fn choose_mode(&mut self) -> Result<ShellState> {
        writeln!(self.output, "Financial Analysis Tool")?;
        writeln!(self.output, "1. Use custom inputs")?;
        writeln!(self.output, "2. Run demo")?;

        let Some(choice) = self.read_line("\nEnter choice (1 or 2): ")? else {
            return Ok(ShellState::Done);
        };

        match Mode::from_choice(&choice) {
            Some(Mode::Custom) => {
                info!("Custom input mode selected");
                Ok(ShellState::AwaitingInputs)
            }
            Some(Mode::Demo) => {
                info!("Demo mode selected");
                writeln!(self.output, "\nRunning demo with sample values...")?;
                Ok(ShellState::Displaying {
                    inputs: AnalysisInputs::demo(),
                    mode: Mode::Demo,
                })
            }
            None => {
                warn!(choice = %choice, "Invalid mode choice");
                writeln!(self.output, "Invalid choice. Exiting.")?;
                Ok(ShellState::Done)
            }
        }
    }

    fn collect_inputs(&mut self) -> Result<ShellState> {
        let Some(loan_text) = self.read_line("Enter loan interest rate (%): ")? else {
            return Ok(ShellState::Done);
        };
        let loan_rate = match parse_rate(&loan_text) {
            Ok(rate) => rate,
            Err(e) => return self.retry(e),
        };

        let Some(investment_text) = self.read_line("Enter expected investment return (%): ")?
        else {
            return Ok(ShellState::Done);
        };
        let investment_return = match parse_rate(&investment_text) {
            Ok(rate) => rate,
            Err(e) => return self.retry(e),
        };

        let Some(risk_text) = self.read_line("Enter risk tolerance (low/medium/high): ")? else {
            return Ok(ShellState::Done);
        };
        let risk_tolerance = risk_text.to_lowercase();
        if risk_tolerance.parse::<RiskTolerance>().is_err() {
            return self.retry(AdvisorError::InvalidArgument(
                "Invalid risk tolerance. Must be low/medium/high".to_string(),
            ));
        }

        Ok(ShellState::Displaying {
            inputs: AnalysisInputs {
                loan_rate,
                investment_return,
                risk_tolerance,
            },
            mode: Mode::Custom,
        })
    }

    fn display(&mut self, inputs: AnalysisInputs, mode: Mode) -> Result<ShellState> {
        let report = match analyze(
            inputs.loan_rate,
            inputs.investment_return,
            &inputs.risk_tolerance,
        ) {
            Ok(report) => report,
            Err(e) if mode == Mode::Custom && e.is_input_error() => return self.retry(e),
            Err(e) => return Err(e),
        };

        match self.format {
            OutputFormat::Text => self.render_text(&report)?,
            OutputFormat::Json => self.render_json(&report)?,
        }

        Ok(ShellState::Done)
    }

    fn render_text(&mut self, report: &AnalysisReport) -> Result<()> {
        let separator = "=".repeat(SEPARATOR_WIDTH);

        writeln!(self.output, "\n{}", separator)?;
        writeln!(self.output, "Local Decision: {}", report.recommendation.decision)?;
        writeln!(self.output, "Reason: {}\n", report.recommendation.reason)?;
        writeln!(self.output, "AI Prompt:")?;
        writeln!(self.output, "\"{}\"\n", report.prompt)?;
        writeln!(self.output, "{}", NOTE)?;
        writeln!(self.output, "{}", separator)?;
        Ok(())
    }

    fn render_json(&mut self, report: &AnalysisReport) -> Result<()> {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        let json = serde_json::to_string_pretty(report)?;

        writeln!(self.output, "\n{}", separator)?;
        writeln!(self.output, "{}", json)?;
        writeln!(self.output, "{}", separator)?;
        Ok(())
    }

    /// Report a recoverable input error and restart input collection
    fn retry(&mut self, error: AdvisorError) -> Result<ShellState> {
        warn!(error = %error, "Rejected input, restarting");
        writeln!(self.output, "\nError: {}", error.user_message())?;
        writeln!(self.output, "Please enter valid inputs\n")?;
        Ok(ShellState::AwaitingInputs)
    }

    /// Prompt and read one line without its terminator. `None` at end of input.
    /// Invalid UTF-8 is replaced, so it fails validation instead of the session.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            info!("End of input");
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&bytes).into_owned();
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}

pub fn parse_rate(text: &str) -> Result<f64> {
    text.trim().parse::<f64>().map_err(|_| {
        AdvisorError::ParseError(format!("could not convert string to float: '{}'", text))
    })
}
