//! Startup questions for the session durations.

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::cli::args::Cli;
use crate::config::Config;
use crate::error::TpomoError;
use crate::features::countdown::CountdownConfig;

/// Line-oriented question/answer over any reader and writer.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask `question`, falling back to `default` on an empty answer.
    ///
    /// # Errors
    ///
    /// Returns [`TpomoError::InvalidInput`] if the answer is not a positive
    /// whole number, or an I/O error if the streams fail.
    pub fn ask(&mut self, question: &str, field: &'static str, default: u32) -> Result<u32, TpomoError> {
        write!(self.output, "{} {question} [{default}]: ", ">".green())?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        parse_answer(field, &line, default)
    }
}

/// Parse one answer. Empty input means `default`.
///
/// # Errors
///
/// Returns [`TpomoError::InvalidInput`] for anything but a positive integer.
pub fn parse_answer(field: &'static str, input: &str, default: u32) -> Result<u32, TpomoError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    match trimmed.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(TpomoError::InvalidInput {
            field,
            value: trimmed.to_string(),
        }),
    }
}

/// Work out the session from flags, answers and configured defaults.
///
/// Flags win; missing values are asked for unless prompting is turned off,
/// in which case the configured values are used.
///
/// # Errors
///
/// Returns a configuration error for invalid answers or zero values.
pub fn resolve_countdown<R: BufRead, W: Write>(
    cli: &Cli,
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> Result<CountdownConfig, TpomoError> {
    let ask = config.timer.prompt && !cli.no_prompt;
    let (unit, unit_name) = if cli.seconds { (1, "seconds") } else { (60, "minutes") };
    let to_unit = |minutes: u32| minutes.saturating_mul(60) / unit;

    let work = match cli.work {
        Some(value) => value,
        None if ask => prompter.ask(
            &format!("Enter working time in {unit_name}"),
            "work time",
            to_unit(config.timer.work_minutes),
        )?,
        None => to_unit(config.timer.work_minutes),
    };
    let rest = match cli.break_minutes {
        Some(value) => value,
        None if ask => prompter.ask(
            &format!("Enter break time in {unit_name}"),
            "break time",
            to_unit(config.timer.break_minutes),
        )?,
        None => to_unit(config.timer.break_minutes),
    };
    let cycles = match cli.cycles {
        Some(value) => value,
        None if ask => prompter.ask("Enter number of cycles", "cycles", config.timer.cycles)?,
        None => config.timer.cycles,
    };

    CountdownConfig::new(
        u64::from(work) * u64::from(unit),
        u64::from(rest) * u64::from(unit),
        cycles,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn resolve(args: &[&str], answers: &str) -> (Result<CountdownConfig, TpomoError>, String) {
        let cli = Cli::parse_from(args);
        let mut output = Vec::new();
        let mut prompter = Prompter::new(answers.as_bytes(), &mut output);
        let result = resolve_countdown(&cli, &Config::default(), &mut prompter);
        drop(prompter);
        (result, String::from_utf8_lossy(&output).into_owned())
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("cycles", "", 1).unwrap(), 1);
        assert_eq!(parse_answer("cycles", "  \n", 4).unwrap(), 4);
        assert_eq!(parse_answer("cycles", "3\n", 1).unwrap(), 3);
        assert!(matches!(
            parse_answer("cycles", "0", 1),
            Err(TpomoError::InvalidInput { field: "cycles", .. })
        ));
        assert!(parse_answer("cycles", "two", 1).is_err());
        assert!(parse_answer("cycles", "-1", 1).is_err());
    }

    #[test]
    fn test_empty_answers_use_defaults() {
        let (result, output) = resolve(&["tpomo"], "\n\n\n");
        let config = result.unwrap();

        assert_eq!(config.work_seconds(), 25 * 60);
        assert_eq!(config.break_seconds(), 5 * 60);
        assert_eq!(config.cycles(), 1);
        assert!(output.contains("Enter working time in minutes [25]"));
        assert!(output.contains("Enter break time in minutes [5]"));
        assert!(output.contains("Enter number of cycles [1]"));
    }

    #[test]
    fn test_answers() {
        let (result, _) = resolve(&["tpomo"], "50\n10\n3\n");
        let config = result.unwrap();
        assert_eq!(config.work_seconds(), 3000);
        assert_eq!(config.break_seconds(), 600);
        assert_eq!(config.cycles(), 3);
    }

    #[test]
    fn test_flags_skip_questions() {
        let (result, output) = resolve(&["tpomo", "-w", "1", "-b", "2", "-c", "2"], "");
        let config = result.unwrap();
        assert_eq!(config.work_seconds(), 60);
        assert_eq!(config.break_seconds(), 120);
        assert!(output.is_empty());
    }

    #[test]
    fn test_seconds_flag() {
        let (result, _) = resolve(&["tpomo", "--seconds", "-w", "3", "-b", "2", "-c", "1"], "");
        let config = result.unwrap();
        assert_eq!(config.work_seconds(), 3);
        assert_eq!(config.break_seconds(), 2);
    }

    #[test]
    fn test_no_prompt_uses_config() {
        let (result, output) = resolve(&["tpomo", "--no-prompt", "-c", "2"], "");
        let config = result.unwrap();
        assert_eq!(config.work_seconds(), 25 * 60);
        assert_eq!(config.cycles(), 2);
        assert!(output.is_empty());
    }

    #[test]
    fn test_invalid_answer_stops_before_later_questions() {
        let (result, output) = resolve(&["tpomo"], "abc\n5\n1\n");
        assert!(matches!(
            result,
            Err(TpomoError::InvalidInput { field: "work time", .. })
        ));
        assert!(!output.contains("break time"));
    }

    #[test]
    fn test_zero_flag_is_config_error() {
        let (result, _) = resolve(&["tpomo", "-w", "0", "-b", "5", "-c", "1"], "");
        assert!(result.unwrap_err().is_config());
    }
}
