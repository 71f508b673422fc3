use std::path::PathBuf;

use clap::Parser;

use crate::features::countdown::ProgressStyle;

#[derive(Parser, Debug)]
#[command(name = "tpomo")]
#[command(about = "A terminal pomodoro timer with a big glyph clock")]
#[command(long_about = "tpomo - A terminal pomodoro timer

Counts down work and break phases with a large clock, a progress line and
a quote. Asks for the durations at startup unless they are given as flags.

KEYS:
  p    Pause / resume
  q    Quit the whole session

QUICK START:
  tpomo                          Ask for durations, then start
  tpomo -w 50 -b 10 -c 3         Three 50/10 cycles, no questions
  tpomo --progress bar           Use a block bar instead of emoji

Settings are read from ~/.tpomo/config.yaml when it exists.")]
#[command(version)]
pub struct Cli {
    /// Work phase length in minutes
    #[arg(short, long, value_name = "MIN")]
    pub work: Option<u32>,

    /// Break phase length in minutes
    #[arg(short, long = "break", value_name = "MIN")]
    pub break_minutes: Option<u32>,

    /// Number of work/break cycles
    #[arg(short, long, value_name = "N")]
    pub cycles: Option<u32>,

    /// Progress line style
    #[arg(short, long, value_enum)]
    pub progress: Option<ProgressStyle>,

    /// Hide the quote under the phase label
    #[arg(long)]
    pub no_quote: bool,

    /// Skip the startup questions and use flags or configured values
    #[arg(long)]
    pub no_prompt: bool,

    /// Read work and break lengths as seconds instead of minutes
    #[arg(long)]
    pub seconds: bool,

    /// Path to the configuration file
    #[arg(long, value_name = "PATH", env = "TPOMO_CONFIG")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["tpomo", "-w", "50", "--break", "10", "-c", "3", "-p", "bar"]);
        assert_eq!(cli.work, Some(50));
        assert_eq!(cli.break_minutes, Some(10));
        assert_eq!(cli.cycles, Some(3));
        assert_eq!(cli.progress, Some(ProgressStyle::Bar));
        assert!(!cli.no_quote);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tpomo"]);
        assert!(cli.work.is_none());
        assert!(cli.progress.is_none());
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(Cli::try_parse_from(["tpomo", "--work", "soon"]).is_err());
    }
}
