//! Application configuration from CLI flags and environment.

use clap::Parser;

use tutorfee_cli::presenter::OutputFormat;

/// TutorFee: tutoring fee quote calculator.
#[derive(Parser, Debug)]
#[command(name = "tutorfee", version, about)]
pub struct AppConfig {
    /// Area where tutoring takes place.
    #[arg(short, long, env = "TUTORFEE_AREA")]
    pub area: Option<String>,

    /// Examination board.
    #[arg(short, long, env = "TUTORFEE_BOARD")]
    pub board: Option<String>,

    /// Selected subject, e.g. "Physics - 5054". Repeat for each subject.
    #[arg(short, long = "subject", value_name = "SUBJECT")]
    pub subjects: Vec<String>,

    /// Read the selection from a JSON file ("-" for stdin). Takes precedence
    /// over `--area` and `--board`, including their environment variables.
    #[arg(long, value_name = "PATH", conflicts_with = "subjects")]
    pub selection: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Quiet mode (only output the total).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (log each lookup to stderr).
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write the total to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// List known areas, boards, and premium subjects.
    #[arg(long)]
    pub list: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Log level implied by the flags.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }

    /// Directive to add on top of `RUST_LOG`. `None` when `RUST_LOG` is set
    /// and `--verbose` is not, so the environment filter decides alone.
    #[must_use]
    pub fn log_directive(&self, rust_log_set: bool) -> Option<tracing::Level> {
        if self.verbose || !rust_log_set {
            Some(self.log_level())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig, clap::Error> {
        AppConfig::try_parse_from(std::iter::once("tutorfee").chain(args.iter().copied()))
    }

    #[test]
    fn parse_area_board_subjects() {
        let config = parse(&[
            "-a", "DHA", "-b", "ACCA", "-s", "Physics - 1", "--subject", "English - 2",
        ])
        .unwrap();
        assert_eq!(config.area.as_deref(), Some("DHA"));
        assert_eq!(config.board.as_deref(), Some("ACCA"));
        assert_eq!(config.subjects, vec!["Physics - 1", "English - 2"]);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn parse_json_format() {
        let config = parse(&["-a", "DHA", "-b", "ACCA", "--format", "json"]).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn selection_conflicts_with_subject_flags() {
        assert!(parse(&["--selection", "sel.json", "-s", "Physics"]).is_err());
    }

    #[test]
    fn selection_wins_over_area_and_board() {
        let config = parse(&["--selection", "-", "-a", "DHA", "-b", "ACCA"]).unwrap();
        assert_eq!(config.selection.as_deref(), Some("-"));
    }

    #[test]
    fn rust_log_decides_without_verbose() {
        let config = parse(&["--list"]).unwrap();
        assert_eq!(config.log_directive(true), None);
        assert_eq!(config.log_directive(false), Some(tracing::Level::WARN));
        let config = parse(&["-v", "--list"]).unwrap();
        assert_eq!(config.log_directive(true), Some(tracing::Level::DEBUG));
    }

    #[test]
    fn verbose_raises_log_level() {
        let config = parse(&["-v", "--list"]).unwrap();
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
        let config = parse(&["--list"]).unwrap();
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }
}
