use calcz::model::{Operation, OutputFormat, OverflowPolicy};
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "calcz", bin_name = "calcz", version = get_version())]
#[command(about = "A simple calculation tool", long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// The first number (flat form, adds)
    #[arg(long, required = true)]
    pub num1: Option<u16>,

    /// The second number (flat form, adds)
    #[arg(long, required = true)]
    pub num2: Option<u16>,

    /// What to do when a result does not fit the operand type
    #[arg(long, value_enum, global = true, help_heading = "Options")]
    pub overflow: Option<OverflowPolicy>,

    /// Output format
    #[arg(long, value_enum, global = true, help_heading = "Options")]
    pub output: Option<OutputFormat>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add two numbers
    Add(AddArgs),

    /// Subtract the second number from the first
    Sub(SubArgs),
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct AddArgs {
    /// The first number
    #[arg(long)]
    pub num1: u16,

    /// The second number
    #[arg(long)]
    pub num2: u16,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct SubArgs {
    /// The first number
    #[arg(long, allow_negative_numbers = true)]
    pub num1: i16,

    /// The second number
    #[arg(long, allow_negative_numbers = true)]
    pub num2: i16,
}

impl From<Commands> for Operation {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Add(AddArgs { num1, num2 }) => Operation::Add { num1, num2 },
            Commands::Sub(SubArgs { num1, num2 }) => Operation::Sub { num1, num2 },
        }
    }
}

impl Cli {
    /// Turns the parsed arguments into the options value handed to the API.
    ///
    /// Without a subcommand the flat `--num1/--num2` pair means `add`.
    pub fn operation(self) -> Result<Operation, clap::Error> {
        match (self.command, self.num1, self.num2) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--num1/--num2 before a subcommand cannot be combined with it",
            )),
            (Some(command), None, None) => Ok(command.into()),
            (None, Some(num1), Some(num2)) => Ok(Operation::Add { num1, num2 }),
            (None, _, _) => Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "both --num1 and --num2 are required",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("calcz").chain(args.iter().copied()))
    }

    #[test]
    fn add_subcommand_parses_to_add() {
        let cli = parse(&["add", "--num1", "1", "--num2", "2"]).unwrap();
        assert_eq!(cli.operation().unwrap(), Operation::Add { num1: 1, num2: 2 });
    }

    #[test]
    fn sub_subcommand_accepts_negative_operands() {
        let cli = parse(&["sub", "--num1", "-5", "--num2", "-7"]).unwrap();
        assert_eq!(cli.operation().unwrap(), Operation::Sub { num1: -5, num2: -7 });
    }

    #[test]
    fn flat_form_means_add() {
        let cli = parse(&["--num1", "4", "--num2", "5"]).unwrap();
        assert_eq!(cli.operation().unwrap(), Operation::Add { num1: 4, num2: 5 });
    }

    #[test]
    fn missing_option_is_a_usage_error() {
        let err = parse(&["add", "--num1", "1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("--num2"));
    }

    #[test]
    fn flat_form_requires_both_operands() {
        let err = parse(&["--num1", "1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn operands_must_fit_the_declared_type() {
        let err = parse(&["add", "--num1", "-1", "--num2", "2"]).unwrap_err();
        assert_ne!(err.kind(), ErrorKind::DisplayHelp);

        let err = parse(&["sub", "--num1", "40000", "--num2", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn flat_operands_conflict_with_subcommand() {
        let cli = parse(&["--num1", "1", "sub", "--num1", "1", "--num2", "2"]).unwrap();
        let err = cli.operation().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn global_options_work_after_subcommand() {
        let cli = parse(&[
            "add", "--num1", "1", "--num2", "2", "--overflow", "wrapping", "--output", "json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.overflow, Some(OverflowPolicy::Wrapping));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(cli.verbose);
    }

    #[test]
    fn help_flag_is_reported_as_help() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("Usage"));
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
