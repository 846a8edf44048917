//! Command-line argument parsing.

use thiserror::Error;

use crate::models::{Region, RegionParseError};

/// Options for a normal run of the TUI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOptions {
    pub region: Region,
    /// Initial search text, fed through the debouncer like typed input
    pub query: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Version,
    Help,
    Run(RunOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error(transparent)]
    InvalidRegion(#[from] RegionParseError),
}

/// Parse command-line arguments (program name first, as in `std::env::args()`).
///
/// Unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use headlines::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["headlines".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--region" | "-r" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                options.region = value.parse()?;
            }
            "--query" | "-q" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                options.query = Some(value);
            }
            _ => {}
        }
    }

    Ok(CliCommand::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let args: Vec<String> = std::iter::once("headlines")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_no_args_runs_with_defaults() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run(RunOptions::default())));
    }

    #[test]
    fn test_version_flags() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_help_flags() {
        assert_eq!(parse(&["--help"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_region_and_query() {
        assert_eq!(
            parse(&["--region", "gb", "-q", "apple"]),
            Ok(CliCommand::Run(RunOptions {
                region: Region::Gb,
                query: Some("apple".to_string()),
            }))
        );
    }

    #[test]
    fn test_invalid_region_is_rejected() {
        assert_eq!(
            parse(&["--region", "fr"]),
            Err(ArgsError::InvalidRegion(RegionParseError("fr".to_string())))
        );
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse(&["--query"]),
            Err(ArgsError::MissingValue("--query".to_string()))
        );
    }

    #[test]
    fn test_unknown_args_are_ignored() {
        assert_eq!(
            parse(&["--verbose", "-r", "au"]),
            Ok(CliCommand::Run(RunOptions {
                region: Region::Au,
                query: None,
            }))
        );
    }
}
