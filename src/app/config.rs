use std::path::PathBuf;

use tracing::Level;

use super::error::AppError;
use crate::streaming::{AbortOnError, ErrorPolicy, SkipErrors};

pub const USAGE: &str = "Usage: dragon-bank [-v|--verbose] [--strict] <commands.csv>";

/// Runtime configuration taken from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub input: PathBuf,
    /// Stop at the first failing command instead of skipping it
    pub strict: bool,
    pub verbose: bool,
}

impl AppConfig {
    /// Parse arguments; the first item is the program name
    pub fn from_args<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut input = None;
        let mut strict = false;
        let mut verbose = false;

        for arg in args.into_iter().skip(1) {
            match arg.as_str() {
                "-v" | "--verbose" => verbose = true,
                "--strict" => strict = true,
                flag if flag.starts_with('-') => {
                    return Err(AppError::InvalidArguments(format!(
                        "unknown flag {flag}\n{USAGE}"
                    )));
                }
                path => {
                    if input.replace(PathBuf::from(path)).is_some() {
                        return Err(AppError::InvalidArguments(USAGE.to_string()));
                    }
                }
            }
        }

        let input = input.ok_or_else(|| AppError::InvalidArguments(USAGE.to_string()))?;

        Ok(Self {
            input,
            strict,
            verbose,
        })
    }

    pub fn log_level(&self) -> Level {
        if self.verbose { Level::DEBUG } else { Level::WARN }
    }

    pub fn error_policy(&self) -> Box<dyn ErrorPolicy> {
        if self.strict {
            Box::new(AbortOnError)
        } else {
            Box::new(SkipErrors)
        }
    }
}
