use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the directory exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn wordlength_cli_error(context: &str, err: crate::WordLengthError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &crate::WordLengthError) -> String {
    use crate::WordLengthError::*;
    match err {
        InvalidRange { start, stop } => {
            format!("empty range [{start}, {stop}). Pass a --stop larger than --start.")
        }
        Spelling(e) => format!("{e}. Narrow the range to values the speller supports."),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Io(io) => format!("{io}"),
        Csv(e) => format!("{e}. Could not write CSV output."),
        Json(e) => format!("{e}. Could not write JSON output."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WordLengthError;

    #[test]
    fn invalid_range_hint_mentions_flags() {
        let err = wordlength_cli_error("scan", WordLengthError::InvalidRange { start: 5, stop: 5 });
        assert!(err.to_string().starts_with("scan: empty range [5, 5)"));
        assert!(err.to_string().contains("--stop"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
