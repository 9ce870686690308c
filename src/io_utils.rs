//! CLI-facing error wrapping: path context plus an actionable hint.

use std::fmt;
use std::io;
use std::path::Path;

use crate::error::EcbScopeError;

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
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "File appears truncated or corrupted.",
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

/// Convert a library error into a CLI error with a hint.
pub fn ecbscope_cli_error(context: &str, err: EcbScopeError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Wrap an error from writing an output file, keeping the path visible.
///
/// Plain I/O failures get the suggestion treatment; encoder and report
/// errors keep their own hint.
pub fn output_cli_error(operation: &str, path: &Path, err: EcbScopeError) -> CliError {
    match err {
        EcbScopeError::Io(io) => io_cli_error(operation, path, io),
        other => CliError {
            msg: format!(
                "Error {} '{}': {}",
                operation,
                path.display(),
                cli_hint(&other)
            ),
            source: Some(Box::new(other)),
        },
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &EcbScopeError) -> String {
    use EcbScopeError::*;
    match err {
        Config(msg) => format!("{msg}. Adjust the flags and retry."),
        EmptyInput(msg) => format!("{msg}. Provide at least one full block."),
        Render(msg) => format!("{msg}. Raise --pixels-per-block to shrink the raster."),
        Image(e) => format!("{e}. PNG encoding failed."),
        Csv(e) => format!("{e}. CSV report not written."),
        Json(e) => format!("{e}. JSON report not written."),
        Io(io) => format!("{io}"),
    }
}
