// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Decode(String),
    Svg(String),
    Config(String),
    Print(PrintError),
}

/// Specific error types for print spooling failures.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum PrintError {
    /// The composed page could not be written to the spool file.
    SpoolWrite(String),

    /// No system print command (`lp` or `lpr`) could be launched.
    SpoolerUnavailable,

    /// The spooler ran but reported a failure.
    SpoolerFailed(String),
}

impl PrintError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PrintError::SpoolWrite(_) => "error-print-spool-write",
            PrintError::SpoolerUnavailable => "error-print-spooler-unavailable",
            PrintError::SpoolerFailed(_) => "error-print-spooler-failed",
        }
    }
}

impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintError::SpoolWrite(msg) => write!(f, "Failed to write spool file: {}", msg),
            PrintError::SpoolerUnavailable => write!(f, "No system print spooler found"),
            PrintError::SpoolerFailed(msg) => write!(f, "Print spooler failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Print(e) => write!(f, "Print Error: {}", e),
        }
    }
}

impl From<PrintError> for Error {
    fn from(err: PrintError) -> Self {
        Error::Print(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_image_error_produces_decode_variant() {
        let io_err = std::io::Error::other("decode failed");
        let image_error = image_rs::ImageError::IoError(io_err);
        let err: Error = image_error.into();
        match err {
            Error::Decode(message) => assert!(message.contains("decode failed")),
            _ => panic!("expected Decode variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn print_error_i18n_keys() {
        assert_eq!(
            PrintError::SpoolerUnavailable.i18n_key(),
            "error-print-spooler-unavailable"
        );
        assert_eq!(
            PrintError::SpoolWrite(String::new()).i18n_key(),
            "error-print-spool-write"
        );
        assert_eq!(
            PrintError::SpoolerFailed(String::new()).i18n_key(),
            "error-print-spooler-failed"
        );
    }

    #[test]
    fn print_error_display_mentions_spooler() {
        let err = Error::Print(PrintError::SpoolerFailed("exit code 1".into()));
        assert!(format!("{}", err).contains("exit code 1"));
    }
}
