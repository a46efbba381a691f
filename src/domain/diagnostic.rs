// src/domain/diagnostic.rs
// Messages produced while interpreting arguments

use std::fmt;
use std::path::PathBuf;

/// How a diagnostic should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Notice,
}

/// Something the parser wants the user to know about
///
/// Diagnostics never change the outcome of a parse on their own; the
/// state they describe is already recorded in the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A value-taking flag was the last token
    MissingValue { flag: &'static str },

    UnrecognizedDeploymentMechanism {
        value: String,
        suggestion: Option<String>,
    },

    /// `--sign` could not find a keystore path and alias
    MissingSigningCredentials,

    InvalidOutputDirectory { path: PathBuf, reason: String },

    SigningCredentialsFromEnvironment,
    StorePasswordFromEnvironment,
    KeyPasswordFromEnvironment,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Self::MissingValue { .. }
            | Self::UnrecognizedDeploymentMechanism { .. }
            | Self::MissingSigningCredentials
            | Self::InvalidOutputDirectory { .. } => Severity::Error,
            Self::SigningCredentialsFromEnvironment
            | Self::StorePasswordFromEnvironment
            | Self::KeyPasswordFromEnvironment => Severity::Notice,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue { flag } => write!(f, "Missing value for {}", flag),
            Self::UnrecognizedDeploymentMechanism { value, .. } => {
                write!(f, "Unrecognized deployment mechanism: {}", value)
            }
            Self::MissingSigningCredentials => {
                write!(f, "Package signing path and alias values are not specified.")
            }
            Self::InvalidOutputDirectory { path, .. } => {
                write!(f, "Invalid output directory: {}", path.display())
            }
            Self::SigningCredentialsFromEnvironment => write!(
                f,
                "Using package signing path and alias values found from the environment variables."
            ),
            Self::StorePasswordFromEnvironment => write!(
                f,
                "Using package signing store password found from the environment variable."
            ),
            Self::KeyPasswordFromEnvironment => write!(
                f,
                "Using package signing key password found from the environment variable."
            ),
        }
    }
}
