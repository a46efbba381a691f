// src/services/diagnostic_formatter.rs
// Consistent, optionally colored rendering of parse diagnostics

use console::style;

use crate::domain::diagnostic::{Diagnostic, Severity};
use crate::services::help::HELP_TEXT;

/// Helper for formatting user-facing parser output
pub struct DiagnosticFormatter {
    use_colors: bool,
}

impl DiagnosticFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    /// Format one diagnostic, including any follow-up detail
    pub fn format(&self, diagnostic: &Diagnostic) -> String {
        let mut output = match diagnostic.severity() {
            Severity::Error => {
                let label = if self.use_colors {
                    style("error:").red().bold().to_string()
                } else {
                    "error:".to_string()
                };
                format!("{} {}\n", label, diagnostic)
            }
            Severity::Notice => {
                if self.use_colors {
                    format!("{}\n", style(diagnostic).dim())
                } else {
                    format!("{}\n", diagnostic)
                }
            }
        };

        match diagnostic {
            Diagnostic::UnrecognizedDeploymentMechanism {
                suggestion: Some(suggestion),
                ..
            } => {
                let suggestion = if self.use_colors {
                    style(suggestion).cyan().to_string()
                } else {
                    suggestion.clone()
                };
                output.push_str(&format!("  Did you mean: {}\n", suggestion));
            }
            Diagnostic::InvalidOutputDirectory { reason, .. } => {
                let reason = if self.use_colors {
                    style(reason).dim().to_string()
                } else {
                    reason.clone()
                };
                output.push_str(&format!("  {}\n", reason));
            }
            _ => {}
        }

        output
    }

    /// The usage text, with a highlighted syntax line
    pub fn format_help(&self) -> String {
        if !self.use_colors {
            return HELP_TEXT.to_string();
        }

        HELP_TEXT
            .lines()
            .map(|line| {
                if line.starts_with("Syntax:") {
                    style(line).bold().to_string()
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_error_without_colors() {
        let formatter = DiagnosticFormatter::new(false);

        let output = formatter.format(&Diagnostic::MissingSigningCredentials);
        assert_eq!(
            output,
            "error: Package signing path and alias values are not specified.\n"
        );
    }

    #[test]
    fn test_format_notice_without_colors() {
        let formatter = DiagnosticFormatter::new(false);

        let output = formatter.format(&Diagnostic::KeyPasswordFromEnvironment);
        assert!(!output.starts_with("error:"));
        assert!(output.contains("key password"));
    }

    #[test]
    fn test_format_suggestion() {
        let formatter = DiagnosticFormatter::new(false);

        let output = formatter.format(&Diagnostic::UnrecognizedDeploymentMechanism {
            value: "bundeld".to_string(),
            suggestion: Some("bundled".to_string()),
        });
        assert!(output.contains("Unrecognized deployment mechanism: bundeld"));
        assert!(output.contains("Did you mean: bundled"));

        let output = formatter.format(&Diagnostic::UnrecognizedDeploymentMechanism {
            value: "xyz".to_string(),
            suggestion: None,
        });
        assert!(!output.contains("Did you mean"));
    }

    #[test]
    fn test_format_invalid_output_directory_reason() {
        let formatter = DiagnosticFormatter::new(false);

        let output = formatter.format(&Diagnostic::InvalidOutputDirectory {
            path: PathBuf::from("/root/out"),
            reason: "Permission denied: /root/out".to_string(),
        });
        assert_eq!(
            output,
            "error: Invalid output directory: /root/out\n  Permission denied: /root/out\n"
        );
    }

    #[test]
    fn test_format_help() {
        let formatter = DiagnosticFormatter::new(false);
        assert_eq!(formatter.format_help(), HELP_TEXT);

        let colored = DiagnosticFormatter::new(true);
        assert!(colored.use_colors());
        assert!(colored.format_help().contains("--copy-dependencies-only"));
    }
}
