// src/domain/options.rs
// The deployment configuration record produced by argument parsing

use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Default digest algorithm handed to the signing tool
pub const DIGEST_ALG_DEFAULT: &str = "SHA-256";

/// Default signature algorithm handed to the signing tool
pub const SIG_ALG_DEFAULT: &str = "SHA256withRSA";

/// How runtime libraries reach the device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMechanism {
    /// Runtime files are shipped inside the package
    #[default]
    Bundled,

    /// Runtime files are assumed to be present on the target already
    Unbundled,
}

impl DeploymentMechanism {
    /// Every accepted mechanism name, lowercase
    pub const NAMES: [&'static str; 2] = ["bundled", "unbundled"];
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized deployment mechanism: {0}")]
pub struct ParseDeploymentMechanismError(pub String);

impl FromStr for DeploymentMechanism {
    type Err = ParseDeploymentMechanismError;

    /// Matches ASCII case-insensitively, so `BUNDLED` and `bundled` are equal
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("bundled") {
            Ok(Self::Bundled)
        } else if s.eq_ignore_ascii_case("unbundled") {
            Ok(Self::Unbundled)
        } else {
            Err(ParseDeploymentMechanismError(s.to_string()))
        }
    }
}

/// Everything needed to sign the package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigningOptions {
    pub release_package: bool,
    pub key_store: Option<PathBuf>,
    pub key_store_alias: Option<String>,

    #[serde(skip_serializing)]
    pub key_store_password: Option<String>,

    #[serde(skip_serializing)]
    pub key_password: Option<String>,

    pub store_type: Option<String>,
    pub sig_file: Option<String>,
    pub digest_alg: String,
    pub sig_alg: String,
    pub tsa_url: Option<String>,
    pub tsa_cert: Option<String>,
    pub internal_sf: bool,
    pub sections_only: bool,
    pub protected_authentication_path: bool,
}

impl Default for SigningOptions {
    fn default() -> Self {
        Self {
            release_package: false,
            key_store: None,
            key_store_alias: None,
            key_store_password: None,
            key_password: None,
            store_type: None,
            sig_file: None,
            digest_alg: DIGEST_ALG_DEFAULT.to_string(),
            sig_alg: SIG_ALG_DEFAULT.to_string(),
            tsa_url: None,
            tsa_cert: None,
            internal_sf: false,
            sections_only: false,
            protected_authentication_path: false,
        }
    }
}

/// Fully resolved deployment request
///
/// Built once by [`crate::services::options_parser::OptionsParser`] and
/// handed to the caller by value. Callers branch on
/// [`DeploymentOptions::is_syntax_error_or_help_requested`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentOptions {
    // Only ever set through `request_help`, never cleared.
    help_requested: bool,

    pub verbose: bool,
    pub timing: bool,
    pub build: bool,
    pub aux_mode: bool,

    // I/O locations
    pub output_directory: PathBuf,
    pub input_file_name: PathBuf,
    pub build_directory: Option<PathBuf>,
    pub dep_file_path: Option<PathBuf>,
    pub apk_path: Option<PathBuf>,
    pub jdk_path: Option<PathBuf>,

    pub deployment_mechanism: DeploymentMechanism,
    pub build_aab: bool,

    pub install_apk: bool,
    pub uninstall_apk: bool,

    pub signing: SigningOptions,

    pub android_platform: Option<String>,
    pub install_location: Option<String>,

    // Scanner overrides
    pub qml_import_scanner_binary_path: Option<PathBuf>,
    pub no_rcc_bundle_cleanup: bool,
    pub copy_dependencies_only: bool,
}

impl Default for DeploymentOptions {
    fn default() -> Self {
        Self {
            help_requested: false,
            verbose: false,
            timing: false,
            build: true,
            aux_mode: false,
            output_directory: PathBuf::new(),
            input_file_name: PathBuf::new(),
            build_directory: None,
            dep_file_path: None,
            apk_path: None,
            jdk_path: None,
            deployment_mechanism: DeploymentMechanism::default(),
            build_aab: false,
            install_apk: false,
            uninstall_apk: false,
            signing: SigningOptions::default(),
            android_platform: None,
            install_location: None,
            qml_import_scanner_binary_path: None,
            no_rcc_bundle_cleanup: false,
            copy_dependencies_only: false,
        }
    }
}

impl DeploymentOptions {
    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    /// Latch the help request for the rest of the parse
    pub fn request_help(&mut self) {
        self.help_requested = true;
    }

    /// True when the caller should print usage and stop
    pub fn is_syntax_error_or_help_requested(&self) -> bool {
        self.help_requested || self.output_directory.as_os_str().is_empty()
    }
}
