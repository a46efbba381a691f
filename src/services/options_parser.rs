// src/services/options_parser.rs
// Turns a flat list of command line tokens into DeploymentOptions

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

use crate::domain::diagnostic::Diagnostic;
use crate::domain::options::DeploymentOptions;
use crate::ports::environment::{
    Environment, KEYSTORE_ALIAS_VAR, KEYSTORE_KEY_PASS_VAR, KEYSTORE_PATH_VAR,
    KEYSTORE_STORE_PASS_VAR, TIMING_OUTPUT_VAR,
};
use crate::ports::filesystem::FileSystem;
use crate::services::flags::{Flag, FlagArity, FlagDef, FLAG_PREFIX};
use crate::services::suggestion_provider::suggest_deployment_mechanism;

/// Result of a single parse
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub options: DeploymentOptions,
    pub diagnostics: Vec<Diagnostic>,

    /// Structural success. Always true today; callers should branch on
    /// [`ParseOutcome::is_syntax_error_or_help_requested`] instead.
    pub parsed: bool,
}

impl ParseOutcome {
    pub fn is_syntax_error_or_help_requested(&self) -> bool {
        self.options.is_syntax_error_or_help_requested()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }
}

/// Interprets deployment tool arguments
///
/// Environment and file system access go through the injected ports, so a
/// parse is deterministic given its inputs.
pub struct OptionsParser<'a> {
    env: &'a dyn Environment,
    fs: &'a dyn FileSystem,
}

impl<'a> OptionsParser<'a> {
    pub fn new(env: &'a dyn Environment, fs: &'a dyn FileSystem) -> Self {
        Self { env, fs }
    }

    /// Scan the tokens left to right, then derive defaults and resolve the
    /// output directory
    pub fn parse<S: AsRef<str>>(&self, arguments: &[S]) -> ParseOutcome {
        let args: Vec<&str> = arguments.iter().map(|arg| arg.as_ref()).collect();
        let mut scan = Scan {
            args: &args,
            index: 0,
            options: DeploymentOptions::default(),
            diagnostics: Vec::new(),
        };

        while scan.index < args.len() {
            let token = args[scan.index];
            if let Some(def) = FlagDef::lookup(token) {
                self.apply(&mut scan, def);
            }
            scan.index += 1;
        }

        let Scan {
            mut options,
            mut diagnostics,
            ..
        } = scan;
        self.derive(&mut options, &mut diagnostics);

        ParseOutcome {
            options,
            diagnostics,
            parsed: true,
        }
    }

    /// Parse raw process arguments. Tokens that are not valid Unicode are
    /// converted lossily instead of aborting the parse.
    pub fn parse_os<S: AsRef<OsStr>>(&self, arguments: &[S]) -> ParseOutcome {
        let args: Vec<String> = arguments
            .iter()
            .map(|arg| arg.as_ref().to_string_lossy().into_owned())
            .collect();
        self.parse(&args)
    }

    fn apply(&self, scan: &mut Scan<'_>, def: &FlagDef) {
        match def.arity {
            FlagArity::NoValue => apply_switch(&mut scan.options, def.flag),
            FlagArity::RequiresValue => match scan.take_value() {
                Some(value) => scan.apply_value(def.flag, value),
                None => {
                    scan.options.request_help();
                    scan.diagnostics
                        .push(Diagnostic::MissingValue { flag: def.name });
                }
            },
            FlagArity::Custom => self.apply_sign(scan),
        }
    }

    fn apply_sign(&self, scan: &mut Scan<'_>) {
        let remaining = scan.args.len() - scan.index - 1;

        if remaining < 2 {
            let key_store = non_empty_var(self.env, KEYSTORE_PATH_VAR);
            let alias = non_empty_var(self.env, KEYSTORE_ALIAS_VAR);
            match (key_store, alias) {
                (Some(key_store), Some(alias)) => {
                    scan.diagnostics
                        .push(Diagnostic::SigningCredentialsFromEnvironment);
                    scan.options.signing.key_store = Some(PathBuf::from(key_store));
                    scan.options.signing.key_store_alias = Some(alias);
                }
                _ => {
                    scan.options.request_help();
                    scan.diagnostics.push(Diagnostic::MissingSigningCredentials);
                }
            }
        } else {
            let key_store = scan.args[scan.index + 1];
            let alias = scan.args[scan.index + 2];
            if !key_store.starts_with(FLAG_PREFIX) && !alias.starts_with(FLAG_PREFIX) {
                scan.options.signing.key_store = Some(PathBuf::from(key_store));
                scan.options.signing.key_store_alias = Some(alias.to_string());
                scan.index += 2;
            } else {
                scan.options.request_help();
                scan.diagnostics.push(Diagnostic::MissingSigningCredentials);
            }
        }

        // Passwords given as arguments take precedence
        let signing = &mut scan.options.signing;
        if is_unset(&signing.key_store_password) {
            if let Some(password) = non_empty_var(self.env, KEYSTORE_STORE_PASS_VAR) {
                scan.diagnostics
                    .push(Diagnostic::StorePasswordFromEnvironment);
                signing.key_store_password = Some(password);
            }
        }
        if is_unset(&signing.key_password) {
            if let Some(password) = non_empty_var(self.env, KEYSTORE_KEY_PASS_VAR) {
                scan.diagnostics.push(Diagnostic::KeyPasswordFromEnvironment);
                signing.key_password = Some(password);
            }
        }
    }

    fn derive(&self, options: &mut DeploymentOptions, diagnostics: &mut Vec<Diagnostic>) {
        // A depfile lists paths relative to the build directory
        if is_unset_path(&options.build_directory) && !is_unset_path(&options.dep_file_path) {
            options.request_help();
        }

        if options.input_file_name.as_os_str().is_empty() {
            options.input_file_name = self.default_input_file_name();
        }

        options.timing = self.env.var(TIMING_OUTPUT_VAR).is_some();

        match self.resolve_output_directory(&options.output_directory) {
            Ok(resolved) => options.output_directory = resolved,
            Err(reason) => {
                diagnostics.push(Diagnostic::InvalidOutputDirectory {
                    path: options.output_directory.clone(),
                    reason,
                });
                options.output_directory = PathBuf::new();
            }
        }
    }

    /// `android-<cwd name>-deployment-settings.json`
    fn default_input_file_name(&self) -> PathBuf {
        let dir_name = self
            .fs
            .current_dir()
            .ok()
            .and_then(|dir| dir.file_name().map(|name| name.to_string_lossy().into_owned()))
            .unwrap_or_default();

        PathBuf::from(format!("android-{}-deployment-settings.json", dir_name))
    }

    /// Create the directory, then return its canonical form with exactly one
    /// trailing separator
    fn resolve_output_directory(&self, directory: &Path) -> Result<PathBuf, String> {
        if directory.as_os_str().is_empty() {
            return Err("no output directory given".to_string());
        }

        self.fs
            .create_dir_all(directory)
            .map_err(|e| e.to_string())?;
        let canonical = self
            .fs
            .canonicalize(directory)
            .map_err(|e| e.to_string())?;

        Ok(with_trailing_separator(canonical))
    }
}

/// Cursor over the tokens plus the record being built
struct Scan<'t> {
    args: &'t [&'t str],
    index: usize,
    options: DeploymentOptions,
    diagnostics: Vec<Diagnostic>,
}

impl<'t> Scan<'t> {
    /// Consume the token after the current one, if there is one
    fn take_value(&mut self) -> Option<&'t str> {
        let value = self.args.get(self.index + 1).copied()?;
        self.index += 1;
        Some(value)
    }

    fn apply_value(&mut self, flag: Flag, value: &str) {
        let options = &mut self.options;
        match flag {
            Flag::Output => options.output_directory = PathBuf::from(value.trim()),
            Flag::Input => options.input_file_name = PathBuf::from(value.trim()),
            Flag::AndroidPlatform => options.android_platform = Some(value.to_string()),
            Flag::Deployment => match value.parse() {
                Ok(mechanism) => options.deployment_mechanism = mechanism,
                Err(_) => {
                    options.request_help();
                    self.diagnostics
                        .push(Diagnostic::UnrecognizedDeploymentMechanism {
                            value: value.to_string(),
                            suggestion: suggest_deployment_mechanism(value),
                        });
                }
            },
            Flag::Device => options.install_location = Some(value.to_string()),
            Flag::Jdk => options.jdk_path = Some(PathBuf::from(value)),
            Flag::Apk => options.apk_path = Some(PathBuf::from(value)),
            Flag::DepFile => options.dep_file_path = Some(PathBuf::from(value)),
            Flag::BuildDir => options.build_directory = Some(PathBuf::from(value)),
            Flag::StorePass => options.signing.key_store_password = Some(value.to_string()),
            Flag::StoreType => options.signing.store_type = Some(value.to_string()),
            Flag::KeyPass => options.signing.key_password = Some(value.to_string()),
            Flag::SigFile => options.signing.sig_file = Some(value.to_string()),
            Flag::DigestAlg => options.signing.digest_alg = value.to_string(),
            Flag::SigAlg => options.signing.sig_alg = value.to_string(),
            Flag::Tsa => options.signing.tsa_url = Some(value.to_string()),
            Flag::TsaCert => options.signing.tsa_cert = Some(value.to_string()),
            Flag::QmlImportScannerBinary => {
                options.qml_import_scanner_binary_path = Some(PathBuf::from(value.trim()))
            }
            _ => {}
        }
    }
}

fn apply_switch(options: &mut DeploymentOptions, flag: Flag) {
    match flag {
        Flag::Aab => {
            options.build_aab = true;
            options.build = true;
        }
        // Ignored once an App Bundle has been requested
        Flag::NoBuild => {
            if !options.build_aab {
                options.build = false;
            }
        }
        Flag::Install => {
            options.install_apk = true;
            options.uninstall_apk = true;
        }
        Flag::Reinstall => {
            options.install_apk = true;
            options.uninstall_apk = false;
        }
        Flag::Help => options.request_help(),
        Flag::Verbose => options.verbose = true,
        Flag::Release => options.signing.release_package = true,
        Flag::InternalSf => options.signing.internal_sf = true,
        Flag::SectionsOnly => options.signing.sections_only = true,
        Flag::Protected => options.signing.protected_authentication_path = true,
        Flag::AuxMode => options.aux_mode = true,
        Flag::NoRccBundleCleanup => options.no_rcc_bundle_cleanup = true,
        Flag::CopyDependenciesOnly => options.copy_dependencies_only = true,
        _ => {}
    }
}

fn non_empty_var(env: &dyn Environment, name: &str) -> Option<String> {
    env.var(name).filter(|value| !value.is_empty())
}

fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn is_unset_path(value: &Option<PathBuf>) -> bool {
    value
        .as_ref()
        .map_or(true, |path| path.as_os_str().is_empty())
}

fn with_trailing_separator(path: PathBuf) -> PathBuf {
    if path.to_string_lossy().ends_with(MAIN_SEPARATOR) {
        return path;
    }

    let mut raw: OsString = path.into_os_string();
    raw.push(MAIN_SEPARATOR_STR);
    PathBuf::from(raw)
}
