// tests/options_parser_test.rs
// End-to-end parses against the real file system

use std::path::{PathBuf, MAIN_SEPARATOR};

use androiddeploy::{
    adapters::{environment::MapEnvironment, filesystem::RealFileSystem},
    domain::{diagnostic::Diagnostic, options::DeploymentMechanism},
    ports::environment::{KEYSTORE_ALIAS_VAR, KEYSTORE_PATH_VAR},
    services::options_parser::{OptionsParser, ParseOutcome},
};
use pretty_assertions::assert_eq;
use tempfile::{tempdir, Builder};

fn parse(env: &MapEnvironment, args: &[&str]) -> ParseOutcome {
    OptionsParser::new(env, &RealFileSystem).parse(args)
}

#[test]
fn test_relative_output_directory_is_created_and_canonicalized() {
    // Relative to the working directory, which cargo sets to the crate root
    let scratch = Builder::new()
        .prefix("deploy-out-")
        .tempdir_in(".")
        .unwrap();
    let relative = scratch.path().join("nested").join("out");
    let relative = relative.to_string_lossy().into_owned();

    let outcome = parse(&MapEnvironment::new(), &["--output", relative.as_str()]);

    let expected = scratch.path().join("nested").join("out").canonicalize().unwrap();
    let resolved = outcome.options.output_directory.to_string_lossy().into_owned();

    assert!(!outcome.is_syntax_error_or_help_requested());
    assert!(outcome.options.output_directory.is_absolute());
    assert_eq!(
        resolved,
        format!("{}{}", expected.to_string_lossy(), MAIN_SEPARATOR)
    );
    assert!(!resolved.ends_with(&format!("{0}{0}", MAIN_SEPARATOR)));
    assert!(expected.is_dir());
}

#[test]
fn test_existing_output_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().to_string_lossy().into_owned();

    let outcome = parse(&MapEnvironment::new(), &["--OUTPUT", path.as_str(), "--aab"]);

    assert!(!outcome.is_syntax_error_or_help_requested());
    assert!(outcome
        .options
        .output_directory
        .to_string_lossy()
        .ends_with(MAIN_SEPARATOR));
    assert!(outcome.options.build_aab);
}

#[test]
fn test_uncreatable_output_directory_is_cleared() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let target = blocker.join("out").to_string_lossy().into_owned();

    let outcome = parse(&MapEnvironment::new(), &["--output", target.as_str()]);

    assert!(outcome.options.output_directory.as_os_str().is_empty());
    assert!(outcome.is_syntax_error_or_help_requested());
    assert!(matches!(
        outcome.diagnostics.as_slice(),
        [Diagnostic::InvalidOutputDirectory { path, .. }] if *path == PathBuf::from(&target)
    ));
}

#[test]
fn test_missing_output_directory() {
    let outcome = parse(&MapEnvironment::new(), &["--verbose"]);

    assert!(outcome.options.output_directory.as_os_str().is_empty());
    assert!(outcome.is_syntax_error_or_help_requested());
    assert!(!outcome.options.help_requested());
}

#[test]
fn test_default_input_file_name_uses_current_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().to_string_lossy().into_owned();

    let outcome = parse(&MapEnvironment::new(), &["--output", path.as_str()]);

    let cwd = std::env::current_dir().unwrap();
    let cwd_name = cwd.file_name().unwrap().to_string_lossy();
    let input = outcome.options.input_file_name.to_string_lossy().into_owned();

    assert_eq!(
        input,
        format!("android-{}-deployment-settings.json", cwd_name)
    );
    assert!(input.ends_with("-deployment-settings.json"));
}

#[test]
fn test_full_signed_release_request() {
    let dir = tempdir().unwrap();
    let path = dir.path().to_string_lossy().into_owned();
    let env = MapEnvironment::new()
        .with_var(KEYSTORE_PATH_VAR, "/keys/env.jks")
        .with_var(KEYSTORE_ALIAS_VAR, "env-alias");

    let outcome = parse(
        &env,
        &[
            "--output",
            path.as_str(),
            "--input",
            "android-app-deployment-settings.json",
            "--deployment",
            "unbundled",
            "--release",
            "--reinstall",
            "--sign",
            "release.jks",
            "upload",
            "--storepass",
            "secret",
        ],
    );

    let options = &outcome.options;
    assert!(!outcome.is_syntax_error_or_help_requested());
    assert_eq!(options.deployment_mechanism, DeploymentMechanism::Unbundled);
    assert!(options.install_apk);
    assert!(!options.uninstall_apk);
    assert!(options.signing.release_package);
    assert_eq!(options.signing.key_store, Some(PathBuf::from("release.jks")));
    assert_eq!(options.signing.key_store_alias.as_deref(), Some("upload"));
    assert_eq!(options.signing.key_store_password.as_deref(), Some("secret"));
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn test_trailing_sign_with_environment() {
    let dir = tempdir().unwrap();
    let path = dir.path().to_string_lossy().into_owned();
    let env = MapEnvironment::new()
        .with_var(KEYSTORE_PATH_VAR, "/keys/env.jks")
        .with_var(KEYSTORE_ALIAS_VAR, "env-alias");

    let outcome = parse(&env, &["--output", path.as_str(), "--sign"]);

    assert!(!outcome.is_syntax_error_or_help_requested());
    assert_eq!(
        outcome.options.signing.key_store,
        Some(PathBuf::from("/keys/env.jks"))
    );

    let env = MapEnvironment::new().with_var(KEYSTORE_ALIAS_VAR, "env-alias");
    let outcome = parse(&env, &["--output", path.as_str(), "--sign"]);

    assert!(outcome.is_syntax_error_or_help_requested());
    assert!(outcome
        .diagnostics
        .contains(&Diagnostic::MissingSigningCredentials));
}

#[test]
fn test_trailing_qml_importscanner_binary_requests_help() {
    let dir = tempdir().unwrap();
    let path = dir.path().to_string_lossy().into_owned();

    let outcome = parse(
        &MapEnvironment::new(),
        &["--output", path.as_str(), "--qml-importscanner-binary"],
    );

    assert!(outcome.options.help_requested());
    assert_eq!(outcome.options.qml_import_scanner_binary_path, None);
}

#[cfg(unix)]
#[test]
fn test_non_unicode_output_directory_is_created() {
    use std::ffi::{OsStr, OsString};
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let mut target = OsString::from(dir.path());
    target.push("/out");
    target.push(OsStr::from_bytes(b"\xff"));

    let outcome = OptionsParser::new(&MapEnvironment::new(), &RealFileSystem)
        .parse_os(&[OsString::from("--output"), target]);

    let expected = dir.path().canonicalize().unwrap().join("out\u{FFFD}");
    assert!(!outcome.is_syntax_error_or_help_requested());
    assert!(expected.is_dir());
    assert_eq!(
        outcome.options.output_directory.to_string_lossy(),
        format!("{}{}", expected.to_string_lossy(), MAIN_SEPARATOR)
    );
}
