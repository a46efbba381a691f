// src/services/flags.rs
// The fixed flag vocabulary understood by the options parser

/// Every recognized flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Output,
    Input,
    Aab,
    NoBuild,
    Install,
    Reinstall,
    AndroidPlatform,
    Help,
    Verbose,
    Deployment,
    Device,
    Release,
    Jdk,
    Apk,
    DepFile,
    BuildDir,
    Sign,
    StorePass,
    StoreType,
    KeyPass,
    SigFile,
    DigestAlg,
    SigAlg,
    Tsa,
    TsaCert,
    InternalSf,
    SectionsOnly,
    Protected,
    AuxMode,
    QmlImportScannerBinary,
    NoRccBundleCleanup,
    CopyDependenciesOnly,
}

/// Whether a flag consumes the following token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    NoValue,
    RequiresValue,
    /// `--sign` looks ahead on its own terms
    Custom,
}

/// A single flag definition
#[derive(Debug, Clone, Copy)]
pub struct FlagDef {
    pub name: &'static str,
    pub flag: Flag,
    pub arity: FlagArity,
}

const fn def(name: &'static str, flag: Flag, arity: FlagArity) -> FlagDef {
    FlagDef { name, flag, arity }
}

/// Lookup order. No name is ambiguous with another, so the order only
/// matters for speed.
pub const FLAGS: &[FlagDef] = &[
    def("--output", Flag::Output, FlagArity::RequiresValue),
    def("--input", Flag::Input, FlagArity::RequiresValue),
    def("--aab", Flag::Aab, FlagArity::NoValue),
    def("--no-build", Flag::NoBuild, FlagArity::NoValue),
    def("--install", Flag::Install, FlagArity::NoValue),
    def("--reinstall", Flag::Reinstall, FlagArity::NoValue),
    def("--android-platform", Flag::AndroidPlatform, FlagArity::RequiresValue),
    def("--help", Flag::Help, FlagArity::NoValue),
    def("--verbose", Flag::Verbose, FlagArity::NoValue),
    def("--deployment", Flag::Deployment, FlagArity::RequiresValue),
    def("--device", Flag::Device, FlagArity::RequiresValue),
    def("--release", Flag::Release, FlagArity::NoValue),
    def("--jdk", Flag::Jdk, FlagArity::RequiresValue),
    def("--apk", Flag::Apk, FlagArity::RequiresValue),
    def("--depfile", Flag::DepFile, FlagArity::RequiresValue),
    def("--builddir", Flag::BuildDir, FlagArity::RequiresValue),
    def("--sign", Flag::Sign, FlagArity::Custom),
    def("--storepass", Flag::StorePass, FlagArity::RequiresValue),
    def("--storetype", Flag::StoreType, FlagArity::RequiresValue),
    def("--keypass", Flag::KeyPass, FlagArity::RequiresValue),
    def("--sigfile", Flag::SigFile, FlagArity::RequiresValue),
    def("--digestalg", Flag::DigestAlg, FlagArity::RequiresValue),
    def("--sigalg", Flag::SigAlg, FlagArity::RequiresValue),
    def("--tsa", Flag::Tsa, FlagArity::RequiresValue),
    def("--tsacert", Flag::TsaCert, FlagArity::RequiresValue),
    def("--internalsf", Flag::InternalSf, FlagArity::NoValue),
    def("--sectionsonly", Flag::SectionsOnly, FlagArity::NoValue),
    def("--protected", Flag::Protected, FlagArity::NoValue),
    def("--aux-mode", Flag::AuxMode, FlagArity::NoValue),
    def(
        "--qml-importscanner-binary",
        Flag::QmlImportScannerBinary,
        FlagArity::RequiresValue,
    ),
    def(
        "--no-rcc-bundle-cleanup",
        Flag::NoRccBundleCleanup,
        FlagArity::NoValue,
    ),
    def(
        "--copy-dependencies-only",
        Flag::CopyDependenciesOnly,
        FlagArity::NoValue,
    ),
];

/// Marks a token as a flag rather than a value
pub const FLAG_PREFIX: &str = "--";

impl FlagDef {
    /// ASCII case-insensitive match against the full token
    pub fn matches(&self, token: &str) -> bool {
        token.eq_ignore_ascii_case(self.name)
    }

    /// Find the definition for a token, if it names a known flag
    pub fn lookup(token: &str) -> Option<&'static FlagDef> {
        FLAGS.iter().find(|def| def.matches(token))
    }
}
