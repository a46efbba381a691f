pub mod diagnostic_formatter;
pub mod flags;
pub mod help;
pub mod options_parser;
pub(crate) mod suggestion_provider;
