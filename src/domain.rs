pub mod diagnostic;
pub mod options;
