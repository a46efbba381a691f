pub mod environment;
pub mod filesystem;
