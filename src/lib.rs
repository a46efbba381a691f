// src/lib.rs
// Library half of androiddeploy, so the parser can be driven from tests and other tools

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
