// src/main.rs

use std::{env, ffi::OsString, process, time::Instant};

use anyhow::{Context, Result};
use console::style;

use androiddeploy::{
    adapters::{environment::ProcessEnvironment, filesystem::RealFileSystem},
    domain::diagnostic::Severity,
    services::{diagnostic_formatter::DiagnosticFormatter, options_parser::OptionsParser},
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let started = Instant::now();
    let arguments: Vec<OsString> = env::args_os().skip(1).collect();

    let environment = ProcessEnvironment;
    let fs = RealFileSystem;
    let outcome = OptionsParser::new(&environment, &fs).parse_os(&arguments);

    let formatter = DiagnosticFormatter::new(console::colors_enabled_stderr());
    for diagnostic in &outcome.diagnostics {
        let rendered = formatter.format(diagnostic);
        match diagnostic.severity() {
            Severity::Error => eprint!("{}", rendered),
            Severity::Notice => print!("{}", rendered),
        }
    }

    if outcome.is_syntax_error_or_help_requested() {
        eprintln!("{}", formatter.format_help());
        return Ok(1);
    }

    let options = outcome.options;
    if options.verbose {
        let summary =
            serde_yaml::to_string(&options).context("Failed to render deployment options")?;
        println!("{}", style("Resolved deployment options:").bold());
        print!("{}", summary);
    }

    if options.timing {
        println!(
            "[TIMING] {:?} argument processing",
            started.elapsed()
        );
    }

    Ok(0)
}
