//! gb-vendor - a gb plugin to manage vendored dependencies
//!
//! gb runs this binary as `gb vendor <command>` with `GB_PROJECT_DIR` set.
//!
//! ## Architecture
//!
//! ```text
//! main → cli::Dispatcher → commands::{fetch, update, list, delete, purge} → backend
//! ```
//!
//! The dispatcher returns every outcome as a `Result`; `main` is the only
//! place that turns an outcome into an exit code.

mod backend;
mod cli;
mod commands;
mod config;
mod error;
mod flags;
mod project;
mod toolchain;
mod utils;

use std::process::ExitCode;
use std::rc::Rc;

use backend::ReportingBackend;
use cli::Dispatcher;
use commands::Registry;
use config::Environment;
use utils::terminal;

fn main() -> ExitCode {
    let env = Environment::from_env();
    if let Err(e) = utils::logging::init_tracing(env.debug) {
        terminal::print_warning(&format!("{e:#}"));
    }

    let registry = match Registry::standard(Rc::new(ReportingBackend)) {
        Ok(registry) => registry,
        Err(e) => {
            terminal::print_fatal(&e.to_string(), None);
            return ExitCode::FAILURE;
        }
    };
    let dispatcher = Dispatcher::new(env, registry);

    match cli::collect_args(std::env::args_os().skip(1)).and_then(|args| dispatcher.run(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report();
            exit_code(err.exit_code())
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
