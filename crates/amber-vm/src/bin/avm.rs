// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Amber VM command-line driver.
//!
//! Loads an `AMBR` bytecode container and executes it. Exit code 0 on a
//! normal halt, 1 on a load failure or runtime fault. `--disassemble`
//! prints a listing instead of executing. `RUST_LOG` controls diagnostic
//! logging.

use std::path::PathBuf;
use std::process::ExitCode;

use amber_vm::console::StdoutConsole;
use amber_vm::{Machine, Module, bytecode, vm};
use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(name = "avm", version, about = "Amber bytecode virtual machine")]
struct Args {
    /// Bytecode module to run (AMBR container).
    file: PathBuf,

    /// Print a listing of the module instead of executing it.
    #[arg(long)]
    disassemble: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let module = match Module::load(&args.file) {
        Ok(module) => module,
        Err(error) => {
            eprintln!("avm: {}: {error}", args.file.display());
            return ExitCode::FAILURE;
        }
    };

    if args.disassemble {
        print!("{}", bytecode::disassemble(&module.code, &module.constants));
        return ExitCode::SUCCESS;
    }

    debug!("running {} ({} code bytes)", args.file.display(), module.code.len());

    let mut machine = Machine::new(module.constants);
    let mut console = StdoutConsole;
    match vm::run(&mut machine, &module.code, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(fault) => {
            eprintln!("avm: runtime error: {fault}");
            ExitCode::FAILURE
        }
    }
}
