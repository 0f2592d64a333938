// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # Amber VM
//!
//! Stack-based bytecode interpreter for the Amber language.
//!
//! This crate provides:
//! - Tagged value representation (integers, pool references, heap references)
//! - Interned, append-only string constant pool
//! - Slot-indexed heap with free-list reuse and mark-and-sweep collection
//! - Operand stack, globals, and frame-pointer call discipline
//! - Fetch-decode-execute dispatch loop over the Amber opcode set
//! - Loader for the on-disk `AMBR` bytecode container
//! - Console abstraction for program output (stdout and in-memory mock)
//!
//! The interpreter is strictly single-threaded. The collector runs inline
//! on the interpreter thread, stop-the-world, at the allocation points of
//! the opcode set (string concatenation and the heap allocation opcodes).

pub mod bytecode;
pub mod console;
pub mod heap;
pub mod loader;
pub mod machine;
pub mod pool;
pub mod value;
pub mod vm;

// Re-export commonly used types at crate root
pub use loader::Module;
pub use machine::Machine;
pub use value::Value;
pub use vm::{Fault, RuntimeError};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
