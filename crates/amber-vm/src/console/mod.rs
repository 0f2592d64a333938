// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Console output for the `PRINT` opcode.
//!
//! The VM writes program output through this trait so tests can capture it
//! in memory while the driver sends it to stdout.

mod mock;

pub use mock::MockConsole;

use std::io::Write;

/// Sink for program output.
pub trait Console {
    /// Write a string fragment.
    fn write_str(&mut self, text: &str);

    /// Write a string followed by a newline.
    fn write_line(&mut self, text: &str) {
        self.write_str(text);
        self.write_str("\n");
    }
}

/// Console backed by the process stdout.
///
/// Write failures are ignored; program output has no error channel and a
/// broken pipe should not turn into a VM fault.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_str(&mut self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }
}
