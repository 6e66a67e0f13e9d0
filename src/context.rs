// SPDX-FileCopyrightText: 2026 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write;

/// Current state of the renderer.
pub struct Context<W: Write> {
    /// The indentation text for the output line being started
    /// (**not** a level count);
    /// replaced by every indent token,
    /// written out once at the start of the next line.
    pub indent: String,
    /// Whether nothing has been written yet on the current output line.
    pub line_start: bool,
    pub output: W,
}

impl<W: Write> Context<W> {
    pub fn new(output: W) -> Self {
        Self {
            indent: String::new(),
            line_start: true,
            output,
        }
    }
}
