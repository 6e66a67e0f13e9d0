// SPDX-FileCopyrightText: 2026 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use cli::InitError;
use pyoutfmt::error::Error;
use std::ffi::OsStr;
use thiserror::Error;

mod cli;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to initialize the CLI tool: {0}")]
    Init(#[from] InitError),

    #[error("Failed to run the formatter: {0}")]
    Format(#[from] Error),
}

fn main() -> Result<(), CliError> {
    let (options, src) = cli::init()?;

    let mut files = Vec::new();
    for source in src {
        if source.is_file() {
            files.push(source);
        } else if source.is_dir() {
            pyoutfmt::add_files_with_suffix(&source, OsStr::new("txt"), &mut files)?;
        } else {
            return Err(Error::TargetFileDoesNotExist(source).into());
        }
    }

    pyoutfmt::run(&options, &files)?;
    Ok(())
}
