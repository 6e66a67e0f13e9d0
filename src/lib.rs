// SPDX-FileCopyrightText: 2026 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use git_version::git_version;

use crate::error::{Error, FilesListErrorType, FmtResult};
use crate::options::FormatOptions;

pub mod context;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod options;
pub mod token;

pub const VERSION: &str = git_version!(
    args = ["--dirty", "--broken", "--always", "--tags"],
    fallback = "unknown"
);

/// Recursively collects all files with the given `suffix`
/// found under `dir` into `files`.
///
/// # Errors
///
/// Fails if a directory can not be listed,
/// or one of its entries not be inspected.
pub fn add_files_with_suffix(
    dir: &Path,
    suffix: &OsStr,
    files: &mut Vec<PathBuf>,
) -> FmtResult<()> {
    let entries = fs::read_dir(dir).map_err(|_| {
        Error::FailedToListFilesInInputDir(dir.to_path_buf(), FilesListErrorType::ReadDir)
    })?;
    for entry_res in entries {
        let entry = entry_res.map_err(|_| {
            Error::FailedToListFilesInInputDir(dir.to_path_buf(), FilesListErrorType::ExtractEntry)
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|_| {
            Error::FailedToListFilesInInputDir(
                dir.to_path_buf(),
                FilesListErrorType::EvaluateFileType,
            )
        })?;
        if file_type.is_dir() {
            add_files_with_suffix(&path, suffix, files)?;
        } else if path.extension() == Some(suffix) {
            files.push(path);
        }
    }
    Ok(())
}

/// Reformats all given `files` in place,
/// or only checks them when [`FormatOptions::check`] is set.
///
/// Every file is processed independently;
/// indentation depth never carries over from one file to the next.
///
/// # Errors
///
/// Fails on the first file that can not be read or written,
/// that can not be tokenized,
/// or - in check mode - that is not already formatted.
pub fn run(options: &FormatOptions, files: &[PathBuf]) -> FmtResult<()> {
    for file in files {
        tracing::info!("Reformatting {} ...", file.display());
        let original = fs::read_to_string(file)
            .map_err(|_| Error::FailedToReadTargetFile(file.clone()))?;
        let formatted = formatter::reformat(&original, options)?;
        if formatted == original {
            continue;
        }
        if options.check {
            let patch = diffy::create_patch(&original, &formatted);
            return Err(Error::Check(patch.to_string()));
        }
        fs::write(file, &formatted)
            .map_err(|_| Error::FailedToWriteFormattedFile(file.clone()))?;
    }
    Ok(())
}
