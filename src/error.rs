// SPDX-FileCopyrightText: 2026 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::lexer;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug)]
pub enum FilesListErrorType {
    ReadDir,
    ExtractEntry,
    EvaluateFileType,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input is not equivalent to the (re-)formatted version of its self:\n{0}")]
    Check(String),

    #[error("Failed to tokenize input: {0}")]
    Lex(#[from] lexer::Error),

    /// Represents all cases of `std::fmt::Error`.
    #[error(transparent)]
    Format(#[from] std::fmt::Error),

    #[error("The target to format {} does not seem to exist", .0.display())]
    TargetFileDoesNotExist(PathBuf),

    #[error("Error while reading {}", .0.display())]
    FailedToReadTargetFile(PathBuf),

    #[error("Error while writing {}", .0.display())]
    FailedToWriteFormattedFile(PathBuf),

    #[error("Failed to list files in input directory {path}: {1:?}", path = .0.display())]
    FailedToListFilesInInputDir(PathBuf, FilesListErrorType),
}

pub type FmtResult<T> = std::result::Result<T, Error>;
