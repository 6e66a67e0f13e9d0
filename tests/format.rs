// SPDX-FileCopyrightText: 2026 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fs, path::Path};

#[cfg(test)]
use pretty_assertions::assert_eq;
use pyoutfmt::{error::Error, formatter::reformat, options::FormatOptions};

fn fmt_opts(indentation: &str) -> FormatOptions {
    FormatOptions {
        check: false,
        indentation: indentation.to_string(),
    }
}

fn test_format(
    input: &str,
    expected: &str,
    debug_file: &Path,
    expected_file: &Path,
    fmt_options: &FormatOptions,
) -> Result<(), Error> {
    let output = reformat(input, fmt_options)?;
    let debug_file_abs =
        std::path::absolute(format!("target/tests/{}", debug_file.display())).unwrap();
    std::fs::create_dir_all(debug_file_abs.parent().unwrap()).unwrap();
    if output != expected {
        std::fs::write(debug_file_abs, &output).unwrap();
        eprintln!(
            "Debug out file written to:\n{}\n\nCompare with:\nmeld tests/{} target/tests/{} &",
            debug_file.display(),
            expected_file.display(),
            debug_file.display()
        );
    } else if fs::exists(&debug_file_abs).unwrap() {
        std::fs::remove_file(debug_file_abs).unwrap();
    }
    assert_eq!(output, expected);
    Ok(())
}

macro_rules! test_auto {
    ($input:literal, $expected:literal) => {
        test_format(
            include_str!($input),
            include_str!($expected),
            Path::new(&format!("{}.actual_output.txt", $expected)),
            Path::new($expected),
            &fmt_opts("    "),
        )
    };
    ($input:literal) => {
        test_auto!($input, $input)
    };
}

#[test]
fn test_dict_literal() -> Result<(), Error> {
    test_auto!(
        "data/input/dict_literal.txt",
        "data/output/dict_literal.txt"
    )
}

#[test]
fn test_dict_literal_stable() -> Result<(), Error> {
    test_auto!("data/output/dict_literal.txt")
}

#[test]
fn test_nested_collections() -> Result<(), Error> {
    test_auto!(
        "data/input/nested_collections.txt",
        "data/output/nested_collections.txt"
    )
}

#[test]
fn test_nested_collections_stable() -> Result<(), Error> {
    test_auto!("data/output/nested_collections.txt")
}

#[test]
fn test_comments_and_strings() -> Result<(), Error> {
    test_auto!(
        "data/input/comments_and_strings.txt",
        "data/output/comments_and_strings.txt"
    )
}

#[test]
fn test_comments_and_strings_stable() -> Result<(), Error> {
    test_auto!("data/output/comments_and_strings.txt")
}

#[test]
fn test_repr_output() -> Result<(), Error> {
    test_auto!("data/input/repr_output.txt", "data/output/repr_output.txt")
}

#[test]
fn test_repr_output_stable() -> Result<(), Error> {
    test_auto!("data/output/repr_output.txt")
}

#[test]
fn test_tab_indentation() -> Result<(), Error> {
    let output = reformat("{'k': [1]}", &fmt_opts("\t"))?;
    assert_eq!(output, "{\n\t'k': [\n\t\t1\n\t]\n}\n");
    Ok(())
}

#[test]
fn test_two_space_indentation() -> Result<(), Error> {
    let output = reformat("[1, [2]]", &fmt_opts("  "))?;
    assert_eq!(output, "[\n  1,\n  [\n    2\n  ]\n]\n");
    Ok(())
}
