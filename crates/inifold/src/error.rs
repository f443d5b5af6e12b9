// Copyright (c) Contributors to the inifold project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for inifold operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with inifold Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or expanding a document.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Option key could not be tokenized
    #[error("Malformed option key {key:?}: {reason}")]
    #[diagnostic(
        code(inifold::malformed_key),
        help("Check that every quote in the key is closed")
    )]
    MalformedKey { key: String, reason: String },

    /// Referenced section absent from the document
    #[error("Unknown section {name:?}")]
    #[diagnostic(
        code(inifold::unknown_section),
        help("{}", suggestion_message(similar))
    )]
    UnknownSection { name: String, similar: Vec<String> },

    /// A section transitively uses itself
    #[error("Cyclic inclusion detected: {}", .chain.join(" -> "))]
    #[diagnostic(
        code(inifold::cyclic_inclusion),
        help("Remove the circular `use` reference between these sections")
    )]
    CyclicInclusion { chain: Vec<String> },

    /// `use` directive without a target section
    #[error("`use` directive {key:?} in section {section:?} names no target")]
    #[diagnostic(
        code(inifold::missing_use_target),
        help("Write the directive as `use SECTION-NAME`")
    )]
    MissingUseTarget { section: String, key: String },

    /// Section header appears more than once
    #[error("Duplicate section {name:?}")]
    #[diagnostic(
        code(inifold::duplicate_section),
        help("Merge the duplicate sections or rename one of them")
    )]
    DuplicateSection { name: String },

    /// Malformed line in an INI document
    #[error("Syntax error on line {line}: {message}")]
    #[diagnostic(code(inifold::syntax))]
    Syntax { line: usize, message: String },

    /// Failed to read file
    #[error("Failed to read file: {path:?}")]
    #[diagnostic(code(inifold::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

fn suggestion_message(similar: &[String]) -> String {
    if similar.is_empty() {
        "Check that the section name is spelled as it appears in the document".to_string()
    } else {
        format!("Did you mean one of: {}?", similar.join(", "))
    }
}
