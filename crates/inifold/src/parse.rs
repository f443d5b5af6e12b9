// Copyright (c) Contributors to the inifold project.
// SPDX-License-Identifier: Apache-2.0

//! INI text reader producing the ordered document model.

use std::path::Path;

use crate::document::Document;
use crate::{Error, Result};

#[cfg(test)]
#[path = "./parse_test.rs"]
mod parse_test;

/// Parse an INI document from text.
///
/// Declaration order of sections and of options within each section is
/// preserved. `key = value` and `key : value` are both accepted, splitting
/// at the first delimiter; a line with neither delimiter is an option
/// without a value. Full lines starting with `#` or `;` are comments.
/// Indented lines continue the previous option's value, joined with
/// newlines.
pub fn parse_str(text: &str) -> Result<Document> {
    let mut document = Document::new();
    let mut current: Option<String> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw_line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        // Indented content extends the previous option's value.
        if raw_line.starts_with([' ', '\t']) {
            let amended = current
                .as_deref()
                .and_then(|name| document.section_mut(name))
                .is_some_and(|section| section.amend_last_value(trimmed));
            if !amended {
                return Err(Error::Syntax {
                    line,
                    message: "continuation line with no preceding option".to_string(),
                });
            }
            continue;
        }

        if trimmed.starts_with('[') {
            let Some(name) = trimmed
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
            else {
                return Err(Error::Syntax {
                    line,
                    message: format!("malformed section header {trimmed:?}"),
                });
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(Error::Syntax {
                    line,
                    message: "empty section name".to_string(),
                });
            }
            document.add_section(name)?;
            current = Some(name.to_string());
            continue;
        }

        let Some(section) = current.as_deref().and_then(|name| document.section_mut(name)) else {
            return Err(Error::Syntax {
                line,
                message: format!("option {trimmed:?} before any section header"),
            });
        };
        let (key, value) = split_option(trimmed);
        section.push(key, value.map(String::from));
    }

    Ok(document)
}

/// Load and parse an INI document from a file path.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|error| Error::ReadFailed {
        path: path.to_path_buf(),
        error,
    })?;

    let mut document = parse_str(&text)?;
    document.set_source_path(path.to_path_buf());
    Ok(document)
}

/// Split an option line at the first `=` or `:` delimiter.
fn split_option(line: &str) -> (&str, Option<&str>) {
    match line.find(['=', ':']) {
        Some(at) => {
            let (key, rest) = line.split_at(at);
            (key.trim_end(), Some(rest[1..].trim_start()))
        }
        None => (line, None),
    }
}
