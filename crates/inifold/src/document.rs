// Copyright (c) Contributors to the inifold project.
// SPDX-License-Identifier: Apache-2.0

//! Ordered section/option data model for INI documents.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

#[cfg(test)]
#[path = "./document_test.rs"]
mod document_test;

/// A raw option as written in a section.
///
/// `value` is `None` for a bare key with no delimiter and `Some("")` for an
/// explicitly empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawOption {
    pub key: String,
    pub value: Option<String>,
}

/// A fully resolved option with no remaining directives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOption {
    pub key: String,
    pub value: Option<String>,
}

impl ResolvedOption {
    /// Create a resolved option from an effective key and value.
    pub fn new(key: &str, value: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            value: value.map(String::from),
        }
    }
}

/// A named, ordered sequence of raw options.
///
/// Declaration order is semantically significant: it is the order options are
/// processed and merged during expansion.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    name: String,
    options: Vec<RawOption>,
}

impl Section {
    /// Create an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// Name of this section within its document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a raw option.
    pub fn push(&mut self, key: impl Into<String>, value: Option<String>) {
        self.options.push(RawOption {
            key: key.into(),
            value,
        });
    }

    /// Options in declaration order.
    pub fn options(&self) -> &[RawOption] {
        &self.options
    }

    /// Number of raw options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` when the section holds no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Extend the value of the most recent option with a continuation line.
    ///
    /// Returns `false` when there is no option to amend.
    pub(crate) fn amend_last_value(&mut self, continuation: &str) -> bool {
        let Some(option) = self.options.last_mut() else {
            return false;
        };
        let value = option.value.get_or_insert_with(String::new);
        if !value.is_empty() {
            value.push('\n');
        }
        value.push_str(continuation);
        true
    }
}

/// An ordered collection of uniquely named sections.
///
/// Read-only during expansion; construction happens up front, either through
/// the reader in [`crate::parse`] or programmatically via [`add_section`].
///
/// [`add_section`]: Document::add_section
#[derive(Debug, Clone, Default)]
pub struct Document {
    sections: IndexMap<String, Section>,
    source_path: Option<PathBuf>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty section, failing when the name is already taken.
    pub fn add_section(&mut self, name: impl Into<String>) -> crate::Result<&mut Section> {
        let name = name.into();
        if self.sections.contains_key(&name) {
            return Err(crate::Error::DuplicateSection { name });
        }
        let section = Section::new(name.clone());
        Ok(self.sections.entry(name).or_insert(section))
    }

    /// Lookup a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub(crate) fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Returns `true` when a section with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Iterate sections in declaration order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Iterate section names in declaration order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` when the document holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Path to the file this document was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub(crate) fn set_source_path(&mut self, path: PathBuf) {
        self.source_path = Some(path);
    }
}
