// Copyright (c) Contributors to the inifold project.
// SPDX-License-Identifier: Apache-2.0

//! Depth-first section expansion with cycle detection and memoization.

use std::collections::HashMap;
use std::sync::Arc;

use crate::document::{Document, ResolvedOption, Section};
use crate::handler::{Directive, HandlerRegistry};
use crate::token::tokenize;
use crate::{Error, Result};

#[cfg(test)]
#[path = "./expand_test.rs"]
mod expand_test;

/// Per-call expansion state.
///
/// A scope threads the document under expansion, the handler registry, the
/// chain of sections currently being expanded (cycle detection), and the
/// cache of completed sections (memoization). One scope spans one top-level
/// expansion call and the whole recursive tree beneath it.
pub struct Scope<'a> {
    document: &'a Document,
    registry: &'a HandlerRegistry,
    chain: Vec<String>,
    completed: HashMap<String, Arc<Vec<ResolvedOption>>>,
}

impl<'a> Scope<'a> {
    /// Create a fresh scope over a document and registry.
    pub fn new(document: &'a Document, registry: &'a HandlerRegistry) -> Self {
        Self {
            document,
            registry,
            chain: Vec::new(),
            completed: HashMap::new(),
        }
    }

    /// Document under expansion.
    pub fn document(&self) -> &Document {
        self.document
    }

    /// Sections currently being expanded, outermost first.
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// Pre-populate the completed cache with sections expanded by earlier
    /// calls against the same document.
    pub(crate) fn seed<I>(&mut self, sections: I)
    where
        I: IntoIterator<Item = (String, Arc<Vec<ResolvedOption>>)>,
    {
        self.completed.extend(sections);
    }

    pub(crate) fn into_completed(self) -> HashMap<String, Arc<Vec<ResolvedOption>>> {
        self.completed
    }

    /// Fully expand a section into its ordered, directive-free option list.
    ///
    /// Each section is expanded at most once per scope; later references
    /// receive a copy of the cached result. A section name recurring in the
    /// in-progress chain is a fatal cycle, reported with the full chain.
    pub fn expand(&mut self, name: &str) -> Result<Vec<ResolvedOption>> {
        if let Some(done) = self.completed.get(name) {
            return Ok(done.as_ref().clone());
        }

        if self.chain.iter().any(|started| started == name) {
            let mut chain = self.chain.clone();
            chain.push(name.to_string());
            return Err(Error::CyclicInclusion { chain });
        }

        let document = self.document;
        let Some(section) = document.section(name) else {
            return Err(Error::UnknownSection {
                name: name.to_string(),
                similar: similar_sections(document, name),
            });
        };

        tracing::debug!(section = name, "expanding section");

        self.chain.push(name.to_string());
        let outcome = self.expand_options(name, section);
        self.chain.pop();

        let resolved = Arc::new(outcome?);
        self.completed.insert(name.to_string(), resolved.clone());
        Ok(resolved.as_ref().clone())
    }

    fn expand_options(&mut self, name: &str, section: &Section) -> Result<Vec<ResolvedOption>> {
        let mut resolved = Vec::new();

        for option in section.options() {
            let tokens = tokenize(&option.key)?;
            let handler = self.registry.resolve(&tokens);
            let directive = Directive {
                tokens: &tokens,
                raw_key: &option.key,
                value: option.value.as_deref(),
                section: name,
            };
            resolved.extend(handler.handle(&directive, self)?);
        }

        Ok(resolved)
    }
}

/// Section names resembling the requested one, for diagnostics.
fn similar_sections(document: &Document, name: &str) -> Vec<String> {
    let wanted = name.to_ascii_lowercase();
    document
        .section_names()
        .filter(|candidate| {
            let candidate = candidate.to_ascii_lowercase();
            candidate.contains(&wanted) || wanted.contains(&candidate)
        })
        .map(String::from)
        .collect()
}
