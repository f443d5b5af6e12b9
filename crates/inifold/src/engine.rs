// Copyright (c) Contributors to the inifold project.
// SPDX-License-Identifier: Apache-2.0

//! Engine facade tying the document, registry, and expander together.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::Result;
use crate::document::{Document, ResolvedOption};
use crate::expand::Scope;
use crate::handler::{Handler, HandlerRegistry};

#[cfg(test)]
#[path = "./engine_test.rs"]
mod engine_test;

/// Expansion engine for one loaded document.
///
/// The engine owns the handler registry and a document-lifetime cache of
/// completed expansions. The cache is append-only and guarded by a mutex, so
/// a shared engine can serve concurrent [`expand_section`] calls; each call
/// still runs its own scope with its own in-progress chain.
///
/// [`expand_section`]: Engine::expand_section
pub struct Engine {
    document: Document,
    registry: HandlerRegistry,
    results: Mutex<HashMap<String, Arc<Vec<ResolvedOption>>>>,
}

impl Engine {
    /// Create an engine with the built-in handlers.
    pub fn new(document: Document) -> Self {
        Self::with_registry(document, HandlerRegistry::new())
    }

    /// Create an engine with a caller-assembled registry.
    pub fn with_registry(document: Document, registry: HandlerRegistry) -> Self {
        Self {
            document,
            registry,
            results: Mutex::new(HashMap::new()),
        }
    }

    /// Document served by this engine.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Bind a handler to an operation name for subsequent expansions.
    ///
    /// Cached results are discarded: a new operation can change the
    /// expansion of any section.
    pub fn register_handler<H>(&mut self, operation: impl Into<String>, handler: H)
    where
        H: Handler + 'static,
    {
        self.registry.register(operation, handler);
        self.results.lock().unwrap().clear();
    }

    /// Fully expand a section into its ordered, directive-free option list.
    ///
    /// Returns the cached result when this section was already expanded for
    /// this document; otherwise runs a fresh expansion and caches every
    /// section it completed along the way.
    pub fn expand_section(&self, name: &str) -> Result<Vec<ResolvedOption>> {
        if let Some(done) = self.results.lock().unwrap().get(name) {
            return Ok(done.as_ref().clone());
        }

        let mut scope = Scope::new(&self.document, &self.registry);
        {
            let results = self.results.lock().unwrap();
            scope.seed(
                results
                    .iter()
                    .map(|(section, list)| (section.clone(), list.clone())),
            );
        }

        let resolved = scope.expand(name)?;

        let mut results = self.results.lock().unwrap();
        for (section, list) in scope.into_completed() {
            results.entry(section).or_insert(list);
        }

        Ok(resolved)
    }
}
