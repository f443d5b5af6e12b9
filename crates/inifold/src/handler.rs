// Copyright (c) Contributors to the inifold project.
// SPDX-License-Identifier: Apache-2.0

//! Operation handlers and the registry that resolves them.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::document::ResolvedOption;
use crate::expand::Scope;
use crate::{Error, Result};

#[cfg(test)]
#[path = "./handler_test.rs"]
mod handler_test;

/// One option under dispatch: its parsed key tokens and its raw form.
#[derive(Debug)]
pub struct Directive<'a> {
    /// Token sequence of the key; the first token names the operation.
    pub tokens: &'a [String],

    /// The key exactly as written.
    pub raw_key: &'a str,

    /// The raw value, if the option carried one.
    pub value: Option<&'a str>,

    /// Name of the section being expanded.
    pub section: &'a str,
}

impl Directive<'_> {
    /// Operation name in lowercase; empty for an all-whitespace key.
    pub fn operation(&self) -> String {
        self.tokens
            .first()
            .map(|token| token.to_ascii_lowercase())
            .unwrap_or_default()
    }

    /// Parameters following the operation token.
    pub fn params(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }
}

/// Behavior bound to one operation name.
///
/// A handler receives the directive for one option and emits zero or more
/// resolved options, which the expander splices into the output at the
/// option's position. Handlers may recursively expand other sections through
/// the scope; the scope's shared chain and cache keep cycle detection and
/// memoization intact across the whole recursive tree.
pub trait Handler: Send + Sync {
    fn handle(&self, directive: &Directive, scope: &mut Scope) -> Result<Vec<ResolvedOption>>;
}

/// Fallback for keys naming no operation: the raw pair passes through.
struct LiteralHandler;

impl Handler for LiteralHandler {
    fn handle(&self, directive: &Directive, _scope: &mut Scope) -> Result<Vec<ResolvedOption>> {
        Ok(vec![ResolvedOption {
            key: directive.raw_key.to_string(),
            value: directive.value.map(String::from),
        }])
    }
}

static LITERAL: Lazy<Arc<dyn Handler>> = Lazy::new(|| Arc::new(LiteralHandler));

/// Built-in `use` handler: folds the target section's full expansion in at
/// the directive's position.
struct UseHandler;

impl Handler for UseHandler {
    fn handle(&self, directive: &Directive, scope: &mut Scope) -> Result<Vec<ResolvedOption>> {
        let Some(target) = directive.params().first() else {
            return Err(Error::MissingUseTarget {
                section: directive.section.to_string(),
                key: directive.raw_key.to_string(),
            });
        };

        if directive.params().len() > 1 {
            tracing::warn!(
                section = directive.section,
                key = directive.raw_key,
                "ignoring extra parameters after `use` target"
            );
        }
        if directive.value.is_some() {
            tracing::warn!(
                section = directive.section,
                key = directive.raw_key,
                "ignoring value carried by `use` directive"
            );
        }

        scope.expand(target)
    }
}

/// Registry of operation handlers keyed by lowercased operation name.
#[derive(Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl HandlerRegistry {
    /// Create a registry with the built-in `use` handler registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(crate::USE_OPERATION, UseHandler);
        registry
    }

    /// Create a registry without any handlers registered.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind a handler to an operation name.
    ///
    /// Names match case-insensitively. Re-registering a name replaces the
    /// prior binding.
    pub fn register<H>(&mut self, operation: impl Into<String>, handler: H)
    where
        H: Handler + 'static,
    {
        self.handlers
            .insert(operation.into().to_ascii_lowercase(), Arc::new(handler));
    }

    /// Lookup the handler bound to an operation name.
    ///
    /// Never fails: unbound names resolve to the literal pass-through
    /// handler.
    pub fn lookup(&self, operation: &str) -> Arc<dyn Handler> {
        self.handlers
            .get(&operation.to_ascii_lowercase())
            .cloned()
            .unwrap_or_else(|| LITERAL.clone())
    }

    /// Resolve a tokenized key to its handler.
    ///
    /// An empty token sequence resolves to the literal handler.
    pub fn resolve(&self, tokens: &[String]) -> Arc<dyn Handler> {
        match tokens.first() {
            Some(operation) => self.lookup(operation),
            None => LITERAL.clone(),
        }
    }

    /// Returns `true` if a handler is bound to the operation name.
    pub fn contains(&self, operation: &str) -> bool {
        self.handlers.contains_key(&operation.to_ascii_lowercase())
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` when no operations are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
