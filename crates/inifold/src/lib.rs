// Copyright (c) Contributors to the inifold project.
// SPDX-License-Identifier: Apache-2.0

//! inifold - Directive-Aware INI Section Expansion
//!
//! This crate provides the core library for expanding INI-style documents in
//! which option keys may carry an operation directive.
//!
//! # Overview
//!
//! An option key such as `use COMMON` names an operation (`use`) followed by
//! its parameters. Operations dispatch to handlers registered by name; keys
//! naming no known operation pass through unchanged as literal key/value
//! pairs. The built-in `use` handler folds another section's fully expanded
//! options into the current section at the directive's position, depth-first,
//! so a flat key/value format gains macro-like composition.
//!
//! # Example
//!
//! ```ini
//! [COMMON]
//! opt-1 : value-1
//! opt-2 : value-2
//!
//! [DATA]
//! data-opt : before
//! use COMMON
//! data-opt-2 : after
//! ```
//!
//! Expanding `DATA` yields `data-opt`, `opt-1`, `opt-2`, `data-opt-2`, in
//! that order. Repeated keys are preserved as-is; folding them into a
//! last-write-wins mapping is left to the consumer of the resolved list.

pub mod document;
pub mod engine;
pub mod error;
pub mod expand;
pub mod handler;
pub mod parse;
pub mod token;

pub use document::{Document, RawOption, ResolvedOption, Section};
pub use engine::Engine;
pub use error::{Error, Result};
pub use expand::Scope;
pub use handler::{Directive, Handler, HandlerRegistry};
pub use parse::{load, parse_str};
pub use token::tokenize;

/// Name of the built-in section-inclusion operation.
pub const USE_OPERATION: &str = "use";
