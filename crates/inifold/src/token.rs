// Copyright (c) Contributors to the inifold project.
// SPDX-License-Identifier: Apache-2.0

//! Quote-aware tokenization of option keys.

use crate::{Error, Result};

#[cfg(test)]
#[path = "./token_test.rs"]
mod token_test;

/// Split a raw option key into whitespace-separated tokens.
///
/// Single or double quotes admit embedded whitespace within one token; the
/// quote characters themselves are stripped. A quote may open mid-token, so
/// `ab'c d'e` yields the single token `abc de`. An all-whitespace key yields
/// an empty token sequence, which is legal and resolves to the literal
/// handler downstream.
pub fn tokenize(raw_key: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in raw_key.chars() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => current.push(ch),
            None if ch == '\'' || ch == '"' => {
                quote = Some(ch);
                in_token = true;
            }
            None if ch.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(ch);
                in_token = true;
            }
        }
    }

    if let Some(open) = quote {
        return Err(Error::MalformedKey {
            key: raw_key.to_string(),
            reason: format!("unterminated {open} quote"),
        });
    }

    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}
