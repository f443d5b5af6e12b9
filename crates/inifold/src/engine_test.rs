// Copyright (c) Contributors to the inifold project.
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::rstest;

use super::*;
use crate::Error;
use crate::document::ResolvedOption;
use crate::expand::Scope;
use crate::handler::Directive;

fn fixture_document() -> Document {
    crate::parse_str(
        r#"
[COMMON]
k1 : v1
k2 : v2

[DATA]
d1 : vd1
use COMMON
d2 : vd2
"#,
    )
    .expect("Should parse fixture")
}

struct CountingHandler {
    calls: Arc<AtomicUsize>,
    marker: &'static str,
}

impl Handler for CountingHandler {
    fn handle(&self, _directive: &Directive, _scope: &mut Scope) -> Result<Vec<ResolvedOption>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![ResolvedOption::new(self.marker, None)])
    }
}

#[rstest]
fn test_expand_section_end_to_end() {
    let engine = Engine::new(fixture_document());

    let resolved = engine.expand_section("DATA").expect("Should expand");
    let keys: Vec<&str> = resolved.iter().map(|option| option.key.as_str()).collect();
    assert_eq!(keys, vec!["d1", "k1", "k2", "d2"]);
}

#[rstest]
fn test_repeated_expansion_served_from_cache() {
    let mut document = Document::new();
    document
        .add_section("S")
        .expect("unique section names")
        .push("count marker", None);

    let calls = Arc::new(AtomicUsize::new(0));
    let mut engine = Engine::new(document);
    engine.register_handler(
        "count",
        CountingHandler {
            calls: calls.clone(),
            marker: "first",
        },
    );

    let first = engine.expand_section("S").expect("Should expand");
    let second = engine.expand_section("S").expect("Should expand");

    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_register_handler_invalidates_cached_results() {
    let mut document = Document::new();
    document
        .add_section("S")
        .expect("unique section names")
        .push("count marker", None);

    let first_calls = Arc::new(AtomicUsize::new(0));
    let mut engine = Engine::new(document);
    engine.register_handler(
        "count",
        CountingHandler {
            calls: first_calls.clone(),
            marker: "first",
        },
    );

    let before = engine.expand_section("S").expect("Should expand");
    assert_eq!(before[0].key, "first");

    // Rebinding the operation must discard the cached expansion.
    let second_calls = Arc::new(AtomicUsize::new(0));
    engine.register_handler(
        "count",
        CountingHandler {
            calls: second_calls.clone(),
            marker: "second",
        },
    );

    let after = engine.expand_section("S").expect("Should expand");
    assert_eq!(after[0].key, "second");
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_nested_sections_cached_across_calls() {
    let engine = Engine::new(fixture_document());

    // Expanding DATA completes COMMON along the way; the later direct
    // request must not re-walk it.
    engine.expand_section("DATA").expect("Should expand");
    let common = engine.expand_section("COMMON").expect("Should expand");

    let keys: Vec<&str> = common.iter().map(|option| option.key.as_str()).collect();
    assert_eq!(keys, vec!["k1", "k2"]);
}

#[rstest]
fn test_unknown_top_level_section_fails() {
    let engine = Engine::new(fixture_document());

    let result = engine.expand_section("ABSENT");
    assert!(matches!(result, Err(Error::UnknownSection { .. })));
}

#[rstest]
fn test_concurrent_expansion_of_shared_engine() {
    let engine = Engine::new(fixture_document());

    std::thread::scope(|threads| {
        let data = threads.spawn(|| engine.expand_section("DATA"));
        let common = threads.spawn(|| engine.expand_section("COMMON"));

        assert!(data.join().expect("thread completes").is_ok());
        assert!(common.join().expect("thread completes").is_ok());
    });
}

#[rstest]
fn test_document_accessor_lists_sections() {
    let engine = Engine::new(fixture_document());

    let names: Vec<&str> = engine.document().section_names().collect();
    assert_eq!(names, vec!["COMMON", "DATA"]);
}
