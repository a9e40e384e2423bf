//! End-to-end scenarios through the public API

use lexlib::{LexemeLibrary, LexemeRecord, LexemeType, NO_TAGS, PRIORITY_FLOOR};

/// Minimal scanner loop: canonicalize each candidate, then classify it
fn scan(
    lib: &LexemeLibrary,
    candidates: &[&str],
) -> Vec<(String, LexemeType)> {
    candidates
        .iter()
        .map(|c| {
            let canonical = lib.canonicalize(c);
            let kind = lib.get_type(&canonical);
            (canonical, kind)
        })
        .collect()
}

#[test]
fn test_scanner_flow_over_builtins() {
    let lib = LexemeLibrary::with_builtins();
    let tokens = scan(&lib, &["y", "=", "sqrt", "(", "x", " × ", "x", ")"]);
    let kinds: Vec<_> = tokens.iter().map(|(_, k)| *k).collect();
    assert_eq!(
        kinds,
        vec![
            LexemeType::Unknown,
            LexemeType::Operation,
            LexemeType::Function,
            LexemeType::BracketOpen,
            LexemeType::Unknown,
            LexemeType::Operation,
            LexemeType::Unknown,
            LexemeType::BracketClose,
        ]
    );
    assert_eq!(tokens[5].0, "*");
}

#[test]
fn test_resolver_picks_tightest_operator() {
    let lib = LexemeLibrary::with_builtins();
    // a + b * c
    let ops = [lib.lexeme("+", 1), lib.lexeme("*", 3)];
    let first = ops
        .iter()
        .max_by(|a, b| a.cmp_binding(b))
        .unwrap();
    assert_eq!(first.symbol(), "*");

    // (a + b) * c: "+" sits one bracket level deep
    let mut plus = lib.lexeme("+", 2);
    plus.nest(1, lib.max_priority());
    let star = lib.lexeme("*", 5);
    assert!(plus.binds_tighter(&star));
}

#[test]
fn test_plus_times_alias_precedence() {
    let lib = LexemeLibrary::new();
    lib.add_lexeme("+", LexemeType::Operation, 1, None, NO_TAGS)
        .unwrap();
    lib.add_lexeme("*", LexemeType::Operation, 2, None, NO_TAGS)
        .unwrap();
    lib.add_lexeme("×", LexemeType::Operation, 2, Some("*"), NO_TAGS)
        .unwrap();
    assert_eq!(lib.max_priority(), 2);
    assert_eq!(lib.apply_transform("×"), "*");
    assert_eq!(lib.get_priority("×"), Some(2));
    assert_eq!(lib.get_type("÷"), LexemeType::Unknown);
}

#[test]
fn test_independent_instances() {
    let a = LexemeLibrary::new();
    let b = LexemeLibrary::new();
    a.register(LexemeRecord::new("x", LexemeType::Variable))
        .unwrap();
    assert!(a.is_supported("x"));
    assert!(!b.is_supported("x"));
    assert_eq!(b.max_priority(), PRIORITY_FLOOR);
}

#[test]
fn test_records_serialize() {
    let lib = LexemeLibrary::new();
    lib.register(
        LexemeRecord::new("≥", LexemeType::Operation)
            .with_priority(4)
            .with_transform(">="),
    )
    .unwrap();
    let json = serde_json::to_value(lib.records()).unwrap();
    assert_eq!(json[0]["type"], "operation");
    assert_eq!(json[0]["priority"], 4);
    assert_eq!(json[0]["transform"], ">=");
}
