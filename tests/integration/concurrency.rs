//! Shared library under concurrent readers and writers

use std::sync::Arc;
use std::thread;

use lexlib::{LexemeLibrary, LexemeType, NO_TAGS};
use once_cell::sync::OnceCell;

static SHARED: OnceCell<LexemeLibrary> = OnceCell::new();

fn shared() -> &'static LexemeLibrary {
    SHARED.get_or_init(LexemeLibrary::with_builtins)
}

#[test]
fn test_setup_once_then_read_concurrently() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let lib = shared();
                for _ in 0..200 {
                    assert!(lib.is_toperator("+"));
                    assert_eq!(lib.apply_transform("×"), "*");
                    assert_eq!(lib.get_type("sin"), LexemeType::Function);
                }
                lib.max_priority()
            })
        })
        .collect();

    let maxima: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(maxima.iter().all(|m| *m == maxima[0]));
}

#[test]
fn test_late_registration_during_reads() {
    let lib = Arc::new(LexemeLibrary::new());
    lib.add_lexeme("+", LexemeType::Operation, 1, None, NO_TAGS)
        .unwrap();

    let writer = {
        let lib = Arc::clone(&lib);
        thread::spawn(move || {
            for i in 0..100 {
                let symbol = format!("op{}", i);
                lib.add_lexeme(&symbol, LexemeType::Operation, i, None, NO_TAGS)
                    .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let lib = Arc::clone(&lib);
            thread::spawn(move || {
                for _ in 0..100 {
                    let snapshot = lib.get_lexemes();
                    // Registration order is preserved, so a snapshot is always a prefix
                    assert_eq!(snapshot[0], "+");
                    for (i, symbol) in snapshot.iter().skip(1).enumerate() {
                        assert_eq!(*symbol, format!("op{}", i));
                    }
                    assert!(lib.max_priority() >= 1);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(lib.len(), 101);
    assert_eq!(lib.max_priority(), 99);
}
