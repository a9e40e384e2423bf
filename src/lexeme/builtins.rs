//! Built-in lexeme table
//!
//! Brackets, the C `<math.h>` function family, the C arithmetic, comparison,
//! equality, assignment and comma operators, and Unicode spellings of those
//! operators that rewrite to the ASCII glyph.
//!
//! Priorities: higher binds tighter.

use super::{LexemeRecord, LexemeType};

/// Multiplicative operators (`* / %`)
pub const PRIORITY_FACTOR: i32 = 6;
/// Additive operators (`+ -`)
pub const PRIORITY_TERM: i32 = 5;
/// Relational operators (`< <= > >=`)
pub const PRIORITY_COMPARISON: i32 = 4;
/// Equality operators (`== !=`)
pub const PRIORITY_EQUALITY: i32 = 3;
/// Assignment (`=`)
pub const PRIORITY_ASSIGN: i32 = 2;
/// Argument separator (`,`)
pub const PRIORITY_COMMA: i32 = 1;

/// Operand order does not matter
pub const TAG_COMMUTATIVE: &str = "commutative";
/// May appear in prefix position with a single operand
pub const TAG_UNARY: &str = "unary-capable";
/// Groups right to left
pub const TAG_RIGHT_ASSOC: &str = "right-associative";

/// Bracket lexemes
const BRACKETS: &[(&str, LexemeType)] = &[
    ("(", LexemeType::BracketOpen),
    (")", LexemeType::BracketClose),
    ("[", LexemeType::Index),
    ("]", LexemeType::Index),
];

/// Operators: symbol, priority, tags
const OPERATORS: &[(&str, i32, &[&str])] = &[
    ("*", PRIORITY_FACTOR, &[TAG_COMMUTATIVE]),
    ("/", PRIORITY_FACTOR, &[]),
    ("%", PRIORITY_FACTOR, &[]),
    ("+", PRIORITY_TERM, &[TAG_COMMUTATIVE, TAG_UNARY]),
    ("-", PRIORITY_TERM, &[TAG_UNARY]),
    ("<", PRIORITY_COMPARISON, &[]),
    ("<=", PRIORITY_COMPARISON, &[]),
    (">", PRIORITY_COMPARISON, &[]),
    (">=", PRIORITY_COMPARISON, &[]),
    ("==", PRIORITY_EQUALITY, &[TAG_COMMUTATIVE]),
    ("!=", PRIORITY_EQUALITY, &[TAG_COMMUTATIVE]),
    ("=", PRIORITY_ASSIGN, &[TAG_RIGHT_ASSOC]),
    (",", PRIORITY_COMMA, &[]),
];

/// Alternate operator spellings: alias, canonical symbol
const OPERATOR_ALIASES: &[(&str, &str)] = &[
    ("×", "*"),
    ("·", "*"),
    ("∙", "*"),
    ("÷", "/"),
    ("∕", "/"),
    ("−", "-"),
    ("≤", "<="),
    ("≥", ">="),
    ("≠", "!="),
];

/// Base names of the C math functions
///
/// Names in [`SUFFIXED_FUNCTIONS`] also exist with `f` and `l` suffixes.
const FUNCTIONS: &[&str] = &[
    "abs",
    "labs",
    "llabs",
    "div",
    "ldiv",
    "lldiv",
    "imaxabs",
    "imaxdiv",
    "round",
    "lround",
    "llround",
    "fpclassify",
    "isfinite",
    "isinf",
    "isnan",
    "isnormal",
    "signbit",
    "isgreater",
    "isgreaterequal",
    "isless",
    "islessequal",
    "islessgreater",
    "isunordered",
];

/// C math functions that come in `float` (`f`) and `long double` (`l`) forms
const SUFFIXED_FUNCTIONS: &[&str] = &[
    // basic operations
    "fabs",
    "fmod",
    "remainder",
    "remquo",
    "fma",
    "fmax",
    "fmin",
    "fdim",
    "nan",
    // exponential
    "exp",
    "exp2",
    "expm1",
    "log",
    "log10",
    "log2",
    "log1p",
    // power
    "pow",
    "sqrt",
    "cbrt",
    "hypot",
    // trigonometric
    "sin",
    "cos",
    "tan",
    "asin",
    "acos",
    "atan",
    "atan2",
    // hyperbolic
    "sinh",
    "cosh",
    "tanh",
    "asinh",
    "acosh",
    "atanh",
    // error and gamma
    "erf",
    "erfc",
    "tgamma",
    "lgamma",
    // nearest integer
    "ceil",
    "floor",
    "trunc",
    "nearbyint",
    "rint",
    "lrint",
    "llrint",
    // floating-point manipulation
    "frexp",
    "ldexp",
    "modf",
    "scalbn",
    "scalbln",
    "ilogb",
    "logb",
    "nextafter",
    "nexttoward",
    "copysign",
];

/// All built-in records, in registration order
///
/// Aliases come after the operators they rewrite to.
pub fn records() -> Vec<LexemeRecord> {
    let mut out = Vec::with_capacity(
        BRACKETS.len()
            + FUNCTIONS.len()
            + SUFFIXED_FUNCTIONS.len() * 3
            + OPERATORS.len()
            + OPERATOR_ALIASES.len(),
    );

    out.extend(
        BRACKETS
            .iter()
            .map(|&(symbol, kind)| LexemeRecord::new(symbol, kind)),
    );

    out.extend(
        FUNCTIONS
            .iter()
            .map(|&name| LexemeRecord::new(name, LexemeType::Function)),
    );
    for &name in SUFFIXED_FUNCTIONS {
        out.push(LexemeRecord::new(name, LexemeType::Function));
        for suffix in ["f", "l"] {
            out.push(LexemeRecord::new(
                format!("{}{}", name, suffix),
                LexemeType::Function,
            ));
        }
    }

    out.extend(OPERATORS.iter().map(|&(symbol, priority, tags)| {
        LexemeRecord::new(symbol, LexemeType::Operation)
            .with_priority(priority)
            .with_tags(tags.iter().copied())
    }));

    for &(alias, canonical) in OPERATOR_ALIASES {
        if let Some(&(_, priority, tags)) = OPERATORS.iter().find(|(s, _, _)| *s == canonical) {
            out.push(
                LexemeRecord::new(alias, LexemeType::Operation)
                    .with_priority(priority)
                    .with_tags(tags.iter().copied())
                    .with_transform(canonical),
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbols_are_unique() {
        let records = records();
        let unique: HashSet<_> = records.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(unique.len(), records.len());
    }

    #[test]
    fn test_every_alias_resolves() {
        let records = records();
        let aliases: Vec<_> = records.iter().filter(|r| r.transform.is_some()).collect();
        assert_eq!(aliases.len(), OPERATOR_ALIASES.len());
        for alias in aliases {
            let target = alias.transform.as_deref().unwrap();
            let canonical = records.iter().find(|r| r.symbol == target).unwrap();
            assert!(canonical.transform.is_none());
            assert_eq!(canonical.priority, alias.priority);
        }
    }

    #[test]
    fn test_suffixed_variants() {
        let records = records();
        for name in ["sinf", "sinl", "sqrtf", "sqrtl", "atan2l"] {
            assert!(
                records
                    .iter()
                    .any(|r| r.symbol == name && r.kind == LexemeType::Function),
                "missing {}",
                name
            );
        }
    }
}
