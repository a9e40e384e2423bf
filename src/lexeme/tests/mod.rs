//! Lexeme library tests
//!
//! - registry: registration, overwrite, removal, snapshots
//! - priority: max priority tracking and precedence queries
//! - transform: transform rules, default normalization, canonicalize
//! - builtins: the seeded C math table
//! - properties: proptest / quickcheck properties
