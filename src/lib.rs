//! lexlib - lexeme classification and transformation registry
//!
//! Given a symbol cut out of an expression by a scanner, the library tells
//! what kind of token it is, which operator priority it carries and which
//! canonical form it rewrites to. Scanners and operator-precedence resolvers
//! share one [`LexemeLibrary`] by reference.
//!
//! # Example
//!
//! ```rust
//! use lexlib::{LexemeLibrary, LexemeType, NO_TAGS};
//!
//! let lib = LexemeLibrary::new();
//! lib.add_lexeme("+", LexemeType::Operation, 1, None, ["commutative"]).unwrap();
//! lib.add_lexeme("*", LexemeType::Operation, 2, None, ["commutative"]).unwrap();
//! lib.add_lexeme("×", LexemeType::Operation, 2, Some("*"), NO_TAGS).unwrap();
//!
//! assert_eq!(lib.max_priority(), 2);
//! assert_eq!(lib.apply_transform("×"), "*");
//! assert_eq!(lib.get_type("÷"), LexemeType::Unknown);
//! ```

#![doc(html_root_url = "https://docs.rs/lexlib")]
#![warn(rust_2018_idioms)]

pub mod lexeme;

// Utility modules
pub mod util;

// Re-exports
pub use lexeme::{
    Lexeme, LexemeError, LexemeLibrary, LexemeRecord, LexemeType, Normalize, Normalizer,
    NO_TAGS, PRIORITY_FLOOR,
};
pub use util::config::LibraryConfig;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "lexlib";
