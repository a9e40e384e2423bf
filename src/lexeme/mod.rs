//! Lexeme registry
//!
//! Classifies single symbols handed over by a scanner and reports the
//! precedence metadata an operator-precedence resolver needs.
//!
//! # Modules
//!
//! - [`library`] - the symbol -> record registry
//! - [`normalize`] - library-wide fallback normalization
//! - [`builtins`] - built-in C math table
//! - [`token`] - positioned lexeme values handed to a resolver

pub mod builtins;
pub mod library;
pub mod normalize;
pub mod token;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use library::LexemeLibrary;
pub use normalize::{Normalize, Normalizer};
pub use token::Lexeme;

/// Value reported by `max_priority` when no operation is registered
pub const PRIORITY_FLOOR: i32 = 0;

/// Empty tag list for `add_lexeme`
pub const NO_TAGS: [&str; 0] = [];

/// Lexeme type
///
/// Closed set: every registered symbol carries exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LexemeType {
    /// `(`
    BracketOpen,
    /// `)`
    BracketClose,
    /// `[` / `]`, numeric or positional access
    Index,
    /// Named callable
    Function,
    /// Operator symbol, the only type carrying a priority
    Operation,
    /// Named reference
    Variable,
    /// Hole to be filled, e.g. an implicit argument
    Placeholder,
    /// Unclassified or unsupported
    Unknown,
}

impl LexemeType {
    /// All variants, in declaration order
    pub const ALL: [LexemeType; 8] = [
        LexemeType::BracketOpen,
        LexemeType::BracketClose,
        LexemeType::Index,
        LexemeType::Function,
        LexemeType::Operation,
        LexemeType::Variable,
        LexemeType::Placeholder,
        LexemeType::Unknown,
    ];

    /// Kebab-case name, as used in config and CLI output
    pub fn as_str(&self) -> &'static str {
        match self {
            LexemeType::BracketOpen => "bracket-open",
            LexemeType::BracketClose => "bracket-close",
            LexemeType::Index => "index",
            LexemeType::Function => "function",
            LexemeType::Operation => "operation",
            LexemeType::Variable => "variable",
            LexemeType::Placeholder => "placeholder",
            LexemeType::Unknown => "unknown",
        }
    }

    /// Whether entries of this type carry a priority
    pub fn has_priority(&self) -> bool {
        matches!(self, LexemeType::Operation)
    }

    /// Whether the type is a bracket of either direction
    pub fn is_bracket(&self) -> bool {
        matches!(self, LexemeType::BracketOpen | LexemeType::BracketClose)
    }
}

impl std::fmt::Display for LexemeType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LexemeType {
    type Err = LexemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LexemeType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| LexemeError::UnknownType {
                name: s.to_string(),
            })
    }
}

/// Registration error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexemeError {
    #[error("Lexeme symbol must not be empty")]
    EmptySymbol,
    #[error("Transform rule for '{symbol}' targets an empty symbol")]
    EmptyTransform { symbol: String },
    #[error("Transform rule for '{symbol}' forms a cycle: {}", .chain.join(" -> "))]
    TransformCycle { symbol: String, chain: Vec<String> },
    #[error("Transform rule for '{symbol}' targets '{target}', which normalizes to '{normalized}'")]
    UnnormalizedTransform {
        symbol: String,
        target: String,
        normalized: String,
    },
    #[error("Empty tag on lexeme '{symbol}'")]
    EmptyTag { symbol: String },
    #[error("Unknown lexeme type: {name}")]
    UnknownType { name: String },
}

/// Lexeme record
///
/// Owned by the library and keyed by `symbol`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexemeRecord {
    /// Surface form, the registry key
    pub symbol: String,
    /// Lexeme type
    #[serde(rename = "type")]
    pub kind: LexemeType,
    /// Binding strength, `None` unless `kind` is `Operation`
    pub priority: Option<i32>,
    /// Canonical form this symbol is rewritten to
    pub transform: Option<String>,
    /// Resolver-interpreted labels
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl LexemeRecord {
    /// Create a record without priority, transform or tags
    pub fn new(
        symbol: impl Into<String>,
        kind: LexemeType,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            kind,
            priority: None,
            transform: None,
            tags: BTreeSet::new(),
        }
    }

    /// Set the priority; dropped at registration unless the record is an operation
    pub fn with_priority(
        mut self,
        priority: i32,
    ) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the canonical form
    pub fn with_transform(
        mut self,
        target: impl Into<String>,
    ) -> Self {
        self.transform = Some(target.into());
        self
    }

    /// Add a tag
    pub fn with_tag(
        mut self,
        tag: impl Into<String>,
    ) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Add several tags
    pub fn with_tags<I, S>(
        mut self,
        tags: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Priority if this record is an operation
    pub fn effective_priority(&self) -> Option<i32> {
        if self.kind.has_priority() {
            self.priority
        } else {
            None
        }
    }

    /// Check the record and bring it to its stored shape
    ///
    /// Non-operations lose their priority; a transform pointing at the
    /// symbol itself is dropped since the symbol is already canonical.
    pub(crate) fn validated(mut self) -> Result<Self, LexemeError> {
        if self.symbol.is_empty() {
            return Err(LexemeError::EmptySymbol);
        }
        if let Some(target) = &self.transform {
            if target.is_empty() {
                return Err(LexemeError::EmptyTransform {
                    symbol: self.symbol,
                });
            }
            if *target == self.symbol {
                self.transform = None;
            }
        }
        if self.tags.iter().any(|tag| tag.is_empty()) {
            return Err(LexemeError::EmptyTag {
                symbol: self.symbol,
            });
        }
        self.priority = self.effective_priority();
        Ok(self)
    }
}
