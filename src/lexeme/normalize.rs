//! Library-wide fallback normalization
//!
//! Applied to symbols that have no transform rule of their own. Every
//! normalizer must be idempotent: normalizing a normalized symbol is a no-op.

use std::fmt::Debug;

use crate::util::config::NormalizeConfig;

/// Fallback normalization hook
pub trait Normalize: Debug + Send + Sync {
    /// Normalize a symbol that carries no specific transform rule
    fn normalize(
        &self,
        symbol: &str,
    ) -> String;
}

/// Whitespace and case normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    /// Strip leading and trailing whitespace
    pub trim: bool,
    /// Replace inner whitespace runs by one space
    pub collapse_whitespace: bool,
    /// Lowercase the whole symbol
    pub lowercase: bool,
}

impl Normalizer {
    /// Normalizer that returns its input unchanged
    pub const IDENTITY: Normalizer = Normalizer {
        trim: false,
        collapse_whitespace: false,
        lowercase: false,
    };

    /// Build a normalizer from the `[normalize]` config section
    pub fn from_config(config: &NormalizeConfig) -> Self {
        Self {
            trim: config.trim,
            collapse_whitespace: config.collapse_whitespace,
            lowercase: config.lowercase,
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::from_config(&NormalizeConfig::default())
    }
}

impl Normalize for Normalizer {
    fn normalize(
        &self,
        symbol: &str,
    ) -> String {
        let mut out = if self.trim {
            symbol.trim().to_string()
        } else {
            symbol.to_string()
        };

        if self.collapse_whitespace {
            let mut collapsed = String::with_capacity(out.len());
            let mut in_space = false;
            for ch in out.chars() {
                if ch.is_whitespace() {
                    if !in_space {
                        collapsed.push(' ');
                    }
                    in_space = true;
                } else {
                    collapsed.push(ch);
                    in_space = false;
                }
            }
            out = collapsed;
        }

        if self.lowercase {
            out = out.to_lowercase();
        }

        out
    }
}
