//! Lexeme library
//!
//! Maps exact symbol strings to [`LexemeRecord`]s. Lookups never fail: an
//! unregistered symbol is `unknown`, has no priority and passes through
//! transforms unchanged.
//!
//! # Concurrency
//!
//! The table sits behind a `parking_lot::RwLock`, so every method takes
//! `&self`. Readers run concurrently; `add_lexeme` and `remove_lexeme` take
//! the write lock for the whole update, and snapshots are copied out under
//! the read lock.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use super::builtins;
use super::normalize::{Normalize, Normalizer};
use super::token::Lexeme;
use super::{LexemeError, LexemeRecord, LexemeType, PRIORITY_FLOOR};
use crate::util::config::LibraryConfig;

/// Registry state guarded by the library lock
#[derive(Debug, Default)]
struct Registry {
    /// Records in registration order (symbol -> record)
    entries: IndexMap<String, LexemeRecord>,
    /// Multiset of operation priorities (priority -> count)
    priorities: BTreeMap<i32, usize>,
}

impl Registry {
    fn insert(
        &mut self,
        record: LexemeRecord,
    ) -> Option<LexemeRecord> {
        if let Some(priority) = record.effective_priority() {
            *self.priorities.entry(priority).or_insert(0) += 1;
        }
        // IndexMap keeps the original slot on overwrite
        let previous = self.entries.insert(record.symbol.clone(), record);
        if let Some(old) = &previous {
            self.forget_priority(old);
        }
        previous
    }

    fn remove(
        &mut self,
        symbol: &str,
    ) -> Option<LexemeRecord> {
        let removed = self.entries.shift_remove(symbol)?;
        self.forget_priority(&removed);
        Some(removed)
    }

    fn forget_priority(
        &mut self,
        record: &LexemeRecord,
    ) {
        let Some(priority) = record.effective_priority() else {
            return;
        };
        if let Some(count) = self.priorities.get_mut(&priority) {
            *count -= 1;
            if *count == 0 {
                self.priorities.remove(&priority);
            }
        }
    }

    fn max_priority(&self) -> i32 {
        self.priorities
            .keys()
            .next_back()
            .copied()
            .unwrap_or(PRIORITY_FLOOR)
    }

    /// Follow transform rules from `symbol` to the first symbol without one
    fn resolve(
        &self,
        symbol: &str,
    ) -> Option<String> {
        let mut current = self.entries.get(symbol)?.transform.as_deref()?;
        // Cycles are rejected at registration; the bound only guards the walk
        for _ in 0..self.entries.len() {
            match self
                .entries
                .get(current)
                .and_then(|r| r.transform.as_deref())
            {
                Some(next) => current = next,
                None => break,
            }
        }
        Some(current.to_string())
    }

    /// Reject a rule `symbol -> target` whose chain leads back to `symbol`
    fn check_cycle(
        &self,
        symbol: &str,
        target: &str,
    ) -> Result<(), LexemeError> {
        let mut chain = vec![symbol.to_string(), target.to_string()];
        let mut current = target;
        for _ in 0..=self.entries.len() {
            if current == symbol {
                return Err(LexemeError::TransformCycle {
                    symbol: symbol.to_string(),
                    chain,
                });
            }
            match self
                .entries
                .get(current)
                .and_then(|r| r.transform.as_deref())
            {
                Some(next) => {
                    chain.push(next.to_string());
                    current = next;
                }
                None => return Ok(()),
            }
        }
        Ok(())
    }
}

/// Lexeme library
///
/// Single source of truth for symbol classification, precedence and
/// canonical forms. Construct one per process or parsing session and pass
/// it by reference to the scanner and resolver.
#[derive(Debug)]
pub struct LexemeLibrary {
    registry: RwLock<Registry>,
    normalizer: Box<dyn Normalize>,
}

impl LexemeLibrary {
    /// Create an empty library with the default normalizer
    pub fn new() -> Self {
        Self::with_normalizer(Normalizer::default())
    }

    /// Create an empty library with a custom fallback normalization
    pub fn with_normalizer(normalizer: impl Normalize + 'static) -> Self {
        Self {
            registry: RwLock::new(Registry::default()),
            normalizer: Box::new(normalizer),
        }
    }

    /// Create a library seeded with the built-in table
    pub fn with_builtins() -> Self {
        let library = Self::new();
        library.extend_builtins();
        library
    }

    /// Create a library as described by `config`
    pub fn from_config(config: &LibraryConfig) -> Self {
        let library = Self::with_normalizer(Normalizer::from_config(&config.normalize));
        if config.library.builtins {
            library.extend_builtins();
        }
        library
    }

    /// Register every built-in lexeme
    ///
    /// Existing entries with the same symbols are overwritten. Operators are
    /// inserted before the aliases pointing at them, so no alias can close a
    /// cycle with an earlier user rule.
    pub fn extend_builtins(&self) {
        let mut registry = self.registry.write();
        for record in builtins::records() {
            registry.insert(record);
        }
        debug!(
            "Registered built-in lexemes, {} entries",
            registry.entries.len()
        );
    }

    /// Register or replace the record for `symbol`
    ///
    /// `priority` is only kept for [`LexemeType::Operation`]. Overwrites are
    /// silent so callers can override built-in lexemes.
    pub fn add_lexeme<I, S>(
        &self,
        symbol: &str,
        kind: LexemeType,
        priority: i32,
        transform: Option<&str>,
        tags: I,
    ) -> Result<(), LexemeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut record = LexemeRecord::new(symbol, kind)
            .with_priority(priority)
            .with_tags(tags);
        record.transform = transform.map(str::to_string);
        self.register(record)
    }

    /// Register a pre-built record
    ///
    /// The record is validated first; on error the library is left untouched.
    /// A transform target must already be in normalized form, so every rule
    /// chain ends on a symbol the fallback normalization leaves alone.
    pub fn register(
        &self,
        record: LexemeRecord,
    ) -> Result<(), LexemeError> {
        let record = record.validated().map_err(|e| {
            warn!("Rejected lexeme registration: {}", e);
            e
        })?;

        if let Some(target) = &record.transform {
            let normalized = self.normalizer.normalize(target);
            if normalized != *target {
                let e = LexemeError::UnnormalizedTransform {
                    symbol: record.symbol.clone(),
                    target: target.clone(),
                    normalized,
                };
                warn!("Rejected lexeme registration: {}", e);
                return Err(e);
            }
        }

        let mut registry = self.registry.write();
        if let Some(target) = &record.transform {
            if let Err(e) = registry.check_cycle(&record.symbol, target) {
                warn!("Rejected lexeme registration: {}", e);
                return Err(e);
            }
        }

        let symbol = record.symbol.clone();
        let kind = record.kind;
        match registry.insert(record) {
            Some(old) => debug!(
                "Overwrote lexeme '{}' ({} -> {}), max priority {}",
                symbol,
                old.kind,
                kind,
                registry.max_priority()
            ),
            None => debug!(
                "Registered lexeme '{}' as {}, max priority {}",
                symbol,
                kind,
                registry.max_priority()
            ),
        }
        Ok(())
    }

    /// Unregister `symbol`, returning its record
    pub fn remove_lexeme(
        &self,
        symbol: &str,
    ) -> Option<LexemeRecord> {
        let mut registry = self.registry.write();
        let removed = registry.remove(symbol);
        if removed.is_some() {
            debug!(
                "Removed lexeme '{}', max priority {}",
                symbol,
                registry.max_priority()
            );
        }
        removed
    }

    /// Snapshot of the record for `symbol`
    pub fn get(
        &self,
        symbol: &str,
    ) -> Option<LexemeRecord> {
        self.registry.read().entries.get(symbol).cloned()
    }

    /// Type of `symbol`, `Unknown` if not registered
    pub fn get_type(
        &self,
        symbol: &str,
    ) -> LexemeType {
        match self.registry.read().entries.get(symbol) {
            Some(record) => record.kind,
            None => {
                trace!("Lexeme '{}' not registered", symbol);
                LexemeType::Unknown
            }
        }
    }

    /// Priority of an operation, `None` for anything else
    pub fn get_priority(
        &self,
        symbol: &str,
    ) -> Option<i32> {
        self.registry
            .read()
            .entries
            .get(symbol)
            .and_then(LexemeRecord::effective_priority)
    }

    /// Whether `symbol` is registered with a type other than `Unknown`
    pub fn is_supported(
        &self,
        symbol: &str,
    ) -> bool {
        self.get_type(symbol) != LexemeType::Unknown
    }

    /// Whether `symbol` is registered as an operation
    pub fn is_toperator(
        &self,
        symbol: &str,
    ) -> bool {
        self.get_type(symbol) == LexemeType::Operation
    }

    /// Rewrite `symbol` by its transform rule
    ///
    /// Symbols without a rule, registered or not, come back unchanged.
    pub fn apply_transform(
        &self,
        symbol: &str,
    ) -> String {
        self.registry
            .read()
            .resolve(symbol)
            .unwrap_or_else(|| symbol.to_string())
    }

    /// Apply the library-wide normalization
    ///
    /// A specific transform rule for `symbol` takes precedence over the
    /// fallback normalization. A normalized symbol that has a rule of its own
    /// is rewritten by it, so the result is always canonical.
    pub fn apply_default_transform(
        &self,
        symbol: &str,
    ) -> String {
        self.canonicalize(symbol)
    }

    /// Canonical form of `symbol`
    ///
    /// Checked in order: the symbol's own rule, then the fallback
    /// normalization followed by the rule of the normalized symbol, then
    /// identity.
    pub fn canonicalize(
        &self,
        symbol: &str,
    ) -> String {
        let registry = self.registry.read();
        if let Some(canonical) = registry.resolve(symbol) {
            return canonical;
        }
        let normalized = self.normalizer.normalize(symbol);
        registry.resolve(&normalized).unwrap_or(normalized)
    }

    /// Snapshot of all registered symbols, in registration order
    pub fn get_lexemes(&self) -> Vec<String> {
        self.registry.read().entries.keys().cloned().collect()
    }

    /// Snapshot of the symbols registered with type `kind`
    pub fn get_lexemes_of(
        &self,
        kind: LexemeType,
    ) -> Vec<String> {
        self.registry
            .read()
            .entries
            .values()
            .filter(|r| r.kind == kind)
            .map(|r| r.symbol.clone())
            .collect()
    }

    /// Snapshot of all records, in registration order
    pub fn records(&self) -> Vec<LexemeRecord> {
        self.registry.read().entries.values().cloned().collect()
    }

    /// Highest operation priority, [`PRIORITY_FLOOR`] if there is none
    pub fn max_priority(&self) -> i32 {
        self.registry.read().max_priority()
    }

    /// Tags of `symbol`, empty if none or not registered
    pub fn tags(
        &self,
        symbol: &str,
    ) -> BTreeSet<String> {
        self.registry
            .read()
            .entries
            .get(symbol)
            .map(|r| r.tags.clone())
            .unwrap_or_default()
    }

    /// Whether `symbol` carries `tag`
    pub fn has_tag(
        &self,
        symbol: &str,
        tag: &str,
    ) -> bool {
        self.registry
            .read()
            .entries
            .get(symbol)
            .is_some_and(|r| r.tags.contains(tag))
    }

    /// Classify `symbol` at `position` into a token value
    pub fn lexeme(
        &self,
        symbol: &str,
        position: usize,
    ) -> Lexeme {
        let registry = self.registry.read();
        match registry.entries.get(symbol) {
            Some(record) => Lexeme::new(
                symbol,
                position,
                record.kind,
                record.effective_priority(),
            ),
            None => Lexeme::new(symbol, position, LexemeType::Unknown, None),
        }
    }

    /// Number of registered symbols
    pub fn len(&self) -> usize {
        self.registry.read().entries.len()
    }

    /// Whether no symbol is registered
    pub fn is_empty(&self) -> bool {
        self.registry.read().entries.is_empty()
    }
}

impl Default for LexemeLibrary {
    fn default() -> Self {
        Self::new()
    }
}
