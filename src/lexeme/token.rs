//! Positioned lexeme values
//!
//! A [`Lexeme`] is a classified symbol at a position in an expression. The
//! resolver raises the priority of operators nested inside brackets with
//! [`Lexeme::nest`] and compares lexemes with [`Lexeme::cmp_binding`].

use std::cmp::Ordering;

use serde::Serialize;

use super::LexemeType;

/// Classified symbol at a position in an expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lexeme {
    symbol: String,
    position: usize,
    #[serde(rename = "type")]
    kind: LexemeType,
    /// Priority from the library
    base_priority: Option<i32>,
    /// Priority after nesting adjustment
    priority: Option<i32>,
}

impl Lexeme {
    pub(crate) fn new(
        symbol: impl Into<String>,
        position: usize,
        kind: LexemeType,
        priority: Option<i32>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            position,
            kind,
            base_priority: priority,
            priority,
        }
    }

    /// Hole at `position`, e.g. a missing operand
    pub fn placeholder(position: usize) -> Self {
        Self::new("", position, LexemeType::Placeholder, None)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn kind(&self) -> LexemeType {
        self.kind
    }

    /// Priority as registered in the library
    pub fn base_priority(&self) -> Option<i32> {
        self.base_priority
    }

    /// Priority after nesting adjustment
    pub fn priority(&self) -> Option<i32> {
        self.priority
    }

    /// Move the lexeme to another position
    pub fn set_position(
        &mut self,
        position: usize,
    ) {
        self.position = position;
    }

    /// Adjust the priority for `level` enclosing bracket pairs
    ///
    /// The effective priority becomes `base + level * (max_priority + 1)`, so
    /// with base priorities in `0..=max_priority` any operator at a deeper
    /// level outranks every operator above it. Non-operators are unchanged.
    pub fn nest(
        &mut self,
        level: u32,
        max_priority: i32,
    ) {
        let Some(base) = self.base_priority else {
            return;
        };
        let step = i64::from(max_priority) + 1;
        let raised = i64::from(base) + i64::from(level) * step;
        self.priority = Some(raised.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32);
    }

    /// Binding order between two lexemes
    ///
    /// `Greater` means `self` binds first: higher priority wins, and on a tie
    /// the earlier position wins. Lexemes without priority bind last.
    pub fn cmp_binding(
        &self,
        other: &Lexeme,
    ) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.position.cmp(&self.position))
    }

    /// Whether `self` binds before `other`
    pub fn binds_tighter(
        &self,
        other: &Lexeme,
    ) -> bool {
        self.cmp_binding(other) == Ordering::Greater
    }
}
