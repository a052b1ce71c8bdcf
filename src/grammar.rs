//! Deterministic, context-free string rewriting.

use crate::error::{LSystemError, Result};
use std::collections::HashMap;
use tracing::debug;

/// A single grammar symbol.
pub type Symbol = char;

/// Production rules plus the axiom they rewrite.
///
/// Symbols without a rule are terminal and pass through every generation unchanged.
/// A `Grammar` is never mutated after construction, so it can be shared freely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grammar {
    rules: HashMap<Symbol, Vec<Symbol>>,
    axiom: Vec<Symbol>,
}

impl Grammar {
    pub fn new(axiom: &str) -> Self {
        Self {
            rules: HashMap::new(),
            axiom: axiom.chars().collect(),
        }
    }

    /// Adds (or replaces) the production for `symbol` (builder pattern).
    pub fn with_rule(mut self, symbol: Symbol, replacement: &str) -> Self {
        self.rules.insert(symbol, replacement.chars().collect());
        self
    }

    /// Builds a grammar from string-keyed rules, as they arrive from a definition file.
    ///
    /// Every key must be exactly one character.
    pub fn from_string_rules<K, V>(
        axiom: &str,
        rules: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut grammar = Self::new(axiom);
        for (key, replacement) in rules {
            let symbol = single_char(key.as_ref())?;
            grammar = grammar.with_rule(symbol, replacement.as_ref());
        }
        Ok(grammar)
    }

    pub fn axiom(&self) -> &[Symbol] {
        &self.axiom
    }

    pub fn rule(&self, symbol: Symbol) -> Option<&[Symbol]> {
        self.rules.get(&symbol).map(Vec::as_slice)
    }

    pub fn rules(&self) -> impl Iterator<Item = (Symbol, &[Symbol])> {
        self.rules.iter().map(|(s, r)| (*s, r.as_slice()))
    }

    /// Rewrites `input` exactly `times` rounds.
    ///
    /// Each round replaces every symbol by its production (or itself) in left-to-right
    /// order. The number of rounds is fixed, so self-referential rules such as `A -> A`
    /// simply reach a fixed point.
    pub fn expand(&self, input: &[Symbol], times: usize) -> Vec<Symbol> {
        let mut current = input.to_vec();
        for generation in 0..times {
            let mut next = Vec::with_capacity(current.len());
            for &sym in &current {
                match self.rules.get(&sym) {
                    Some(replacement) => next.extend_from_slice(replacement),
                    None => next.push(sym),
                }
            }
            debug!(generation = generation + 1, len = next.len(), "expanded generation");
            current = next;
        }
        current
    }

    /// Expands the axiom `order` times.
    pub fn expand_axiom(&self, order: usize) -> Vec<Symbol> {
        self.expand(&self.axiom, order)
    }

    /// Lazily walks the `order`-th generation of `input` depth-first.
    ///
    /// Yields the same symbols, in the same order, as [`expand`](Self::expand), but only
    /// keeps one production cursor per level in memory.
    pub fn derive<'a>(&'a self, input: &'a [Symbol], order: usize) -> Derivation<'a> {
        Derivation {
            grammar: self,
            stack: vec![(input.iter(), order)],
        }
    }
}

/// Iterator returned by [`Grammar::derive`].
pub struct Derivation<'a> {
    grammar: &'a Grammar,
    // (remaining symbols at this level, generations still to apply to them)
    stack: Vec<(std::slice::Iter<'a, Symbol>, usize)>,
}

impl Derivation<'_> {
    /// Number of productions currently being walked.
    pub fn open_levels(&self) -> usize {
        self.stack.len()
    }
}

impl Iterator for Derivation<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        let grammar = self.grammar;
        loop {
            let (cursor, depth) = self.stack.last_mut()?;
            let Some(&sym) = cursor.next() else {
                self.stack.pop();
                continue;
            };
            let depth = *depth;
            if depth > 0
                && let Some(replacement) = grammar.rules.get(&sym)
            {
                // Last symbol of this level: replace the frame instead of stacking on it.
                if cursor.len() == 0 {
                    self.stack.pop();
                }
                self.stack.push((replacement.iter(), depth - 1));
                continue;
            }
            return Some(sym);
        }
    }
}

pub(crate) fn single_char(key: &str) -> Result<Symbol> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LSystemError::InvalidSymbol {
            key: key.to_string(),
        }),
    }
}
