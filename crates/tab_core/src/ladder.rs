//! Declarative multi-level comparators.
//!
//! A ladder is an ordered list of rules, each a key extractor, a direction
//! and a tolerance. Rules are tried in order and the first one whose keys
//! differ by more than its tolerance decides the comparison.

use std::cmp::Ordering;
use std::fmt;

use crate::types::TOLERANCE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Smaller keys come first
    Ascending,
    /// Larger keys come first
    Descending,
}

struct Rule<T> {
    name: &'static str,
    key: Box<dyn Fn(&T) -> f64>,
    direction: Direction,
    tolerance: f64,
}

pub struct Ladder<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for Ladder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Ladder<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule with an explicit direction and tolerance.
    pub fn then(
        mut self,
        name: &'static str,
        direction: Direction,
        tolerance: f64,
        key: impl Fn(&T) -> f64 + 'static,
    ) -> Self {
        self.rules.push(Rule {
            name,
            key: Box::new(key),
            direction,
            tolerance,
        });
        self
    }

    /// Appends a rule that puts smaller keys first, at the default tolerance.
    pub fn asc(self, name: &'static str, key: impl Fn(&T) -> f64 + 'static) -> Self {
        self.then(name, Direction::Ascending, TOLERANCE, key)
    }

    /// Appends a rule that puts larger keys first, at the default tolerance.
    pub fn desc(self, name: &'static str, key: impl Fn(&T) -> f64 + 'static) -> Self {
        self.then(name, Direction::Descending, TOLERANCE, key)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    /// `Less` when `a` belongs before `b`.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.deciding_rule(a, b)
            .map(|(_, ordering)| ordering)
            .unwrap_or(Ordering::Equal)
    }

    /// The first rule that separates `a` and `b`, with its verdict.
    pub fn deciding_rule(&self, a: &T, b: &T) -> Option<(&'static str, Ordering)> {
        for rule in &self.rules {
            let diff = (rule.key)(a) - (rule.key)(b);
            if diff.abs() > rule.tolerance {
                let ordering = if diff < 0.0 {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
                let ordering = match rule.direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                };
                return Some((rule.name, ordering));
            }
        }
        None
    }
}

impl<T> fmt::Debug for Ladder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| (r.name, r.direction, r.tolerance)))
            .finish()
    }
}

#[cfg(test)]
#[path = "ladder_tests.rs"]
mod ladder_tests;
