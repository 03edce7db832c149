//! Conditional Sets.
//!
//! A conditional set is a set-builder form `{ x : P(x) }`: a bound
//! variable plus a boolean predicate over it. Membership follows from
//! substituting the candidate into the predicate; two conditional sets
//! combine by first renaming one's bound variable to the other's, then
//! joining the predicates with the matching boolean connective.

use crate::ternary::Ternary;
use omniset_core::Entity;
use std::fmt;

/// A set defined by a predicate over one bound variable.
#[derive(Debug, Clone)]
pub struct ConditionalSet {
    var: String,
    predicate: Entity,
}

impl ConditionalSet {
    /// Builds `{ var : predicate }`.
    pub fn new(var: impl Into<String>, predicate: Entity) -> Self {
        Self {
            var: var.into(),
            predicate,
        }
    }

    /// The bound variable name.
    pub fn var(&self) -> &str {
        &self.var
    }

    /// The defining predicate.
    pub fn predicate(&self) -> &Entity {
        &self.predicate
    }

    /// Rewrites `other` over this set's bound variable so the two
    /// predicates speak about the same symbol.
    fn merged_with(&self, other: &ConditionalSet) -> Entity {
        if self.var == other.var {
            other.predicate.clone()
        } else {
            other
                .predicate
                .substitute(&other.var, &Entity::var(self.var.clone()))
        }
    }

    /// `{ x : P } /\ { y : Q }` is `{ x : P and Q[y := x] }`.
    pub fn intersect(&self, other: &ConditionalSet) -> ConditionalSet {
        let q = self.merged_with(other);
        ConditionalSet::new(
            self.var.clone(),
            (self.predicate.clone() & q).simplified(),
        )
    }

    /// `{ x : P } \/ { y : Q }` is `{ x : P or Q[y := x] }`.
    pub fn unite(&self, other: &ConditionalSet) -> ConditionalSet {
        let q = self.merged_with(other);
        ConditionalSet::new(
            self.var.clone(),
            (self.predicate.clone() | q).simplified(),
        )
    }

    /// `{ x : P } \ { y : Q }` is `{ x : P and not Q[y := x] }`.
    pub fn subtract(&self, other: &ConditionalSet) -> ConditionalSet {
        let q = self.merged_with(other);
        ConditionalSet::new(
            self.var.clone(),
            (self.predicate.clone() & !q).simplified(),
        )
    }

    /// Tri-state membership: substitute the candidate for the bound
    /// variable and evaluate the predicate as far as it goes.
    pub fn try_contains(&self, entity: &Entity) -> Ternary {
        self.predicate
            .substitute(&self.var, entity)
            .simplified()
            .eval_bool()
            .into()
    }

    /// `True` when the predicate simplifies to a literal falsehood,
    /// `Unknown` otherwise (a non-trivial predicate may still reject
    /// every candidate).
    pub fn is_empty(&self) -> Ternary {
        match self.predicate.simplified() {
            Entity::Bool(false) => Ternary::True,
            _ => Ternary::Unknown,
        }
    }
}

impl PartialEq for ConditionalSet {
    fn eq(&self, other: &Self) -> bool {
        self.predicate.simplified() == self.merged_with(other).simplified()
    }
}

impl Eq for ConditionalSet {}

impl fmt::Display for ConditionalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {} : {} }}", self.var, self.predicate)
    }
}
