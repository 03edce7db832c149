//! Tree Evaluation.
//!
//! ## Algorithm
//!
//! Evaluation is a post-order walk: children first, then one combining
//! step per operator. Each combining step partitions its concrete
//! operands into evaluable and symbolic halves, runs the geometric
//! pairwise operators on the evaluable halves, and re-wraps whatever
//! stays undecidable in a residual lazy node. The result of `eval` is
//! therefore either a fully concrete set or a smaller tree whose
//! remaining operators are all blocked on symbols.
//!
//! The walk is depth-limited and cooperatively cancellable through a
//! shared flag, checked once per node.

use crate::error::{Result, SetError};
use crate::node::SetNode;
use crate::ops::{
    intersect_finite_and_set, intersect_pieces, subtract_finite_and_set, subtract_pieces,
    subtract_set_and_finite, unite_finite_and_set,
};
use crate::piece::SetPiece;
use crate::set::Set;
use smallvec::{smallvec, SmallVec};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Evaluation limits and cancellation.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Maximum operator-tree depth walked before giving up.
    pub max_depth: usize,
    /// Cooperative cancellation flag, checked once per node.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            cancel: None,
        }
    }
}

/// Counters accumulated across [`Evaluator::eval`] calls.
#[derive(Debug, Clone, Default)]
pub struct EvalStats {
    /// Operator nodes visited.
    pub nodes_evaluated: u64,
    /// Piece pairs combined geometrically.
    pub pieces_merged: u64,
    /// Residual lazy nodes emitted because of symbolic operands.
    pub symbolic_fallbacks: u64,
}

/// Evaluates set operator trees down to concrete sets where possible.
#[derive(Debug, Default)]
pub struct Evaluator {
    config: EvalConfig,
    stats: EvalStats,
}

impl Evaluator {
    /// Creates an evaluator with the given configuration.
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            stats: EvalStats::default(),
        }
    }

    /// The accumulated counters.
    pub fn stats(&self) -> &EvalStats {
        &self.stats
    }

    /// Resets the counters.
    pub fn reset_stats(&mut self) {
        self.stats = EvalStats::default();
    }

    /// Evaluates a tree.
    ///
    /// # Errors
    /// [`SetError::DepthExceeded`] past the configured depth and
    /// [`SetError::Cancelled`] when the cancellation flag is raised.
    pub fn eval(&mut self, node: &SetNode) -> Result<SetNode> {
        let result = self.eval_node(node, 0)?;
        debug!(
            nodes = self.stats.nodes_evaluated,
            merges = self.stats.pieces_merged,
            fallbacks = self.stats.symbolic_fallbacks,
            "evaluation finished"
        );
        Ok(result)
    }

    fn eval_node(&mut self, node: &SetNode, depth: usize) -> Result<SetNode> {
        if depth > self.config.max_depth {
            return Err(SetError::DepthExceeded(self.config.max_depth));
        }
        if let Some(flag) = &self.config.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(SetError::Cancelled);
            }
        }
        self.stats.nodes_evaluated += 1;
        match node {
            SetNode::Concrete(_) | SetNode::Conditional(_) => Ok(node.clone()),
            SetNode::Union(a, b) => {
                let a = self.eval_node(a, depth + 1)?;
                let b = self.eval_node(b, depth + 1)?;
                Ok(self.apply_union(a, b))
            }
            SetNode::Intersection(a, b) => {
                let a = self.eval_node(a, depth + 1)?;
                let b = self.eval_node(b, depth + 1)?;
                Ok(self.apply_intersection(a, b))
            }
            SetNode::Complement(a, b) => {
                let a = self.eval_node(a, depth + 1)?;
                let b = self.eval_node(b, depth + 1)?;
                Ok(self.apply_complement(a, b))
            }
            SetNode::Inversion(a) => {
                let a = self.eval_node(a, depth + 1)?;
                trace!("inversion rewritten as complement against the plane");
                Ok(self.apply_complement(SetNode::Concrete(Set::complexes()), a))
            }
        }
    }

    fn apply_union(&mut self, a: SetNode, b: SetNode) -> SetNode {
        match (a, b) {
            (SetNode::Concrete(x), SetNode::Concrete(y)) => {
                if x.is_finite() && !y.is_finite() {
                    unite_finite_and_set(&x, &SetNode::Concrete(y))
                } else if y.is_finite() && !x.is_finite() {
                    unite_finite_and_set(&y, &SetNode::Concrete(x))
                } else {
                    let before = x.pieces().len() + y.pieces().len();
                    let mut joined = x;
                    joined.add_range(&y);
                    let joined = joined.normalized();
                    self.stats.pieces_merged +=
                        before.saturating_sub(joined.pieces().len()) as u64;
                    SetNode::Concrete(joined)
                }
            }
            (SetNode::Concrete(x), cond @ SetNode::Conditional(_)) if x.is_finite() => {
                unite_finite_and_set(&x, &cond)
            }
            (cond @ SetNode::Conditional(_), SetNode::Concrete(y)) if y.is_finite() => {
                unite_finite_and_set(&y, &cond)
            }
            (SetNode::Conditional(ca), SetNode::Conditional(cb)) => {
                SetNode::Conditional(ca.unite(&cb))
            }
            (a, b) => self.fallback(SetNode::Union(Box::new(a), Box::new(b))),
        }
    }

    fn apply_intersection(&mut self, a: SetNode, b: SetNode) -> SetNode {
        match (a, b) {
            (SetNode::Concrete(x), SetNode::Concrete(y)) => {
                if x.is_finite() {
                    intersect_finite_and_set(&x, &SetNode::Concrete(y))
                } else if y.is_finite() {
                    intersect_finite_and_set(&y, &SetNode::Concrete(x))
                } else {
                    self.intersect_general(&x, &y)
                }
            }
            (SetNode::Concrete(x), cond @ SetNode::Conditional(_)) if x.is_finite() => {
                intersect_finite_and_set(&x, &cond)
            }
            (cond @ SetNode::Conditional(_), SetNode::Concrete(y)) if y.is_finite() => {
                intersect_finite_and_set(&y, &cond)
            }
            (SetNode::Conditional(ca), SetNode::Conditional(cb)) => {
                SetNode::Conditional(ca.intersect(&cb))
            }
            (a, b) => self.fallback(SetNode::Intersection(Box::new(a), Box::new(b))),
        }
    }

    fn apply_complement(&mut self, a: SetNode, b: SetNode) -> SetNode {
        match (a, b) {
            (SetNode::Concrete(x), SetNode::Concrete(y)) => {
                if y.is_finite() {
                    subtract_set_and_finite(&x, &y)
                } else {
                    self.subtract_general(&x, &y)
                }
            }
            (SetNode::Concrete(x), cond @ SetNode::Conditional(_)) if x.is_finite() => {
                subtract_finite_and_set(&x, &cond)
            }
            (SetNode::Conditional(ca), SetNode::Conditional(cb)) => {
                SetNode::Conditional(ca.subtract(&cb))
            }
            (a, b) => self.fallback(SetNode::Complement(Box::new(a), Box::new(b))),
        }
    }

    /// Intersection of two interval-bearing sets. The evaluable halves
    /// combine pairwise; each symbolic half contributes a residual
    /// intersection with the whole other operand.
    fn intersect_general(&mut self, x: &Set, y: &Set) -> SetNode {
        let (good_x, bad_x) = x.partition_evaluable();
        let (good_y, bad_y) = y.partition_evaluable();

        let mut merged = Set::empty();
        merged.set_fast_adding(true);
        for px in good_x.pieces() {
            for py in good_y.pieces() {
                if let Some(p) = intersect_pieces(px, py) {
                    merged.add_piece(p);
                    self.stats.pieces_merged += 1;
                }
            }
        }
        merged.set_fast_adding(false);
        let merged = merged.normalized();

        let mut terms: Vec<SetNode> = Vec::new();
        if !merged.is_empty() {
            terms.push(SetNode::Concrete(merged));
        }
        if !bad_x.is_empty() {
            terms.push(lazy_pair(SetNode::Intersection, &bad_x, y));
        }
        if !bad_y.is_empty() && !good_x.is_empty() {
            terms.push(lazy_pair(SetNode::Intersection, &bad_y, &good_x));
        }
        if !bad_x.is_empty() || !bad_y.is_empty() {
            self.stats.symbolic_fallbacks += 1;
        }
        join_union(terms)
    }

    /// Difference of two interval-bearing sets: every evaluable piece of
    /// `x` has the evaluable pieces of `y` carved out of it; symbolic
    /// pieces on either side stay behind lazy nodes.
    fn subtract_general(&mut self, x: &Set, y: &Set) -> SetNode {
        let (good_x, bad_x) = x.partition_evaluable();
        let (good_y, bad_y) = y.partition_evaluable();

        let mut carved = Set::empty();
        carved.set_fast_adding(true);
        for px in good_x.pieces() {
            let mut remainders: SmallVec<[SetPiece; 4]> = smallvec![px.clone()];
            for py in good_y.pieces() {
                let mut next = SmallVec::new();
                for rem in &remainders {
                    next.extend(subtract_pieces(rem, py));
                }
                self.stats.pieces_merged += 1;
                remainders = next;
                if remainders.is_empty() {
                    break;
                }
            }
            for rem in remainders {
                carved.add_piece(rem);
            }
        }
        carved.set_fast_adding(false);
        let carved = carved.normalized();

        let mut result = SetNode::Concrete(carved);
        if !bad_y.is_empty() && !result.is_empty().is_true() {
            result = SetNode::Complement(Box::new(result), Box::new(SetNode::Concrete(bad_y)));
            self.stats.symbolic_fallbacks += 1;
        }
        if !bad_x.is_empty() {
            let tail = lazy_pair(SetNode::Complement, &bad_x, y);
            result = if result.is_empty().is_true() {
                tail
            } else {
                SetNode::Union(Box::new(result), Box::new(tail))
            };
            self.stats.symbolic_fallbacks += 1;
        }
        result
    }

    fn fallback(&mut self, node: SetNode) -> SetNode {
        trace!(%node, "operands stay symbolic");
        self.stats.symbolic_fallbacks += 1;
        node
    }
}

fn lazy_pair(
    ctor: fn(Box<SetNode>, Box<SetNode>) -> SetNode,
    left: &Set,
    right: &Set,
) -> SetNode {
    ctor(
        Box::new(SetNode::Concrete(left.clone())),
        Box::new(SetNode::Concrete(right.clone())),
    )
}

fn join_union(mut terms: Vec<SetNode>) -> SetNode {
    let Some(mut result) = terms.pop() else {
        return SetNode::Concrete(Set::empty());
    };
    while let Some(term) = terms.pop() {
        result = SetNode::Union(Box::new(term), Box::new(result));
    }
    result
}
