//! Finite-Set Combinators.
//!
//! When one operand of a binary set operator is finite, the operator
//! reduces to per-element membership queries against the other operand.
//! Membership is tri-state, so each element lands in one of three
//! buckets: kept, dropped, or undecided; undecided elements are carried
//! forward in a residual lazy node instead of being guessed.

use crate::node::SetNode;
use crate::piece::SetPiece;
use crate::set::Set;
use crate::ternary::Ternary;
use smallvec::{smallvec, SmallVec};

use super::subtract_pieces;

/// Intersects a finite set with any leaf set, conditional sets
/// included. Elements whose membership in `other` is undecided survive
/// inside a residual lazy intersection.
pub fn intersect_finite_and_set(finite: &Set, other: &SetNode) -> SetNode {
    let Some(elements) = finite.element_entities() else {
        return lazy_intersection(finite, other);
    };
    let mut kept = Set::empty();
    let mut undecided = Set::empty();
    for el in elements {
        match other.try_contains(el) {
            Ternary::True => kept.add_piece(SetPiece::element(el.clone())),
            Ternary::False => {}
            Ternary::Unknown => undecided.add_piece(SetPiece::element(el.clone())),
        }
    }
    if undecided.is_empty() {
        return SetNode::Concrete(kept);
    }
    let residual = lazy_intersection(&undecided, other);
    if kept.is_empty() {
        residual
    } else {
        SetNode::Union(Box::new(SetNode::Concrete(kept)), Box::new(residual))
    }
}

/// Subtracts any leaf set from a finite set. Elements provably inside
/// `other` are dropped and provably outside ones kept; undecided
/// elements stay behind a residual lazy difference.
pub fn subtract_finite_and_set(finite: &Set, other: &SetNode) -> SetNode {
    let Some(elements) = finite.element_entities() else {
        return SetNode::Complement(
            Box::new(SetNode::Concrete(finite.clone())),
            Box::new(other.clone()),
        );
    };
    let mut kept = Set::empty();
    let mut undecided = Set::empty();
    for el in elements {
        match other.try_contains(el) {
            Ternary::True => {}
            Ternary::False => kept.add_piece(SetPiece::element(el.clone())),
            Ternary::Unknown => undecided.add_piece(SetPiece::element(el.clone())),
        }
    }
    if undecided.is_empty() {
        return SetNode::Concrete(kept);
    }
    let residual = SetNode::Complement(
        Box::new(SetNode::Concrete(undecided)),
        Box::new(other.clone()),
    );
    if kept.is_empty() {
        residual
    } else {
        SetNode::Union(Box::new(SetNode::Concrete(kept)), Box::new(residual))
    }
}

/// Subtracts a finite set from any set. Elements provably outside the
/// set are ignored; elements provably or possibly inside are carved out,
/// geometrically when everything involved is concrete, lazily otherwise.
pub fn subtract_set_and_finite(set: &Set, finite: &Set) -> SetNode {
    let Some(elements) = finite.element_entities() else {
        return lazy_complement(set, finite);
    };
    let mut to_remove = Set::empty();
    let mut any_undecided = false;
    for el in elements {
        match set.try_contains(el) {
            Ternary::False => {}
            Ternary::True => to_remove.add_piece(SetPiece::element(el.clone())),
            Ternary::Unknown => {
                any_undecided = true;
                to_remove.add_piece(SetPiece::element(el.clone()));
            }
        }
    }
    if to_remove.is_empty() {
        return SetNode::Concrete(set.clone());
    }
    let all_concrete = !any_undecided
        && set.pieces().iter().all(SetPiece::is_evaluable)
        && to_remove.pieces().iter().all(SetPiece::is_evaluable);
    if !all_concrete {
        return lazy_complement(set, &to_remove);
    }
    let mut carved = Set::empty();
    carved.set_fast_adding(true);
    for piece in set.pieces() {
        let mut remainders: SmallVec<[SetPiece; 4]> = smallvec![piece.clone()];
        for el in to_remove.pieces() {
            let mut next = SmallVec::new();
            for rem in &remainders {
                next.extend(subtract_pieces(rem, el));
            }
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
    SetNode::Concrete(carved)
}

/// Unites a finite set with any leaf set. Over a concrete operand this
/// concretizes, appending uncovered elements through the ordinary
/// adding discipline; over a conditional operand only the uncovered
/// leftovers ride alongside it.
pub fn unite_finite_and_set(finite: &Set, other: &SetNode) -> SetNode {
    let Some(elements) = finite.element_entities() else {
        return SetNode::Union(
            Box::new(SetNode::Concrete(finite.clone())),
            Box::new(other.clone()),
        );
    };
    let mut leftover = Set::empty();
    for el in elements {
        if other.try_contains(el) != Ternary::True {
            leftover.add_piece(SetPiece::element(el.clone()));
        }
    }
    match other {
        SetNode::Concrete(set) => {
            let mut result = set.clone();
            for piece in leftover.pieces() {
                result.add_piece(piece.clone());
            }
            SetNode::Concrete(result)
        }
        _ if leftover.is_empty() => other.clone(),
        _ => SetNode::Union(Box::new(SetNode::Concrete(leftover)), Box::new(other.clone())),
    }
}

fn lazy_intersection(a: &Set, b: &SetNode) -> SetNode {
    SetNode::Intersection(Box::new(SetNode::Concrete(a.clone())), Box::new(b.clone()))
}

fn lazy_complement(a: &Set, b: &Set) -> SetNode {
    SetNode::Complement(
        Box::new(SetNode::Concrete(a.clone())),
        Box::new(SetNode::Concrete(b.clone())),
    )
}
