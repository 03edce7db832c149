//! Concrete Sets.
//!
//! ## Representation
//!
//! A set is a flat list of pieces kept mutually disjoint by the adding
//! discipline in [`Set::add_piece`]: a new piece has everything already
//! present subtracted from it before being stored, so membership of the
//! whole set is the plain disjunction of per-piece membership. Symbolic
//! pieces cannot be subtracted and are deduplicated structurally instead.
//!
//! Fast-adding mode skips the discipline entirely for callers that can
//! prove disjointness themselves (the evaluator's pairwise products are
//! an example); it must be switched off again before the set escapes.

use crate::error::{Result, SetError};
use crate::ops::{subtract_pieces, unite_pieces};
use crate::piece::SetPiece;
use crate::ternary::Ternary;
use omniset_core::{Entity, Real};
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// A concrete set: a disjoint list of elements and intervals.
#[derive(Debug, Clone, Default)]
pub struct Set {
    pieces: Vec<SetPiece>,
    fast_adding: bool,
}

impl Set {
    /// The empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A finite set of the given elements, deduplicated.
    pub fn finite<I, T>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Entity>,
    {
        let mut set = Self::empty();
        set.add_elements(elements);
        set
    }

    /// Builds a set from pieces, applying the disjointness discipline.
    pub fn from_pieces(pieces: impl IntoIterator<Item = SetPiece>) -> Self {
        let mut set = Self::empty();
        for piece in pieces {
            set.add_piece(piece);
        }
        set
    }

    /// The real line: `(-oo; +oo)` at imaginary height zero.
    pub fn reals() -> Self {
        let piece = SetPiece::element_or_interval(
            crate::edge::Edge::new(Real::NegInfinity, false, true),
            crate::edge::Edge::new(Real::PosInfinity, false, true),
        );
        Self {
            pieces: vec![piece],
            fast_adding: false,
        }
    }

    /// The whole complex plane.
    pub fn complexes() -> Self {
        let piece = SetPiece::element_or_interval(
            crate::edge::Edge::open(omniset_core::Complex::neg_neg_infinity()),
            crate::edge::Edge::open(omniset_core::Complex::pos_pos_infinity()),
        );
        Self {
            pieces: vec![piece],
            fast_adding: false,
        }
    }

    /// The stored pieces.
    pub fn pieces(&self) -> &[SetPiece] {
        &self.pieces
    }

    /// Switches fast-adding mode, in which [`Set::add_piece`] appends
    /// without subtracting. Only for pieces already known to be disjoint
    /// from the set.
    pub fn set_fast_adding(&mut self, on: bool) {
        self.fast_adding = on;
    }

    /// Adds a piece, keeping the stored pieces disjoint.
    ///
    /// A symbolic piece is appended unless a structurally equal piece is
    /// already present. An element added to a finite set is appended
    /// unless an equal element is present. Otherwise every evaluable
    /// stored piece is subtracted from the new piece and only the
    /// remainder is stored.
    pub fn add_piece(&mut self, piece: SetPiece) {
        if self.fast_adding {
            self.pieces.push(piece);
            return;
        }
        if !piece.is_evaluable()
            || (matches!(piece, SetPiece::Element(_)) && self.is_finite())
        {
            if !self.pieces.contains(&piece) {
                self.pieces.push(piece);
            }
            return;
        }
        let mut remainders: SmallVec<[SetPiece; 4]> = smallvec![piece];
        for stored in self.pieces.iter().filter(|p| p.is_evaluable()) {
            let mut next = SmallVec::new();
            for rem in &remainders {
                next.extend(subtract_pieces(rem, stored));
            }
            remainders = next;
            if remainders.is_empty() {
                return;
            }
        }
        self.pieces.extend(remainders);
    }

    /// Adds every piece of another set.
    pub fn add_range(&mut self, other: &Set) {
        for piece in &other.pieces {
            self.add_piece(piece.clone());
        }
    }

    /// Adds single elements.
    pub fn add_elements<I, T>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Entity>,
    {
        for el in elements {
            self.add_piece(SetPiece::element(el));
        }
    }

    /// Removes all pieces.
    pub fn clear(&mut self) {
        self.pieces.clear();
    }

    /// Whether no pieces are stored.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Whether every piece is a single element. The empty set is finite.
    pub fn is_finite(&self) -> bool {
        self.pieces
            .iter()
            .all(|p| matches!(p, SetPiece::Element(_)))
    }

    /// The number of elements, or `None` for a set with interval pieces.
    pub fn count(&self) -> Option<usize> {
        if self.is_finite() {
            Some(self.pieces.len())
        } else {
            None
        }
    }

    /// The elements of a finite set.
    ///
    /// # Errors
    /// [`SetError::NonFinite`] if the set has interval pieces;
    /// [`SetError::Bug`] if a set reporting itself finite fails to
    /// project to elements.
    pub fn as_finite_set(&self) -> Result<Vec<Entity>> {
        if !self.is_finite() {
            return Err(SetError::NonFinite);
        }
        match self.element_entities() {
            Some(els) => Ok(els.into_iter().cloned().collect()),
            None => Err(SetError::Bug(
                "finite set failed its element projection".into(),
            )),
        }
    }

    /// Borrows the elements if every piece is an element.
    pub(crate) fn element_entities(&self) -> Option<Vec<&Entity>> {
        self.pieces
            .iter()
            .map(|p| match p {
                SetPiece::Element(e) => Some(e),
                SetPiece::Interval(_) => None,
            })
            .collect()
    }

    /// Whether `piece` lies entirely within the set, decided by
    /// subtracting stored pieces from it until nothing remains. Symbolic
    /// stored pieces subtract nothing, so the answer is conservative:
    /// `false` means "not provably contained".
    pub fn contains_piece(&self, piece: &SetPiece) -> bool {
        let mut remainders: SmallVec<[SetPiece; 4]> = smallvec![piece.clone()];
        for stored in &self.pieces {
            let mut next = SmallVec::new();
            for rem in &remainders {
                next.extend(subtract_pieces(rem, stored));
            }
            remainders = next;
            if remainders.is_empty() {
                return true;
            }
        }
        false
    }

    /// Tri-state membership of a single entity.
    pub fn try_contains(&self, entity: &Entity) -> Ternary {
        self.try_contains_piece(&SetPiece::element(entity.clone()))
    }

    /// Tri-state containment of a whole piece.
    ///
    /// `True` and `False` are only reported when provable: a structural
    /// or numeric match gives `True`; `False` needs both the query and
    /// the relevant stored pieces to be evaluable. Everything else is
    /// `Unknown`.
    pub fn try_contains_piece(&self, piece: &SetPiece) -> Ternary {
        if self.pieces.iter().any(|p| p == piece) {
            return Ternary::True;
        }
        if self.is_finite() {
            return match piece {
                // an equal element would have matched above
                SetPiece::Element(e) if e.is_evaluable() && self.all_evaluable() => Ternary::False,
                // a genuine interval holds infinitely many points
                SetPiece::Interval(_) if piece.is_evaluable() => Ternary::False,
                _ => Ternary::Unknown,
            };
        }
        if !piece.is_evaluable() {
            return Ternary::Unknown;
        }
        if self.contains_piece(piece) {
            return Ternary::True;
        }
        if self.all_evaluable() {
            Ternary::False
        } else {
            Ternary::Unknown
        }
    }

    fn all_evaluable(&self) -> bool {
        self.pieces.iter().all(SetPiece::is_evaluable)
    }

    /// Splits into (evaluable pieces, symbolic pieces). Both halves keep
    /// the disjointness invariant, so they are built in fast mode.
    pub(crate) fn partition_evaluable(&self) -> (Set, Set) {
        let mut good = Set::empty();
        let mut bad = Set::empty();
        for piece in &self.pieces {
            if piece.is_evaluable() {
                good.pieces.push(piece.clone());
            } else {
                bad.pieces.push(piece.clone());
            }
        }
        (good, bad)
    }

    /// Returns a copy with every piece-pair that can merge into a single
    /// piece merged, repeated to a fixed point. Canonicalizes unions of
    /// overlapping or touching real intervals.
    pub fn normalized(&self) -> Set {
        let mut pieces = self.pieces.clone();
        loop {
            let mut merged_at = None;
            'search: for i in 0..pieces.len() {
                for j in (i + 1)..pieces.len() {
                    if let Some(merged) = unite_pieces(&pieces[i], &pieces[j]) {
                        merged_at = Some((i, j, merged));
                        break 'search;
                    }
                }
            }
            match merged_at {
                Some((i, j, merged)) => {
                    pieces[i] = merged;
                    pieces.remove(j);
                }
                None => break,
            }
        }
        Set {
            pieces,
            fast_adding: false,
        }
    }

    /// Whether two sets describe the same points, decided by mutual piece
    /// containment. Only meaningful for fully evaluable sets.
    pub fn equivalent(&self, other: &Set) -> bool {
        self.pieces.iter().all(|p| other.contains_piece(p))
            && other.pieces.iter().all(|p| self.contains_piece(p))
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pieces.is_empty() {
            return write!(f, "{{}}");
        }
        for (i, piece) in self.pieces.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "{piece}")?;
        }
        Ok(())
    }
}

impl FromIterator<SetPiece> for Set {
    fn from_iter<I: IntoIterator<Item = SetPiece>>(iter: I) -> Self {
        Self::from_pieces(iter)
    }
}
