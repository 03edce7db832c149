//! Boundary Entities and Predicates.
//!
//! The set engine consumes interval edges through a narrow contract: an
//! edge value either evaluates to an exact [`Complex`] or it is symbolic
//! (contains a free variable) and every geometric algorithm must defer.
//! Conditional sets additionally need a small predicate language whose
//! formulas can be conjoined, negated, substituted into, and
//! constant-folded.
//!
//! [`Entity`] covers both roles. It is deliberately small: general
//! algebraic rewriting is out of scope, only the operations the set
//! algebra relies on are provided.

use crate::complex::Complex;
use crate::real::Real;
use rustc_hash::FxHashSet;
use std::fmt;
use std::ops;

/// Comparison operators usable inside predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    /// `=`
    Eq,
    /// `!=`
    Neq,
    /// `<` (real operands only)
    Less,
    /// `<=` (real operands only)
    Leq,
    /// `>` (real operands only)
    Greater,
    /// `>=` (real operands only)
    Geq,
}

impl CmpOp {
    fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Neq => "!=",
            CmpOp::Less => "<",
            CmpOp::Leq => "<=",
            CmpOp::Greater => ">",
            CmpOp::Geq => ">=",
        }
    }
}

/// A boundary expression: a number, a free symbol, or a boolean predicate
/// built from comparisons and connectives.
///
/// Structural equality (`==`) is symbolic; numeric questions go through
/// [`Entity::evaled`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entity {
    /// A numeric leaf.
    Number(Complex),
    /// A free variable.
    Var(String),
    /// A boolean literal.
    Bool(bool),
    /// Logical negation.
    Not(Box<Entity>),
    /// Logical conjunction.
    And(Box<Entity>, Box<Entity>),
    /// Logical disjunction.
    Or(Box<Entity>, Box<Entity>),
    /// A comparison between two entities.
    Cmp(CmpOp, Box<Entity>, Box<Entity>),
}

impl Entity {
    /// Builds a variable entity.
    pub fn var(name: impl Into<String>) -> Self {
        Entity::Var(name.into())
    }

    /// Builds a comparison predicate.
    pub fn cmp(op: CmpOp, lhs: Entity, rhs: Entity) -> Self {
        Entity::Cmp(op, Box::new(lhs), Box::new(rhs))
    }

    /// Attempts numeric evaluation. Returns `None` as soon as a free
    /// variable or a boolean construct is involved.
    pub fn evaled(&self) -> Option<Complex> {
        match self {
            Entity::Number(z) => Some(z.clone()),
            _ => None,
        }
    }

    /// Whether this entity evaluates to a concrete number.
    pub fn is_evaluable(&self) -> bool {
        self.evaled().is_some()
    }

    /// Collects the names of all free variables.
    pub fn free_vars(&self) -> FxHashSet<&str> {
        let mut vars = FxHashSet::default();
        self.collect_vars(&mut vars);
        vars
    }

    fn collect_vars<'a>(&'a self, out: &mut FxHashSet<&'a str>) {
        match self {
            Entity::Number(_) | Entity::Bool(_) => {}
            Entity::Var(name) => {
                out.insert(name.as_str());
            }
            Entity::Not(a) => a.collect_vars(out),
            Entity::And(a, b) | Entity::Or(a, b) | Entity::Cmp(_, a, b) => {
                a.collect_vars(out);
                b.collect_vars(out);
            }
        }
    }

    /// Replaces every occurrence of the named variable.
    pub fn substitute(&self, var: &str, replacement: &Entity) -> Entity {
        match self {
            Entity::Number(_) | Entity::Bool(_) => self.clone(),
            Entity::Var(name) => {
                if name == var {
                    replacement.clone()
                } else {
                    self.clone()
                }
            }
            Entity::Not(a) => Entity::Not(Box::new(a.substitute(var, replacement))),
            Entity::And(a, b) => Entity::And(
                Box::new(a.substitute(var, replacement)),
                Box::new(b.substitute(var, replacement)),
            ),
            Entity::Or(a, b) => Entity::Or(
                Box::new(a.substitute(var, replacement)),
                Box::new(b.substitute(var, replacement)),
            ),
            Entity::Cmp(op, a, b) => Entity::Cmp(
                *op,
                Box::new(a.substitute(var, replacement)),
                Box::new(b.substitute(var, replacement)),
            ),
        }
    }

    /// Constant-folds a predicate to a concrete truth value when possible.
    ///
    /// Strict-order comparisons of non-real complex values stay undecided;
    /// `=`/`!=` decide structurally on evaluated numbers.
    pub fn eval_bool(&self) -> Option<bool> {
        match self {
            Entity::Bool(b) => Some(*b),
            Entity::Not(a) => a.eval_bool().map(|v| !v),
            Entity::And(a, b) => match (a.eval_bool(), b.eval_bool()) {
                (Some(false), _) | (_, Some(false)) => Some(false),
                (Some(true), Some(true)) => Some(true),
                _ => None,
            },
            Entity::Or(a, b) => match (a.eval_bool(), b.eval_bool()) {
                (Some(true), _) | (_, Some(true)) => Some(true),
                (Some(false), Some(false)) => Some(false),
                _ => None,
            },
            Entity::Cmp(op, a, b) => {
                let (za, zb) = (a.evaled()?, b.evaled()?);
                match op {
                    CmpOp::Eq => Some(za == zb),
                    CmpOp::Neq => Some(za != zb),
                    CmpOp::Less | CmpOp::Leq | CmpOp::Greater | CmpOp::Geq => {
                        if !za.is_real() || !zb.is_real() {
                            return None;
                        }
                        Some(match op {
                            CmpOp::Less => za.re < zb.re,
                            CmpOp::Leq => za.re <= zb.re,
                            CmpOp::Greater => za.re > zb.re,
                            CmpOp::Geq => za.re >= zb.re,
                            _ => unreachable!(),
                        })
                    }
                }
            }
            Entity::Number(_) | Entity::Var(_) => None,
        }
    }

    /// Recursive predicate simplification: constant folding, identity and
    /// absorbing elements, double-negation removal.
    pub fn simplified(&self) -> Entity {
        match self {
            Entity::Number(_) | Entity::Var(_) | Entity::Bool(_) => self.clone(),
            Entity::Not(a) => match a.simplified() {
                Entity::Bool(b) => Entity::Bool(!b),
                Entity::Not(inner) => *inner,
                other => Entity::Not(Box::new(other)),
            },
            Entity::And(a, b) => match (a.simplified(), b.simplified()) {
                (Entity::Bool(false), _) | (_, Entity::Bool(false)) => Entity::Bool(false),
                (Entity::Bool(true), other) | (other, Entity::Bool(true)) => other,
                (sa, sb) if sa == sb => sa,
                (sa, sb) => Entity::And(Box::new(sa), Box::new(sb)),
            },
            Entity::Or(a, b) => match (a.simplified(), b.simplified()) {
                (Entity::Bool(true), _) | (_, Entity::Bool(true)) => Entity::Bool(true),
                (Entity::Bool(false), other) | (other, Entity::Bool(false)) => other,
                (sa, sb) if sa == sb => sa,
                (sa, sb) => Entity::Or(Box::new(sa), Box::new(sb)),
            },
            Entity::Cmp(op, a, b) => {
                let folded = Entity::Cmp(*op, Box::new(a.simplified()), Box::new(b.simplified()));
                match folded.eval_bool() {
                    Some(v) => Entity::Bool(v),
                    None => folded,
                }
            }
        }
    }
}

impl From<i64> for Entity {
    fn from(n: i64) -> Self {
        Entity::Number(Complex::from(n))
    }
}

impl From<Real> for Entity {
    fn from(re: Real) -> Self {
        Entity::Number(Complex::real(re))
    }
}

impl From<Complex> for Entity {
    fn from(z: Complex) -> Self {
        Entity::Number(z)
    }
}

impl ops::BitAnd for Entity {
    type Output = Entity;
    fn bitand(self, rhs: Entity) -> Entity {
        Entity::And(Box::new(self), Box::new(rhs))
    }
}

impl ops::BitOr for Entity {
    type Output = Entity;
    fn bitor(self, rhs: Entity) -> Entity {
        Entity::Or(Box::new(self), Box::new(rhs))
    }
}

impl ops::Not for Entity {
    type Output = Entity;
    fn not(self) -> Entity {
        Entity::Not(Box::new(self))
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Number(z) => write!(f, "{z}"),
            Entity::Var(name) => write!(f, "{name}"),
            Entity::Bool(b) => write!(f, "{b}"),
            Entity::Not(a) => write!(f, "not ({a})"),
            Entity::And(a, b) => write!(f, "({a}) and ({b})"),
            Entity::Or(a, b) => write!(f, "({a}) or ({b})"),
            Entity::Cmp(op, a, b) => write!(f, "{a} {} {b}", op.symbol()),
        }
    }
}
