//! The formula-engine and model-reader collaborator contracts (§2, §6).
//!
//! These are external collaborators: a SAT/SMT engine lives behind
//! [`FormulaEngine`], and a solver's satisfying assignment lives behind
//! [`ModelReader`]. Neither is implemented by this crate outside of its test
//! suite (`tests/support/brute_force.rs`) — the reduction only ever talks to
//! them through these traits.

/// An opaque formula-building context, generic over its own atom
/// representation (the Rust-idiomatic replacement for a fixed `Z3_ast`-like
/// handle: any `Copy + Eq` type the caller's engine wants to hand back).
pub trait FormulaEngine {
    /// The engine's handle to a constructed Boolean expression.
    type Atom: Copy + Eq;

    /// Returns the Boolean variable named `name`, creating it on first use.
    /// Idempotent: two calls with the same name return the same atom.
    fn mk_bool_var(&mut self, name: &str) -> Self::Atom;

    /// The constant `true`.
    fn mk_true(&mut self) -> Self::Atom;

    /// Negation.
    fn mk_not(&mut self, a: Self::Atom) -> Self::Atom;

    /// Conjunction. An empty slice is the vacuous conjunction and must
    /// return [`FormulaEngine::mk_true`] (§9 "Vacuous conjunctions/disjunctions").
    fn mk_and(&mut self, atoms: &[Self::Atom]) -> Self::Atom;

    /// Disjunction. Never called by this crate with an empty slice: an
    /// implication whose conclusion would be an empty disjunction is
    /// omitted entirely rather than built (§9).
    fn mk_or(&mut self, atoms: &[Self::Atom]) -> Self::Atom;

    /// `a => b`.
    fn mk_implies(&mut self, a: Self::Atom, b: Self::Atom) -> Self::Atom;

    /// `a <=> b`.
    fn mk_eq(&mut self, a: Self::Atom, b: Self::Atom) -> Self::Atom;

    /// A cardinality constraint: exactly one of `atoms` is true.
    fn exactly_one(&mut self, atoms: &[Self::Atom]) -> Self::Atom;
}

/// A satisfying assignment for some [`FormulaEngine::Atom`] type.
pub trait ModelReader<Atom> {
    /// Whether `atom` evaluates to true under this model.
    fn value_of(&self, atom: Atom) -> bool;
}
