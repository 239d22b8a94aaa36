//! Opaque arena indices threaded across every phase.
//!
//! Types and symbols are compared by identity (pointer identity in the
//! reference implementation this is distilled from). Arenas with stable
//! indices preserve that identity without needing `Rc`/`Weak` or moving
//! pointers: two `TypeId`s are "the same type" iff they compare equal.

/// Index into a parser-owned AST arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Index into a binder-owned symbol arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

/// Index into a checker-owned type arena. Allocated monotonically
/// per-compile; two object types from syntactically identical literals
/// get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

/// Whether a name occurrence refers to a value or a type. Determines
/// which declarations in a `Table` a lookup can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meaning {
    Value,
    Type,
}

/// A parallel pair of type-variable sources and their substitution
/// targets, used during generic instantiation. Lives here (rather than
/// in the solver, where `Type` itself lives) so that an instantiated
/// `Symbol` in the binder crate can carry its mapper without the binder
/// depending on the solver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mapper {
    pub sources: Vec<TypeId>,
    pub targets: Vec<TypeId>,
}

impl Mapper {
    #[must_use]
    pub fn new(sources: Vec<TypeId>, targets: Vec<TypeId>) -> Self {
        debug_assert_eq!(sources.len(), targets.len());
        Self { sources, targets }
    }

    /// Substitutes `candidate` if it appears in `sources`, by index
    /// identity (the nanots equivalent of the reference compiler's
    /// pointer-identity scan).
    #[must_use]
    pub fn substitute(&self, candidate: TypeId) -> Option<TypeId> {
        self.sources
            .iter()
            .position(|&s| s == candidate)
            .map(|i| self.targets[i])
    }
}
