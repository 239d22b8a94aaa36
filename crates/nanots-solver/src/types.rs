//! The type universe. A `Type` is immutable once allocated; two types
//! are "the same type" iff their `TypeId`s compare equal, never by
//! comparing `Type` values structurally (two syntactically identical
//! object literals still get distinct ids, per SPEC_FULL.md §4.5).

use nanots_common::{Mapper, SymbolId, TypeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    /// Suppresses further diagnostics about anything it touches — the
    /// result of a prior error, not a type a user ever writes.
    Error,
    /// Assignable to and from everything. What an unannotated binding,
    /// or a generic parameter inference finds no evidence for, gets.
    Any,
}

/// A callable shape. `type_parameters` and `parameters` are *symbols*,
/// not resolved types: querying a parameter's type goes back through
/// `get_value_type_of_symbol`, so an instantiated signature's
/// parameters stay lazy until something actually asks for their type
/// (matching SPEC_FULL.md §4.8 — `instantiateSymbol` never eagerly
/// materialises a cache entry it doesn't already have).
#[derive(Debug, Clone)]
pub struct Signature {
    pub type_parameters: Vec<SymbolId>,
    pub parameters: Vec<SymbolId>,
    pub return_type: TypeId,
    /// Present only on signatures produced by `instantiate_signature`.
    pub target: Option<Box<Signature>>,
    pub mapper: Option<Mapper>,
}

impl Signature {
    #[must_use]
    pub fn new(type_parameters: Vec<SymbolId>, parameters: Vec<SymbolId>, return_type: TypeId) -> Self {
        Self {
            type_parameters,
            parameters,
            return_type,
            target: None,
            mapper: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Type {
    Primitive(Primitive),
    /// An object type's shape lives on its originating `Symbol`'s
    /// `members` table (see `nanots_binder::Symbol`), keyed by
    /// property name to a value symbol whose `value_type` gives the
    /// property's type.
    Object { symbol: SymbolId },
    Function(Signature),
    /// An unresolved type parameter. Two `TypeVariable`s are the same
    /// type only when their `TypeId`s are equal; there is no structural
    /// comparison between distinct type variables.
    TypeVariable { symbol: SymbolId, name: String },
}

impl Type {
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            Type::Primitive(Primitive::String) => "string",
            Type::Primitive(Primitive::Number) => "number",
            Type::Primitive(Primitive::Error) => "error",
            Type::Primitive(Primitive::Any) => "any",
            Type::Object { .. } => "object",
            Type::Function(_) => "function",
            Type::TypeVariable { .. } => "type variable",
        }
    }
}
