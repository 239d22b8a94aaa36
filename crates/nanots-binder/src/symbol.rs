//! Symbols, scope tables, and the arena that owns them.
//!
//! A `Symbol` is the thing a name resolves to: it aggregates every
//! declaration that shares a name within one scope (so a later
//! `checkBody` can see both a `Var` and whichever `Function` shadows
//! it are actually two different symbols, never the same one — nanots
//! has no declaration merging). The binder allocates one `Symbol` per
//! distinct (container, name, meaning) triple; the solver and checker
//! allocate further synthetic symbols into the same arena when they
//! instantiate a generic.

use indexmap::IndexMap;
use nanots_common::{Mapper, Meaning, NodeId, SymbolId, TypeId};
use std::cell::Cell;

/// A scope's name bindings, split into a value namespace and a type
/// namespace the way `var x` and `type x` never collide. Each namespace
/// is an `IndexMap` rather than a `HashMap`: `Object` type-to-string
/// rendering lists members in declaration order.
#[derive(Debug, Default, Clone)]
pub struct Table {
    values: IndexMap<String, SymbolId>,
    types: IndexMap<String, SymbolId>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str, meaning: Meaning) -> Option<SymbolId> {
        match meaning {
            Meaning::Value => self.values.get(name).copied(),
            Meaning::Type => self.types.get(name).copied(),
        }
    }

    pub(crate) fn insert(&mut self, name: String, meaning: Meaning, id: SymbolId) {
        match meaning {
            Meaning::Value => self.values.insert(name, id),
            Meaning::Type => self.types.insert(name, id),
        };
    }

    /// Value-namespace entries in declaration order. Used to render an
    /// `Object`/`ObjectLiteralType`'s members when stringifying its type.
    pub fn values_in_order(&self) -> impl Iterator<Item = (&str, SymbolId)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

#[derive(Debug)]
pub struct Symbol {
    pub name: String,
    /// Every declaration node that contributed to this symbol, in the
    /// order the binder visited them.
    pub declarations: Vec<NodeId>,
    /// The declaration `getValueTypeOfSymbol` computes from, when this
    /// symbol has a value meaning. `Var`/`Function`/`Parameter`/
    /// `PropertyAssignment` declarations set this; `TypeAlias` does not.
    pub value_declaration: Option<NodeId>,
    /// Populated only for symbols that own a nested scope: `Object` and
    /// `ObjectLiteralType` literals, keyed by property name.
    pub members: Option<Table>,
    /// Memoized by the checker. A `Cell` because the checker only ever
    /// holds `&Symbol` once binding has finished.
    pub value_type: Cell<Option<TypeId>>,
    pub type_type: Cell<Option<TypeId>>,
    /// Set only on symbols synthesized by generic instantiation: the
    /// symbol this one was copied from, and the substitution applied.
    pub target: Option<SymbolId>,
    pub mapper: Option<Mapper>,
}

impl Symbol {
    fn new(name: String) -> Self {
        Symbol {
            name,
            declarations: Vec::new(),
            value_declaration: None,
            members: None,
            value_type: Cell::new(None),
            type_type: Cell::new(None),
            target: None,
            mapper: None,
        }
    }
}

/// Owns every `Symbol` produced by binding, plus the ones the solver
/// instantiates later. `SymbolId`s stay valid once issued; instantiated
/// symbols are appended, never inserted.
#[derive(Debug, Default)]
pub struct SymbolArena {
    symbols: Vec<Symbol>,
}

impl SymbolArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0 as usize]
    }

    /// Creates a fresh symbol with no declarations yet.
    pub fn declare(&mut self, name: String) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Symbol::new(name));
        id
    }

    pub(crate) fn add_declaration(&mut self, id: SymbolId, node: NodeId, is_value_declaration: bool) {
        let symbol = &mut self.symbols[id.0 as usize];
        symbol.declarations.push(node);
        if is_value_declaration {
            symbol.value_declaration = Some(node);
        }
    }

    /// The members table of an `Object`/`ObjectLiteralType` symbol,
    /// creating an empty one on first property.
    pub(crate) fn members_table_mut(&mut self, id: SymbolId) -> &mut Table {
        self.symbols[id.0 as usize].members.get_or_insert_with(Table::new)
    }

    /// Appends a synthetic symbol produced by instantiating `target`
    /// under `mapper`. Used by the solver/checker, never by the binder.
    pub fn instantiate(&mut self, target: SymbolId, mapper: Mapper) -> SymbolId {
        let source = self.get(target);
        let mut copy = Symbol::new(source.name.clone());
        copy.declarations = source.declarations.clone();
        copy.value_declaration = source.value_declaration;
        copy.members = source.members.clone();
        copy.target = Some(target);
        copy.mapper = Some(mapper);
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(copy);
        id
    }

    /// Builds a fresh anonymous symbol carrying a `members` table whose
    /// entries are each `instantiate`-d from `source_members` under
    /// `mapper`. This is the checker's `instantiateType` on an `Object`
    /// type: the resulting symbol is never filed into any scope's
    /// table, only referenced by the `Type::Object` that owns it.
    pub fn instantiate_object(&mut self, source_members: &Table, mapper: &Mapper) -> SymbolId {
        let entries: Vec<(String, SymbolId)> = source_members
            .values_in_order()
            .map(|(name, id)| (name.to_string(), id))
            .collect();
        let container = self.declare("__object".to_string());
        for (name, member) in entries {
            let instantiated = self.instantiate(member, mapper.clone());
            self.members_table_mut(container).insert(name, Meaning::Value, instantiated);
        }
        container
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
