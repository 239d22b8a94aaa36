//! `resolve`: walks a node's `parent` chain outward, stopping at the
//! first scope-owning ancestor (inclusive of the starting node) whose
//! table has a binding for `name` under `meaning`.

use crate::state::BindResult;
use crate::symbol::{SymbolArena, Table};
use nanots_common::{Meaning, NodeId, SymbolId};
use nanots_parser::{Ast, NodeKind};
use rustc_hash::FxHashMap;

fn owning_table<'r>(
    ast: &Ast,
    scopes: &'r FxHashMap<NodeId, Table>,
    symbols: &'r SymbolArena,
    node: NodeId,
) -> Option<&'r Table> {
    match ast.kind(node) {
        NodeKind::Module { .. } | NodeKind::Function { .. } | NodeKind::Signature { .. } => {
            scopes.get(&node)
        }
        NodeKind::Object { .. } | NodeKind::ObjectLiteralType { .. } => {
            let symbol = ast.symbol(node)?;
            symbols.get(symbol).members.as_ref()
        }
        _ => None,
    }
}

/// Finds the symbol `name` refers to, in `meaning`, as seen from
/// `location`. Returns `None` when no enclosing scope binds the name —
/// the checker turns that into a "Could not resolve" diagnostic. Takes
/// its inputs as separate borrows (rather than a single `&BindResult`)
/// so a caller that also holds a `&mut SymbolArena` elsewhere (the
/// checker, instantiating generics) can still call this with a plain
/// reborrow.
#[must_use]
pub fn resolve_in(
    ast: &Ast,
    scopes: &FxHashMap<NodeId, Table>,
    symbols: &SymbolArena,
    location: NodeId,
    name: &str,
    meaning: Meaning,
) -> Option<SymbolId> {
    let mut current = location;
    loop {
        if let Some(table) = owning_table(ast, scopes, symbols, current) {
            if let Some(id) = table.get(name, meaning) {
                return Some(id);
            }
        }
        match ast.parent(current) {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Convenience wrapper over `resolve_in` for callers (tests, and the
/// binder's own diagnostics) that already have a whole `BindResult`.
#[must_use]
pub fn resolve(ast: &Ast, result: &BindResult, location: NodeId, name: &str, meaning: Meaning) -> Option<SymbolId> {
    resolve_in(ast, &result.scopes, &result.symbols, location, name, meaning)
}
