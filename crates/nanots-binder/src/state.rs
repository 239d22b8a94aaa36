use crate::symbol::{SymbolArena, Table};
use nanots_common::{DiagnosticSink, NodeId};
use nanots_parser::Ast;
use rustc_hash::FxHashMap;

/// Where a declaration gets filed. `Scope` covers `Module`/`Function`/
/// `Signature`, which own a `locals` table keyed by their own `NodeId`.
/// `Members` covers `Object`/`ObjectLiteralType`, whose table lives on
/// their own symbol rather than on the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Container {
    Scope(NodeId),
    Members(nanots_common::SymbolId),
}

/// Output of one binding pass: the symbol arena and every scope's
/// `locals` table. `Object`/`ObjectLiteralType` member tables are not
/// here — they live on the owning `Symbol` in `symbols`.
pub struct BindResult {
    pub symbols: SymbolArena,
    pub scopes: FxHashMap<NodeId, Table>,
}

pub(crate) struct BinderState<'a> {
    pub(crate) ast: &'a Ast,
    pub(crate) symbols: SymbolArena,
    pub(crate) scopes: FxHashMap<NodeId, Table>,
}

impl<'a> BinderState<'a> {
    pub(crate) fn new(ast: &'a Ast) -> Self {
        BinderState {
            ast,
            symbols: SymbolArena::new(),
            scopes: FxHashMap::default(),
        }
    }

    pub(crate) fn finish(self) -> BindResult {
        BindResult {
            symbols: self.symbols,
            scopes: self.scopes,
        }
    }

    pub(crate) fn set_parent(&self, child: NodeId, parent: NodeId) {
        self.ast.set_parent(child, parent);
    }
}

/// Binds `ast`, producing a symbol arena and every scope's table.
/// Records a diagnostic for each redeclaration (same name, same meaning,
/// same table) it encounters; see SPEC_FULL.md §4.1.
#[must_use]
pub fn bind(ast: &Ast, diagnostics: &mut DiagnosticSink) -> BindResult {
    let mut state = BinderState::new(ast);
    state.bind_module(diagnostics);
    state.finish()
}
