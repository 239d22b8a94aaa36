//! `declareSymbol`: files one declaration into its container's table,
//! merging with an existing symbol of the same name and meaning rather
//! than ever shadowing within the same scope.

use crate::state::{BinderState, Container};
use crate::symbol::Table;
use nanots_common::{DiagnosticSink, Meaning, NodeId, SymbolId};

impl<'a> BinderState<'a> {
    fn table_mut(&mut self, container: Container) -> &mut Table {
        match container {
            Container::Scope(node) => self.scopes.entry(node).or_insert_with(Table::new),
            Container::Members(symbol) => self.symbols.members_table_mut(symbol),
        }
    }

    /// Declares `name` with the given `meaning` in `container`. A second
    /// declaration of the same name and meaning in the same table is a
    /// redeclaration: it is diagnosed at its own position, referencing
    /// where the name was first declared, but still merged into the
    /// existing symbol (the prior declaration is never removed).
    pub(crate) fn declare_symbol(
        &mut self,
        container: Container,
        name: &str,
        meaning: Meaning,
        declaring_node: NodeId,
        is_value_declaration: bool,
        diagnostics: &mut DiagnosticSink,
    ) -> SymbolId {
        let table = self.table_mut(container);
        let id = match table.get(name, meaning) {
            Some(existing) => {
                let first_pos = self
                    .symbols
                    .get(existing)
                    .declarations
                    .first()
                    .map(|&n| self.ast.pos(n))
                    .unwrap_or(0);
                diagnostics.add(
                    self.ast.pos(declaring_node),
                    format!("Cannot redeclare {name}; first declared at {first_pos}"),
                );
                existing
            }
            None => {
                let id = self.symbols.declare(name.to_string());
                self.table_mut(container).insert(name.to_string(), meaning, id);
                id
            }
        };
        self.symbols.add_declaration(id, declaring_node, is_value_declaration);
        self.ast.set_symbol(declaring_node, id);
        id
    }
}
