use crate::state::CheckerState;
use nanots_binder::resolve_in;
use nanots_common::{InternalError, Meaning, NodeId, SymbolId, TypeId};
use nanots_parser::NodeKind;
use nanots_solver::Type;

impl<'a> CheckerState<'a> {
    /// Wraps `nanots_binder::resolve_in` over this state's disjoint
    /// `scopes`/`symbols` fields — a plain `&BindResult` would not let
    /// the checker also hold `&mut self.symbols` elsewhere in the same
    /// call tree.
    pub(crate) fn resolve(&self, location: NodeId, name: &str, meaning: Meaning) -> Option<SymbolId> {
        resolve_in(self.ast, &self.scopes, &self.symbols, location, name, meaning)
    }

    pub(crate) fn check_type(&mut self, id: NodeId) -> TypeId {
        match self.ast.kind(id).clone() {
            NodeKind::Identifier { text } => match text.as_str() {
                "string" => self.types.string_type(),
                "number" => self.types.number_type(),
                _ => match self.resolve(id, &text, Meaning::Type) {
                    Some(symbol) => self.get_type_type_of_symbol(symbol),
                    None => {
                        self.diagnostics.add(self.ast.pos(id), format!("Could not resolve type {text}"));
                        self.types.error_type()
                    }
                },
            },
            NodeKind::ObjectLiteralType { .. } => self.check_object_literal_type(id),
            NodeKind::Signature { .. } => {
                let symbol = self.ast.symbol(id).unwrap_or_else(|| panic!("{}", InternalError::MissingSymbol));
                self.get_type_type_of_symbol(symbol)
            }
            other => panic!("{}", InternalError::UnreachableKind { dispatcher: other.describe() }),
        }
    }

    /// `checkObjectLiteralType`: same shape as `checkObject`, but each
    /// property drives `checkType` on its declared type (or `anyType`
    /// when absent) and the result is memoised on the node's own
    /// symbol, not allocated fresh every call.
    fn check_object_literal_type(&mut self, id: NodeId) -> TypeId {
        let symbol = self.ast.symbol(id).unwrap_or_else(|| panic!("{}", InternalError::MissingSymbol));
        if let Some(cached) = self.symbols.get(symbol).type_type.get() {
            return cached;
        }
        let properties = match self.ast.kind(id).clone() {
            NodeKind::ObjectLiteralType { properties } => properties,
            _ => unreachable!(),
        };
        for prop in properties {
            let name = match self.ast.kind(prop).clone() {
                NodeKind::PropertyDeclaration { name, .. } => name,
                other => unreachable!("object type property is {}", other.describe()),
            };
            let text = match self.ast.kind(name) {
                NodeKind::Identifier { text } => text.clone(),
                other => unreachable!("property name is {}", other.describe()),
            };
            let member = self
                .resolve(prop, &text, Meaning::Value)
                .unwrap_or_else(|| panic!("{}", InternalError::MissingSymbol));
            self.get_value_type_of_symbol(member);
        }
        let ty = self.types.alloc(Type::Object { symbol });
        self.symbols.get(symbol).type_type.set(Some(ty));
        ty
    }
}
