use crate::state::CheckerState;
use nanots_common::{InternalError, Meaning, NodeId, TypeId};
use nanots_parser::NodeKind;
use nanots_solver::{is_assignable_to, type_to_string, Type};

impl<'a> CheckerState<'a> {
    pub(crate) fn check_expression(&mut self, id: NodeId) -> TypeId {
        match self.ast.kind(id).clone() {
            NodeKind::Identifier { text } => match self.resolve(id, &text, Meaning::Value) {
                Some(symbol) => self.get_value_type_of_symbol(symbol),
                None => {
                    self.diagnostics.add(self.ast.pos(id), format!("Could not resolve {text}"));
                    self.types.error_type()
                }
            },
            NodeKind::NumericLiteral { .. } => self.types.number_type(),
            NodeKind::StringLiteral { .. } => self.types.string_type(),
            NodeKind::Object { .. } => self.check_object(id),
            NodeKind::Assignment { name, value } => {
                let value_type = self.check_expression(value);
                let name_type = self.check_expression(name);
                if !is_assignable_to(&mut self.symbols, &mut self.types, value_type, name_type) {
                    let v = type_to_string(&mut self.symbols, &mut self.types, value_type);
                    let t = type_to_string(&mut self.symbols, &mut self.types, name_type);
                    self.diagnostics
                        .add(self.ast.pos(name), format!("Cannot assign value of type '{v}' to variable of type '{t}'."));
                }
                name_type
            }
            NodeKind::Function { .. } => {
                let symbol = self.ast.symbol(id).unwrap_or_else(|| panic!("{}", InternalError::MissingSymbol));
                self.get_value_type_of_symbol(symbol)
            }
            NodeKind::Call { .. } => self.check_call(id),
            other => panic!("{}", InternalError::UnreachableKind { dispatcher: other.describe() }),
        }
    }

    /// `checkObject`: every property's symbol already lives in the
    /// binder-built members table on `obj`'s own symbol, so the fresh
    /// `Object` type just reuses that symbol rather than rebuilding an
    /// equivalent table — a distinct `TypeId` each call is all §4.5
    /// requires, not a distinct `Symbol`.
    fn check_object(&mut self, id: NodeId) -> TypeId {
        let properties = match self.ast.kind(id).clone() {
            NodeKind::Object { properties } => properties,
            _ => unreachable!(),
        };
        let symbol = self.ast.symbol(id).unwrap_or_else(|| panic!("{}", InternalError::MissingSymbol));
        for prop in properties {
            let name = match self.ast.kind(prop).clone() {
                NodeKind::PropertyAssignment { name, .. } => name,
                other => unreachable!("object property is {}", other.describe()),
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
        self.types.alloc(Type::Object { symbol })
    }
}
