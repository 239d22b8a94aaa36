use crate::state::CheckerState;
use nanots_common::{InternalError, NodeId, TypeId};
use nanots_parser::NodeKind;
use nanots_solver::{is_assignable_to, type_to_string};

impl<'a> CheckerState<'a> {
    pub(crate) fn check_statement(&mut self, id: NodeId) -> TypeId {
        match self.ast.kind(id).clone() {
            NodeKind::ExpressionStatement { expression } => self.check_expression(expression),
            NodeKind::Var { typename, initializer, .. } => {
                let initializer_type = self.check_expression(initializer);
                match typename {
                    None => initializer_type,
                    Some(t) => {
                        let declared_type = self.check_type(t);
                        if !is_assignable_to(&mut self.symbols, &mut self.types, initializer_type, declared_type) {
                            let i = type_to_string(&mut self.symbols, &mut self.types, initializer_type);
                            let d = type_to_string(&mut self.symbols, &mut self.types, declared_type);
                            self.diagnostics.add(
                                self.ast.pos(initializer),
                                format!("Cannot assign initialiser of type '{i}' to variable with declared type '{d}'."),
                            );
                        }
                        declared_type
                    }
                }
            }
            NodeKind::TypeAlias { typename, .. } => self.check_type(typename),
            NodeKind::Return { expression } => self.check_expression(expression),
            other => panic!("{}", InternalError::UnreachableKind { dispatcher: other.describe() }),
        }
    }
}
