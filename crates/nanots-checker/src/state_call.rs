use crate::state::CheckerState;
use nanots_common::{Mapper, NodeId, TypeId};
use nanots_parser::NodeKind;
use nanots_solver::{infer_type_arguments, instantiate_signature, is_assignable_to, type_to_string, Type};

impl<'a> CheckerState<'a> {
    /// `checkCall`, SPEC_FULL.md §4.7.
    pub(crate) fn check_call(&mut self, id: NodeId) -> TypeId {
        let (expression, type_arguments, arguments) = match self.ast.kind(id).clone() {
            NodeKind::Call {
                expression,
                type_arguments,
                arguments,
            } => (expression, type_arguments, arguments),
            _ => unreachable!(),
        };

        let callee_type = self.check_expression(expression);
        let mut signature = match self.types.get(callee_type).clone() {
            Type::Function(signature) => signature,
            _ => {
                let t = type_to_string(&mut self.symbols, &mut self.types, callee_type);
                tracing::trace!(ty = %t, "call target is not a function type");
                self.diagnostics
                    .add(self.ast.pos(expression), format!("Cannot call expression of type '{t}'."));
                return self.types.error_type();
            }
        };

        let argument_types: Vec<TypeId> = arguments.iter().map(|&arg| self.check_expression(arg)).collect();

        if !signature.type_parameters.is_empty() {
            let type_parameter_ids: Vec<TypeId> = signature
                .type_parameters
                .iter()
                .map(|&tp| self.get_type_type_of_symbol(tp))
                .collect();
            let type_argument_ids: Vec<TypeId> = match type_arguments {
                None => infer_type_arguments(&mut self.symbols, &mut self.types, &type_parameter_ids, &signature.parameters, &argument_types),
                Some(supplied) if supplied.len() != type_parameter_ids.len() => {
                    self.diagnostics.add(
                        self.ast.pos(id),
                        format!(
                            "Expected {} type arguments, but got {}.",
                            type_parameter_ids.len(),
                            supplied.len()
                        ),
                    );
                    type_parameter_ids.iter().map(|_| self.types.any_type()).collect()
                }
                Some(supplied) => supplied.into_iter().map(|t| self.check_type(t)).collect(),
            };
            let mapper = Mapper::new(type_parameter_ids, type_argument_ids);
            signature = instantiate_signature(&mut self.symbols, &mut self.types, &signature, &mapper);
        }

        if signature.parameters.len() != arguments.len() {
            self.diagnostics.add(
                self.ast.pos(expression),
                format!("Expected {} arguments, but got {}.", signature.parameters.len(), arguments.len()),
            );
        }

        let checked = argument_types.len().min(signature.parameters.len());
        for i in 0..checked {
            let parameter_type = self.get_value_type_of_symbol(signature.parameters[i]);
            if !is_assignable_to(&mut self.symbols, &mut self.types, argument_types[i], parameter_type) {
                let p = type_to_string(&mut self.symbols, &mut self.types, parameter_type);
                let a = type_to_string(&mut self.symbols, &mut self.types, argument_types[i]);
                self.diagnostics
                    .add(self.ast.pos(arguments[i]), format!("Expected argument of type '{p}', but got '{a}'."));
            }
        }

        signature.return_type
    }
}
