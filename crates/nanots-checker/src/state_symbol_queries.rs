use crate::state::CheckerState;
use nanots_common::{InternalError, NodeId, SymbolId, TypeId};
use nanots_parser::NodeKind;
use nanots_solver::{instantiate_type, is_assignable_to, type_to_string, Signature, Type};

impl<'a> CheckerState<'a> {
    /// `getValueTypeOfSymbol`, SPEC_FULL.md §4.10.
    pub(crate) fn get_value_type_of_symbol(&mut self, symbol: SymbolId) -> TypeId {
        if let Some(cached) = self.symbols.get(symbol).value_type.get() {
            return cached;
        }
        if let Some(target) = self.symbols.get(symbol).target {
            let mapper = self.symbols.get(symbol).mapper.clone().expect("instantiated symbol has no mapper");
            let target_type = self.get_value_type_of_symbol(target);
            let ty = instantiate_type(&mut self.symbols, &mut self.types, target_type, &mapper);
            self.symbols.get(symbol).value_type.set(Some(ty));
            return ty;
        }

        let any_type = self.types.any_type();
        let ty = self
            .guarded(symbol, |state| state.compute_value_type(symbol))
            .unwrap_or(any_type);
        self.symbols.get(symbol).value_type.set(Some(ty));
        ty
    }

    fn compute_value_type(&mut self, symbol: SymbolId) -> TypeId {
        let declaration = self
            .symbols
            .get(symbol)
            .value_declaration
            .unwrap_or_else(|| panic!("{}", InternalError::MissingValueDeclaration));
        match self.ast.kind(declaration).clone() {
            NodeKind::Var { .. } | NodeKind::TypeAlias { .. } => self.check_statement(declaration),
            NodeKind::Object { .. } => self.check_expression(declaration),
            NodeKind::PropertyAssignment { initializer, .. } => self.check_expression(initializer),
            NodeKind::PropertyDeclaration { typename, .. } => match typename {
                Some(t) => self.check_type(t),
                None => self.types.any_type(),
            },
            NodeKind::Parameter { typename, .. } => match typename {
                Some(t) => self.check_type(t),
                None => self.types.any_type(),
            },
            NodeKind::Function { .. } => self.get_type_of_function(declaration),
            other => panic!("{}", InternalError::NoProducibleType { meaning: other.describe() }),
        }
    }

    /// `getTypeOfFunction`, SPEC_FULL.md §4.10. Checks every type
    /// parameter and parameter for its side effects before building the
    /// signature, then caches the resulting `Function` type directly on
    /// `func`'s own symbol (the same symbol `getValueTypeOfSymbol`
    /// caches to right after this returns).
    pub(crate) fn get_type_of_function(&mut self, func: NodeId) -> TypeId {
        let (type_parameters, parameters, typename, body) = match self.ast.kind(func).clone() {
            NodeKind::Function {
                type_parameters,
                parameters,
                typename,
                body,
                ..
            } => (type_parameters, parameters, typename, body),
            _ => unreachable!(),
        };

        let type_parameter_symbols: Vec<SymbolId> = type_parameters
            .iter()
            .map(|&tp| self.ast.symbol(tp).unwrap_or_else(|| panic!("{}", InternalError::MissingSymbol)))
            .collect();
        for &tp in &type_parameter_symbols {
            self.get_type_type_of_symbol(tp);
        }

        let parameter_symbols: Vec<SymbolId> = parameters
            .iter()
            .map(|&p| self.ast.symbol(p).unwrap_or_else(|| panic!("{}", InternalError::MissingSymbol)))
            .collect();
        for &p in &parameter_symbols {
            self.get_value_type_of_symbol(p);
        }

        let declared_type = typename.map(|t| self.check_type(t));
        let body_type = self.check_body(&body, declared_type);
        let return_type = declared_type.unwrap_or(body_type);

        let signature = Signature::new(type_parameter_symbols, parameter_symbols, return_type);
        let ty = self.types.alloc(Type::Function(signature));
        let func_symbol = self.ast.symbol(func).unwrap_or_else(|| panic!("{}", InternalError::MissingSymbol));
        self.symbols.get(func_symbol).value_type.set(Some(ty));
        ty
    }

    /// `getTypeOfSignature`, the analogous builder for `Signature`
    /// type-nodes; unlike `getTypeOfFunction` it is not itself
    /// memoised — caching happens one level up, in
    /// `getTypeTypeOfSymbol`.
    pub(crate) fn get_type_of_signature(&mut self, decl: NodeId) -> TypeId {
        let (type_parameters, parameters, typename) = match self.ast.kind(decl).clone() {
            NodeKind::Signature {
                type_parameters,
                parameters,
                typename,
            } => (type_parameters, parameters, typename),
            _ => unreachable!(),
        };

        let type_parameter_symbols: Vec<SymbolId> = type_parameters
            .iter()
            .map(|&tp| self.ast.symbol(tp).unwrap_or_else(|| panic!("{}", InternalError::MissingSymbol)))
            .collect();
        for &tp in &type_parameter_symbols {
            self.get_type_type_of_symbol(tp);
        }

        let parameter_symbols: Vec<SymbolId> = parameters
            .iter()
            .map(|&p| self.ast.symbol(p).unwrap_or_else(|| panic!("{}", InternalError::MissingSymbol)))
            .collect();
        for &p in &parameter_symbols {
            self.get_value_type_of_symbol(p);
        }

        let return_type = self.check_type(typename);
        let signature = Signature::new(type_parameter_symbols, parameter_symbols, return_type);
        self.types.alloc(Type::Function(signature))
    }

    /// `getTypeTypeOfSymbol`, SPEC_FULL.md §4.10.
    pub(crate) fn get_type_type_of_symbol(&mut self, symbol: SymbolId) -> TypeId {
        if let Some(cached) = self.symbols.get(symbol).type_type.get() {
            return cached;
        }
        if let Some(target) = self.symbols.get(symbol).target {
            let mapper = self.symbols.get(symbol).mapper.clone().expect("instantiated symbol has no mapper");
            let target_type = self.get_type_type_of_symbol(target);
            let ty = instantiate_type(&mut self.symbols, &mut self.types, target_type, &mapper);
            self.symbols.get(symbol).type_type.set(Some(ty));
            return ty;
        }

        let any_type = self.types.any_type();
        let ty = self
            .guarded(symbol, |state| state.compute_type_type(symbol))
            .unwrap_or(any_type);
        self.symbols.get(symbol).type_type.set(Some(ty));
        ty
    }

    fn compute_type_type(&mut self, symbol: SymbolId) -> TypeId {
        let declarations = self.symbols.get(symbol).declarations.clone();
        for declaration in declarations {
            match self.ast.kind(declaration).clone() {
                NodeKind::TypeAlias { typename, .. } => return self.check_type(typename),
                NodeKind::TypeParameter { name } => {
                    let text = match self.ast.kind(name) {
                        NodeKind::Identifier { text } => text.clone(),
                        other => unreachable!("type parameter name is {}", other.describe()),
                    };
                    return self.types.alloc(Type::TypeVariable { symbol, name: text });
                }
                NodeKind::Signature { .. } => return self.get_type_of_signature(declaration),
                _ => continue,
            }
        }
        panic!("{}", InternalError::NoProducibleType { meaning: "type" })
    }

    /// `checkBody`, SPEC_FULL.md §4.10. Only the direct statements of
    /// `body` are walked; a nested `Function` expression's own body is
    /// reached later, through `checkExpression(Function)` →
    /// `getValueTypeOfSymbol` → a fresh `checkBody` call, never from
    /// here.
    pub(crate) fn check_body(&mut self, body: &[NodeId], declared_type: Option<TypeId>) -> TypeId {
        let mut first_return = None;
        for &statement in body {
            let statement_type = self.check_statement(statement);
            if matches!(self.ast.kind(statement), NodeKind::Return { .. }) {
                if first_return.is_none() {
                    first_return = Some(statement_type);
                }
                if let Some(declared) = declared_type {
                    if !is_assignable_to(&mut self.symbols, &mut self.types, statement_type, declared) {
                        let r = type_to_string(&mut self.symbols, &mut self.types, statement_type);
                        let d = type_to_string(&mut self.symbols, &mut self.types, declared);
                        self.diagnostics.add(
                            self.ast.pos(statement),
                            format!("Returned type '{r}' does not match declared return type '{d}'."),
                        );
                    }
                }
            }
        }
        first_return.unwrap_or_else(|| self.types.any_type())
    }
}
