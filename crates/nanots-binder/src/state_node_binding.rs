//! Single pre-order walk over the AST. For every node it sets `parent`
//! on each child, and for every declaring node it calls `declareSymbol`
//! into whichever table is in scope. Expressions and types never
//! resolve names here — that is the checker's job, once every scope's
//! table is complete.

use crate::state::{BinderState, Container};
use nanots_common::{DiagnosticSink, Meaning, NodeId};
use nanots_parser::NodeKind;

impl<'a> BinderState<'a> {
    pub(crate) fn bind_module(&mut self, diagnostics: &mut DiagnosticSink) {
        let module = self.ast.root;
        let statements = self.ast.module_statements().to_vec();
        let container = Container::Scope(module);
        for stmt in statements {
            self.set_parent(stmt, module);
            self.bind_statement(stmt, container, diagnostics);
        }
    }

    fn bind_statement(&mut self, id: NodeId, container: Container, diagnostics: &mut DiagnosticSink) {
        match self.ast.kind(id).clone() {
            NodeKind::Var {
                name,
                typename,
                initializer,
            } => {
                let text = identifier_text(self.ast, name);
                self.declare_symbol(container, &text, Meaning::Value, id, true, diagnostics);
                self.set_parent(name, id);
                self.set_parent(initializer, id);
                self.bind_expression(initializer, container, diagnostics);
                if let Some(t) = typename {
                    self.set_parent(t, id);
                    self.bind_type(t, container, diagnostics);
                }
            }
            NodeKind::TypeAlias { name, typename } => {
                let text = identifier_text(self.ast, name);
                self.declare_symbol(container, &text, Meaning::Type, id, false, diagnostics);
                self.set_parent(name, id);
                self.set_parent(typename, id);
                self.bind_type(typename, container, diagnostics);
            }
            NodeKind::ExpressionStatement { expression } => {
                self.set_parent(expression, id);
                self.bind_expression(expression, container, diagnostics);
            }
            NodeKind::Return { expression } => {
                self.set_parent(expression, id);
                self.bind_expression(expression, container, diagnostics);
            }
            other => unreachable!("not a statement: {}", other.describe()),
        }
    }

    pub(crate) fn bind_expression(&mut self, id: NodeId, container: Container, diagnostics: &mut DiagnosticSink) {
        match self.ast.kind(id).clone() {
            NodeKind::Identifier { .. } | NodeKind::NumericLiteral { .. } | NodeKind::StringLiteral { .. } => {}
            NodeKind::Assignment { name, value } => {
                self.set_parent(name, id);
                self.set_parent(value, id);
                self.bind_expression(value, container, diagnostics);
            }
            NodeKind::Object { .. } => self.bind_object(id, container, diagnostics),
            NodeKind::Function { .. } => self.bind_function(id, container, diagnostics),
            NodeKind::Call {
                expression,
                type_arguments,
                arguments,
            } => {
                self.set_parent(expression, id);
                self.bind_expression(expression, container, diagnostics);
                for ta in type_arguments.into_iter().flatten() {
                    self.set_parent(ta, id);
                    self.bind_type(ta, container, diagnostics);
                }
                for arg in arguments {
                    self.set_parent(arg, id);
                    self.bind_expression(arg, container, diagnostics);
                }
            }
            other => unreachable!("not an expression: {}", other.describe()),
        }
    }

    /// An `Object` literal gets its own anonymous symbol to hold a
    /// `members` table; the object is never itself named, so nothing
    /// files it into `container`'s table.
    fn bind_object(&mut self, id: NodeId, container: Container, diagnostics: &mut DiagnosticSink) {
        let properties = match self.ast.kind(id).clone() {
            NodeKind::Object { properties } => properties,
            _ => unreachable!(),
        };
        let object_symbol = self.symbols.declare("__object".to_string());
        self.ast.set_symbol(id, object_symbol);
        let members = Container::Members(object_symbol);
        for prop in properties {
            let (name, initializer) = match self.ast.kind(prop).clone() {
                NodeKind::PropertyAssignment { name, initializer } => (name, initializer),
                other => unreachable!("object property is {}", other.describe()),
            };
            self.set_parent(prop, id);
            let text = identifier_text(self.ast, name);
            self.declare_symbol(members, &text, Meaning::Value, prop, true, diagnostics);
            self.set_parent(name, prop);
            self.set_parent(initializer, prop);
            self.bind_expression(initializer, container, diagnostics);
        }
    }

    /// A `Function`'s type parameters and parameters live in its own
    /// scope; if the function has a name it is declared in that same
    /// scope (not the enclosing one) so the body can call itself
    /// recursively, matching how `var` cannot see a function's own name.
    fn bind_function(&mut self, id: NodeId, outer: Container, diagnostics: &mut DiagnosticSink) {
        let (name, type_parameters, parameters, typename, body) = match self.ast.kind(id).clone() {
            NodeKind::Function {
                name,
                type_parameters,
                parameters,
                typename,
                body,
            } => (name, type_parameters, parameters, typename, body),
            _ => unreachable!(),
        };
        let own_scope = Container::Scope(id);

        if let Some(name) = name {
            let text = identifier_text(self.ast, name);
            self.declare_symbol(own_scope, &text, Meaning::Value, id, true, diagnostics);
            self.set_parent(name, id);
        } else {
            // A bare function expression is never filed into a table,
            // but it still needs a symbol of its own so
            // `checkExpression(Function)` has something to dispatch
            // `getValueTypeOfSymbol` on.
            let anon = self.symbols.declare("__function".to_string());
            self.symbols.add_declaration(anon, id, true);
            self.ast.set_symbol(id, anon);
        }

        for tp in &type_parameters {
            let text = match self.ast.kind(*tp).clone() {
                NodeKind::TypeParameter { name } => identifier_text(self.ast, name),
                other => unreachable!("type parameter is {}", other.describe()),
            };
            self.declare_symbol(own_scope, &text, Meaning::Type, *tp, false, diagnostics);
            self.set_parent(*tp, id);
        }

        for param in &parameters {
            let (pname, ptype) = match self.ast.kind(*param).clone() {
                NodeKind::Parameter { name, typename } => (name, typename),
                other => unreachable!("parameter is {}", other.describe()),
            };
            let text = identifier_text(self.ast, pname);
            self.declare_symbol(own_scope, &text, Meaning::Value, *param, true, diagnostics);
            self.set_parent(pname, *param);
            self.set_parent(*param, id);
            if let Some(t) = ptype {
                self.set_parent(t, *param);
                self.bind_type(t, own_scope, diagnostics);
            }
        }

        if let Some(t) = typename {
            self.set_parent(t, id);
            self.bind_type(t, own_scope, diagnostics);
        }

        for stmt in body {
            self.set_parent(stmt, id);
            self.bind_statement(stmt, own_scope, diagnostics);
        }

        let _ = outer;
    }

    pub(crate) fn bind_type(&mut self, id: NodeId, container: Container, diagnostics: &mut DiagnosticSink) {
        match self.ast.kind(id).clone() {
            NodeKind::Identifier { .. } => {}
            NodeKind::ObjectLiteralType { .. } => self.bind_object_literal_type(id, container, diagnostics),
            NodeKind::Signature { .. } => self.bind_signature(id, container, diagnostics),
            other => unreachable!("not a type: {}", other.describe()),
        }
    }

    fn bind_object_literal_type(&mut self, id: NodeId, container: Container, diagnostics: &mut DiagnosticSink) {
        let properties = match self.ast.kind(id).clone() {
            NodeKind::ObjectLiteralType { properties } => properties,
            _ => unreachable!(),
        };
        let type_symbol = self.symbols.declare("__objectType".to_string());
        self.ast.set_symbol(id, type_symbol);
        let members = Container::Members(type_symbol);
        for prop in properties {
            let (name, typename) = match self.ast.kind(prop).clone() {
                NodeKind::PropertyDeclaration { name, typename } => (name, typename),
                other => unreachable!("object type property is {}", other.describe()),
            };
            self.set_parent(prop, id);
            let text = identifier_text(self.ast, name);
            self.declare_symbol(members, &text, Meaning::Value, prop, true, diagnostics);
            self.set_parent(name, prop);
            if let Some(t) = typename {
                self.set_parent(t, prop);
                self.bind_type(t, container, diagnostics);
            }
        }
    }

    /// A `Signature` type node carries its own symbol (never filed into
    /// any table) so `checkType` can dispatch `getTypeTypeOfSymbol` on it
    /// the same way it would for a named type alias.
    fn bind_signature(&mut self, id: NodeId, outer: Container, diagnostics: &mut DiagnosticSink) {
        let (type_parameters, parameters, typename) = match self.ast.kind(id).clone() {
            NodeKind::Signature {
                type_parameters,
                parameters,
                typename,
            } => (type_parameters, parameters, typename),
            _ => unreachable!(),
        };
        let own_scope = Container::Scope(id);

        let sig_symbol = self.symbols.declare("__signature".to_string());
        self.symbols.add_declaration(sig_symbol, id, false);
        self.ast.set_symbol(id, sig_symbol);

        for tp in &type_parameters {
            let text = match self.ast.kind(*tp).clone() {
                NodeKind::TypeParameter { name } => identifier_text(self.ast, name),
                other => unreachable!("type parameter is {}", other.describe()),
            };
            self.declare_symbol(own_scope, &text, Meaning::Type, *tp, false, diagnostics);
            self.set_parent(*tp, id);
        }

        for param in &parameters {
            let (pname, ptype) = match self.ast.kind(*param).clone() {
                NodeKind::Parameter { name, typename } => (name, typename),
                other => unreachable!("parameter is {}", other.describe()),
            };
            let text = identifier_text(self.ast, pname);
            self.declare_symbol(own_scope, &text, Meaning::Value, *param, true, diagnostics);
            self.set_parent(pname, *param);
            self.set_parent(*param, id);
            if let Some(t) = ptype {
                self.set_parent(t, *param);
                self.bind_type(t, own_scope, diagnostics);
            }
        }

        self.set_parent(typename, id);
        self.bind_type(typename, own_scope, diagnostics);

        let _ = outer;
    }
}

fn identifier_text(ast: &nanots_parser::Ast, id: NodeId) -> String {
    match ast.kind(id) {
        NodeKind::Identifier { text } => text.clone(),
        other => unreachable!("expected identifier, found {}", other.describe()),
    }
}
