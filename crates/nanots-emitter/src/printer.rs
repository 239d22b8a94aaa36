//! `emit`, SPEC_FULL.md §4.14. Renders an `EmitNode` tree back to
//! source text. No source maps, no `SourceWriter`: the grammar this
//! language accepts is small and fixed enough that a plain `String`
//! buffer with an indent counter covers every case.

use crate::tree::EmitNode;

const INDENT_STEP: usize = 2;

/// Joins top-level statements with `;\n`, matching how they were
/// separated on the way in.
#[must_use]
pub fn emit(statements: &[EmitNode]) -> String {
    let mut printer = Printer::new();
    printer.write_statements(statements);
    printer.out
}

struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    fn new() -> Self {
        Printer { out: String::new(), indent: 0 }
    }

    fn write_indent(&mut self) {
        self.out.push_str(&" ".repeat(self.indent));
    }

    fn write_statements(&mut self, statements: &[EmitNode]) {
        for (i, statement) in statements.iter().enumerate() {
            if i > 0 {
                self.out.push_str(";\n");
            }
            self.write_indent();
            self.write_statement(statement);
        }
    }

    fn write_statement(&mut self, node: &EmitNode) {
        match node {
            EmitNode::Var { name, initializer } => {
                self.out.push_str("var ");
                self.out.push_str(name);
                self.out.push_str(" = ");
                self.write_expression(initializer);
            }
            EmitNode::Return { expression } => {
                self.out.push_str("return ");
                self.write_expression(expression);
            }
            EmitNode::ExpressionStatement { expression } => {
                self.write_expression(expression);
            }
            other => unreachable!("not a statement: {other:?}"),
        }
    }

    fn write_expression(&mut self, node: &EmitNode) {
        match node {
            EmitNode::Identifier(text) => self.out.push_str(text),
            EmitNode::NumericLiteral(value) => self.out.push_str(&value.to_string()),
            EmitNode::StringLiteral(value) => self.write_string_literal(value),
            EmitNode::Assignment { name, value } => {
                self.out.push_str(name);
                self.out.push_str(" = ");
                self.write_expression(value);
            }
            EmitNode::Object { properties } => self.write_object(properties),
            EmitNode::Function { name, parameters, body } => self.write_function(name.as_deref(), parameters, body),
            EmitNode::Call { expression, arguments } => self.write_call(expression, arguments),
            other => unreachable!("not an expression: {other:?}"),
        }
    }

    fn write_string_literal(&mut self, value: &str) {
        self.out.push('"');
        for ch in value.chars() {
            match ch {
                '\\' => self.out.push_str("\\\\"),
                '"' => self.out.push_str("\\\""),
                '\n' => self.out.push_str("\\n"),
                '\t' => self.out.push_str("\\t"),
                '\r' => self.out.push_str("\\r"),
                other => self.out.push(other),
            }
        }
        self.out.push('"');
    }

    fn write_object(&mut self, properties: &[(String, EmitNode)]) {
        if properties.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push_str("{ ");
        for (i, (name, value)) in properties.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push_str(name);
            self.out.push_str(": ");
            self.write_expression(value);
        }
        self.out.push_str(" }");
    }

    fn write_function(&mut self, name: Option<&str>, parameters: &[String], body: &[EmitNode]) {
        self.out.push_str("function ");
        if let Some(name) = name {
            self.out.push_str(name);
        }
        self.out.push('(');
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push_str(parameter);
        }
        self.out.push_str(") {");
        if body.is_empty() {
            self.out.push('}');
            return;
        }
        self.out.push('\n');
        self.indent += INDENT_STEP;
        self.write_statements(body);
        self.out.push('\n');
        self.indent -= INDENT_STEP;
        self.write_indent();
        self.out.push('}');
    }

    fn write_call(&mut self, expression: &EmitNode, arguments: &[EmitNode]) {
        self.write_expression(expression);
        self.out.push('(');
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.write_expression(argument);
        }
        self.out.push(')');
    }
}
