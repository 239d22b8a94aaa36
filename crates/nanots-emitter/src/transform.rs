//! `strip`, SPEC_FULL.md §4.13. A pure syntactic rewrite keyed only on
//! node kind: it never consults a symbol table and never re-checks
//! anything, so it takes a plain `&Ast` rather than a `CheckResult`.

use crate::tree::EmitNode;
use nanots_common::NodeId;
use nanots_parser::{Ast, NodeKind};

/// Strips every `Var`/`Parameter`/`Function` type annotation and drops
/// `TypeAlias` statements entirely, in source order.
#[must_use]
pub fn strip(ast: &Ast, statements: &[NodeId]) -> Vec<EmitNode> {
    statements.iter().filter_map(|&id| strip_statement(ast, id)).collect()
}

fn strip_statement(ast: &Ast, id: NodeId) -> Option<EmitNode> {
    match ast.kind(id).clone() {
        NodeKind::Var { name, initializer, .. } => Some(EmitNode::Var {
            name: identifier_text(ast, name),
            initializer: Box::new(strip_expression(ast, initializer)),
        }),
        NodeKind::TypeAlias { .. } => None,
        NodeKind::ExpressionStatement { expression } => Some(EmitNode::ExpressionStatement {
            expression: Box::new(strip_expression(ast, expression)),
        }),
        NodeKind::Return { expression } => Some(EmitNode::Return {
            expression: Box::new(strip_expression(ast, expression)),
        }),
        other => unreachable!("not a statement: {}", other.describe()),
    }
}

fn strip_expression(ast: &Ast, id: NodeId) -> EmitNode {
    match ast.kind(id).clone() {
        NodeKind::Identifier { text } => EmitNode::Identifier(text),
        NodeKind::NumericLiteral { value } => EmitNode::NumericLiteral(value),
        NodeKind::StringLiteral { value } => EmitNode::StringLiteral(value),
        NodeKind::Assignment { name, value } => EmitNode::Assignment {
            name: identifier_text(ast, name),
            value: Box::new(strip_expression(ast, value)),
        },
        NodeKind::Object { properties } => EmitNode::Object {
            properties: properties
                .into_iter()
                .map(|prop| match ast.kind(prop).clone() {
                    NodeKind::PropertyAssignment { name, initializer } => {
                        (identifier_text(ast, name), strip_expression(ast, initializer))
                    }
                    other => unreachable!("object property is {}", other.describe()),
                })
                .collect(),
        },
        NodeKind::Function {
            name, parameters, body, ..
        } => EmitNode::Function {
            name: name.map(|n| identifier_text(ast, n)),
            parameters: parameters
                .into_iter()
                .map(|p| match ast.kind(p).clone() {
                    NodeKind::Parameter { name, .. } => identifier_text(ast, name),
                    other => unreachable!("parameter is {}", other.describe()),
                })
                .collect(),
            body: strip(ast, &body),
        },
        NodeKind::Call {
            expression, arguments, ..
        } => EmitNode::Call {
            expression: Box::new(strip_expression(ast, expression)),
            arguments: arguments.into_iter().map(|a| strip_expression(ast, a)).collect(),
        },
        other => unreachable!("not an expression: {}", other.describe()),
    }
}

fn identifier_text(ast: &Ast, id: NodeId) -> String {
    match ast.kind(id) {
        NodeKind::Identifier { text } => text.clone(),
        other => unreachable!("expected identifier, found {}", other.describe()),
    }
}
