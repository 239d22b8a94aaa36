//! The transformed tree `strip` produces. Deliberately smaller than
//! the parser's `NodeKind`: every field a `TypeNode` ever occupied is
//! gone, and `TypeAlias` has no counterpart at all.

#[derive(Debug, Clone)]
pub enum EmitNode {
    Var {
        name: String,
        initializer: Box<EmitNode>,
    },
    ExpressionStatement {
        expression: Box<EmitNode>,
    },
    Return {
        expression: Box<EmitNode>,
    },
    Identifier(String),
    NumericLiteral(f64),
    StringLiteral(String),
    Assignment {
        name: String,
        value: Box<EmitNode>,
    },
    Object {
        properties: Vec<(String, EmitNode)>,
    },
    Function {
        name: Option<String>,
        parameters: Vec<String>,
        body: Vec<EmitNode>,
    },
    Call {
        expression: Box<EmitNode>,
        arguments: Vec<EmitNode>,
    },
}
