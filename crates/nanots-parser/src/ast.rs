//! The AST arena.
//!
//! Nodes are stored in a flat `Vec` and referenced by `NodeId`, which
//! keeps the tree's addresses stable even though the binder mutates
//! `parent`/`symbol` after the parser is done. `parent` and `symbol`
//! are the only fields anyone writes after construction, so they sit
//! behind a `Cell` rather than requiring `&mut Ast` everywhere.

use nanots_common::{NodeId, Pos, SymbolId};
use std::cell::Cell;

#[derive(Debug, Clone)]
pub enum NodeKind {
    Module {
        statements: Vec<NodeId>,
    },

    // Statements
    Var {
        name: NodeId,
        typename: Option<NodeId>,
        initializer: NodeId,
    },
    TypeAlias {
        name: NodeId,
        typename: NodeId,
    },
    ExpressionStatement {
        expression: NodeId,
    },
    Return {
        expression: NodeId,
    },

    // Expressions
    Identifier {
        text: String,
    },
    NumericLiteral {
        value: f64,
    },
    StringLiteral {
        value: String,
    },
    Assignment {
        name: NodeId,
        value: NodeId,
    },
    Object {
        properties: Vec<NodeId>,
    },
    PropertyAssignment {
        name: NodeId,
        initializer: NodeId,
    },
    Function {
        name: Option<NodeId>,
        type_parameters: Vec<NodeId>,
        parameters: Vec<NodeId>,
        typename: Option<NodeId>,
        body: Vec<NodeId>,
    },
    Parameter {
        name: NodeId,
        typename: Option<NodeId>,
    },
    TypeParameter {
        name: NodeId,
    },
    Call {
        expression: NodeId,
        type_arguments: Option<Vec<NodeId>>,
        arguments: Vec<NodeId>,
    },

    // Type nodes
    ObjectLiteralType {
        properties: Vec<NodeId>,
    },
    PropertyDeclaration {
        name: NodeId,
        typename: Option<NodeId>,
    },
    Signature {
        type_parameters: Vec<NodeId>,
        parameters: Vec<NodeId>,
        typename: NodeId,
    },
}

impl NodeKind {
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            NodeKind::Module { .. } => "Module",
            NodeKind::Var { .. } => "Var",
            NodeKind::TypeAlias { .. } => "TypeAlias",
            NodeKind::ExpressionStatement { .. } => "ExpressionStatement",
            NodeKind::Return { .. } => "Return",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::NumericLiteral { .. } => "NumericLiteral",
            NodeKind::StringLiteral { .. } => "StringLiteral",
            NodeKind::Assignment { .. } => "Assignment",
            NodeKind::Object { .. } => "Object",
            NodeKind::PropertyAssignment { .. } => "PropertyAssignment",
            NodeKind::Function { .. } => "Function",
            NodeKind::Parameter { .. } => "Parameter",
            NodeKind::TypeParameter { .. } => "TypeParameter",
            NodeKind::Call { .. } => "Call",
            NodeKind::ObjectLiteralType { .. } => "ObjectLiteralType",
            NodeKind::PropertyDeclaration { .. } => "PropertyDeclaration",
            NodeKind::Signature { .. } => "Signature",
        }
    }
}

#[derive(Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub pos: Pos,
    pub parent: Cell<Option<NodeId>>,
    pub symbol: Cell<Option<SymbolId>>,
}

/// Owns every node produced by one parse. `root` is always the `Module`.
#[derive(Debug)]
pub struct Ast {
    nodes: Vec<Node>,
    pub root: NodeId,
}

impl Ast {
    pub(crate) fn new() -> AstBuilder {
        AstBuilder { nodes: Vec::new() }
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    #[must_use]
    pub fn pos(&self, id: NodeId) -> Pos {
        self.node(id).pos
    }

    pub fn set_parent(&self, id: NodeId, parent: NodeId) {
        self.node(id).parent.set(Some(parent));
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent.get()
    }

    pub fn set_symbol(&self, id: NodeId, symbol: SymbolId) {
        self.node(id).symbol.set(Some(symbol));
    }

    #[must_use]
    pub fn symbol(&self, id: NodeId) -> Option<SymbolId> {
        self.node(id).symbol.get()
    }

    #[must_use]
    pub fn module_statements(&self) -> &[NodeId] {
        match self.kind(self.root) {
            NodeKind::Module { statements } => statements,
            _ => unreachable!("root is always Module"),
        }
    }
}

/// Used only by the parser while constructing the arena.
pub(crate) struct AstBuilder {
    nodes: Vec<Node>,
}

impl AstBuilder {
    pub(crate) fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0 as usize].kind
    }

    pub(crate) fn pos(&self, id: NodeId) -> Pos {
        self.nodes[id.0 as usize].pos
    }

    pub(crate) fn push(&mut self, kind: NodeKind, pos: Pos) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            pos,
            parent: Cell::new(None),
            symbol: Cell::new(None),
        });
        id
    }

    pub(crate) fn finish(self, root: NodeId) -> Ast {
        Ast {
            nodes: self.nodes,
            root,
        }
    }
}
