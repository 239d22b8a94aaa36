mod state;
mod state_expressions;
mod state_statements;
mod state_types;

use crate::ast::Ast;
use nanots_common::DiagnosticSink;
use state::ParserState;

/// Parses `source` into an AST arena. `parent` and `symbol` are left
/// unset on every node — the binder fills them in.
#[must_use]
pub fn parse(source: &str, diagnostics: &mut DiagnosticSink) -> Ast {
    let state = ParserState::new(source, diagnostics);
    state.parse_module(diagnostics)
}
