use crate::ast::AstBuilder;
use nanots_common::DiagnosticSink;
use nanots_scanner::{Scanner, SyntaxKind};

/// The parser's mutable state. Impl blocks for this struct are split
/// across `state_statements.rs`, `state_expressions.rs`, and
/// `state_types.rs` by grammar concern, plus the token-handling
/// helpers in this file.
pub struct ParserState<'a> {
    pub(crate) scanner: Scanner<'a>,
    pub(crate) ast: AstBuilder,
    pub(crate) token: SyntaxKind,
}

impl<'a> ParserState<'a> {
    pub(crate) fn new(source: &'a str, diagnostics: &mut DiagnosticSink) -> Self {
        let mut scanner = Scanner::new(source);
        let token = scanner.scan(diagnostics);
        Self {
            scanner,
            ast: crate::ast::Ast::new(),
            token,
        }
    }

    pub(crate) fn next_token(&mut self, diagnostics: &mut DiagnosticSink) {
        self.token = self.scanner.scan(diagnostics);
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.token == kind
    }

    /// Consumes the current token if it matches `kind`, else records a
    /// diagnostic and leaves the cursor in place for recovery.
    pub(crate) fn expect(&mut self, kind: SyntaxKind, diagnostics: &mut DiagnosticSink) -> bool {
        if self.at(kind) {
            self.next_token(diagnostics);
            true
        } else {
            diagnostics.add(
                self.scanner.token_pos(),
                format!(
                    "Expected {} but found {}.",
                    kind.describe(),
                    self.token.describe()
                ),
            );
            false
        }
    }

    /// Error recovery: skip tokens until a statement boundary (`;`,
    /// `}`, a statement-starting keyword, or end of file) so one bad
    /// statement does not poison the rest of the parse.
    pub(crate) fn recover_to_statement_boundary(&mut self, diagnostics: &mut DiagnosticSink) {
        loop {
            match self.token {
                SyntaxKind::SemicolonToken => {
                    self.next_token(diagnostics);
                    return;
                }
                SyntaxKind::CloseBraceToken
                | SyntaxKind::VarKeyword
                | SyntaxKind::TypeKeyword
                | SyntaxKind::ReturnKeyword
                | SyntaxKind::EndOfFile => return,
                _ => self.next_token(diagnostics),
            }
        }
    }
}
