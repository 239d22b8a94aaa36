use super::state::ParserState;
use crate::ast::NodeKind;
use nanots_common::{DiagnosticSink, NodeId};
use nanots_scanner::SyntaxKind;

impl<'a> ParserState<'a> {
    pub(crate) fn parse_module(mut self, diagnostics: &mut DiagnosticSink) -> crate::ast::Ast {
        let mut statements = Vec::new();
        while !self.at(SyntaxKind::EndOfFile) {
            statements.push(self.parse_statement(diagnostics));
        }
        let module = self.ast.push(NodeKind::Module { statements }, 0);
        self.ast.finish(module)
    }

    fn consume_semicolon_if_present(&mut self, diagnostics: &mut DiagnosticSink) {
        if self.at(SyntaxKind::SemicolonToken) {
            self.next_token(diagnostics);
        }
    }

    pub(crate) fn parse_statement(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        match self.token {
            SyntaxKind::VarKeyword => self.parse_var_statement(diagnostics),
            SyntaxKind::TypeKeyword => self.parse_type_alias_statement(diagnostics),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(diagnostics),
            _ => self.parse_expression_statement(diagnostics),
        }
    }

    fn parse_var_statement(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let pos = self.scanner.token_pos();
        self.next_token(diagnostics); // 'var'
        let name = self.parse_identifier_name(diagnostics);

        let typename = if self.at(SyntaxKind::ColonToken) {
            self.next_token(diagnostics);
            Some(self.parse_type(diagnostics))
        } else {
            None
        };

        self.expect(SyntaxKind::EqualsToken, diagnostics);
        let initializer = self.parse_expression(diagnostics);
        self.consume_semicolon_if_present(diagnostics);

        self.ast.push(
            NodeKind::Var {
                name,
                typename,
                initializer,
            },
            pos,
        )
    }

    fn parse_type_alias_statement(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let pos = self.scanner.token_pos();
        self.next_token(diagnostics); // 'type'
        let name = self.parse_identifier_name(diagnostics);
        self.expect(SyntaxKind::EqualsToken, diagnostics);
        let typename = self.parse_type(diagnostics);
        self.consume_semicolon_if_present(diagnostics);

        self.ast
            .push(NodeKind::TypeAlias { name, typename }, pos)
    }

    fn parse_return_statement(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let pos = self.scanner.token_pos();
        self.next_token(diagnostics); // 'return'
        let expression = self.parse_expression(diagnostics);
        self.consume_semicolon_if_present(diagnostics);

        self.ast.push(NodeKind::Return { expression }, pos)
    }

    fn parse_expression_statement(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let pos = self.scanner.token_pos();
        if matches!(
            self.token,
            SyntaxKind::EndOfFile | SyntaxKind::CloseBraceToken
        ) {
            // Nothing left to parse here; the caller's loop condition
            // will terminate. Guard against an infinite loop on garbage.
            diagnostics.add(pos, "Expected a statement.");
            self.recover_to_statement_boundary(diagnostics);
            let placeholder = self
                .ast
                .push(NodeKind::Identifier { text: String::new() }, pos);
            return self
                .ast
                .push(NodeKind::ExpressionStatement { expression: placeholder }, pos);
        }
        let expression = self.parse_expression(diagnostics);
        self.consume_semicolon_if_present(diagnostics);

        self.ast.push(NodeKind::ExpressionStatement { expression }, pos)
    }
}
