use super::state::ParserState;
use crate::ast::NodeKind;
use nanots_common::{DiagnosticSink, NodeId};
use nanots_scanner::SyntaxKind;

impl<'a> ParserState<'a> {
    pub(crate) fn parse_identifier_name(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let pos = self.scanner.token_pos();
        if self.at(SyntaxKind::Identifier) {
            let text = self.scanner.token_text().to_string();
            self.next_token(diagnostics);
            self.ast.push(NodeKind::Identifier { text }, pos)
        } else {
            diagnostics.add(
                pos,
                format!("Expected identifier but found {}.", self.token.describe()),
            );
            self.ast.push(NodeKind::Identifier { text: String::new() }, pos)
        }
    }

    /// `AssignmentExpression := Identifier "=" AssignmentExpression | CallExpression`.
    /// Right-associative; only a bare identifier target is accepted —
    /// anything else falls through to `CallExpression`.
    pub(crate) fn parse_expression(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let expr = self.parse_call_expression(diagnostics);
        if self.at(SyntaxKind::EqualsToken) && matches!(self.ast.kind(expr), NodeKind::Identifier { .. }) {
            let pos = self.ast.pos(expr);
            self.next_token(diagnostics);
            let value = self.parse_expression(diagnostics);
            return self.ast.push(NodeKind::Assignment { name: expr, value }, pos);
        }
        expr
    }

    fn parse_call_expression(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let start = self.scanner.token_pos();
        let mut expr = self.parse_primary_expression(diagnostics);
        loop {
            if self.at(SyntaxKind::LessThanToken) {
                self.next_token(diagnostics);
                let mut type_arguments = Vec::new();
                if !self.at(SyntaxKind::GreaterThanToken) {
                    type_arguments.push(self.parse_type(diagnostics));
                    while self.at(SyntaxKind::CommaToken) {
                        self.next_token(diagnostics);
                        if self.at(SyntaxKind::GreaterThanToken) {
                            break;
                        }
                        type_arguments.push(self.parse_type(diagnostics));
                    }
                }
                self.expect(SyntaxKind::GreaterThanToken, diagnostics);
                self.expect(SyntaxKind::OpenParenToken, diagnostics);
                let arguments = self.parse_argument_list(diagnostics);
                expr = self.ast.push(
                    NodeKind::Call {
                        expression: expr,
                        type_arguments: Some(type_arguments),
                        arguments,
                    },
                    start,
                );
            } else if self.at(SyntaxKind::OpenParenToken) {
                self.next_token(diagnostics);
                let arguments = self.parse_argument_list(diagnostics);
                expr = self.ast.push(
                    NodeKind::Call {
                        expression: expr,
                        type_arguments: None,
                        arguments,
                    },
                    start,
                );
            } else {
                break;
            }
        }
        expr
    }

    fn parse_argument_list(&mut self, diagnostics: &mut DiagnosticSink) -> Vec<NodeId> {
        let mut arguments = Vec::new();
        if !self.at(SyntaxKind::CloseParenToken) {
            arguments.push(self.parse_expression(diagnostics));
            while self.at(SyntaxKind::CommaToken) {
                self.next_token(diagnostics);
                if self.at(SyntaxKind::CloseParenToken) {
                    break;
                }
                arguments.push(self.parse_expression(diagnostics));
            }
        }
        self.expect(SyntaxKind::CloseParenToken, diagnostics);
        arguments
    }

    fn parse_primary_expression(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let pos = self.scanner.token_pos();
        match self.token {
            SyntaxKind::Identifier => {
                let text = self.scanner.token_text().to_string();
                self.next_token(diagnostics);
                self.ast.push(NodeKind::Identifier { text }, pos)
            }
            SyntaxKind::NumericLiteral => {
                let value = self.scanner.token_number_value();
                self.next_token(diagnostics);
                self.ast.push(NodeKind::NumericLiteral { value }, pos)
            }
            SyntaxKind::StringLiteral => {
                let value = self.scanner.token_string_value();
                self.next_token(diagnostics);
                self.ast.push(NodeKind::StringLiteral { value }, pos)
            }
            SyntaxKind::OpenBraceToken => self.parse_object_literal(diagnostics),
            SyntaxKind::FunctionKeyword => self.parse_function_expression(diagnostics),
            SyntaxKind::OpenParenToken => {
                self.next_token(diagnostics);
                let inner = self.parse_expression(diagnostics);
                self.expect(SyntaxKind::CloseParenToken, diagnostics);
                inner
            }
            _ => {
                diagnostics.add(
                    pos,
                    format!("Expected an expression but found {}.", self.token.describe()),
                );
                self.recover_to_statement_boundary(diagnostics);
                self.ast.push(NodeKind::Identifier { text: String::new() }, pos)
            }
        }
    }

    fn parse_object_literal(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let pos = self.scanner.token_pos();
        self.next_token(diagnostics); // '{'
        let mut properties = Vec::new();
        while !self.at(SyntaxKind::CloseBraceToken) && !self.at(SyntaxKind::EndOfFile) {
            let prop_pos = self.scanner.token_pos();
            let name = self.parse_identifier_name(diagnostics);
            self.expect(SyntaxKind::ColonToken, diagnostics);
            let initializer = self.parse_expression(diagnostics);
            properties.push(
                self.ast
                    .push(NodeKind::PropertyAssignment { name, initializer }, prop_pos),
            );
            if self.at(SyntaxKind::CommaToken) {
                self.next_token(diagnostics);
            } else {
                break;
            }
        }
        self.expect(SyntaxKind::CloseBraceToken, diagnostics);
        self.ast.push(NodeKind::Object { properties }, pos)
    }

    fn parse_function_expression(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let pos = self.scanner.token_pos();
        self.next_token(diagnostics); // 'function'
        let name = if self.at(SyntaxKind::Identifier) {
            Some(self.parse_identifier_name(diagnostics))
        } else {
            None
        };
        let type_parameters = self.parse_optional_type_parameter_list(diagnostics);
        self.expect(SyntaxKind::OpenParenToken, diagnostics);
        let parameters = self.parse_parameter_list(diagnostics);
        self.expect(SyntaxKind::CloseParenToken, diagnostics);
        let typename = if self.at(SyntaxKind::ColonToken) {
            self.next_token(diagnostics);
            Some(self.parse_type(diagnostics))
        } else {
            None
        };
        self.expect(SyntaxKind::OpenBraceToken, diagnostics);
        let mut body = Vec::new();
        while !self.at(SyntaxKind::CloseBraceToken) && !self.at(SyntaxKind::EndOfFile) {
            body.push(self.parse_statement(diagnostics));
        }
        self.expect(SyntaxKind::CloseBraceToken, diagnostics);

        self.ast.push(
            NodeKind::Function {
                name,
                type_parameters,
                parameters,
                typename,
                body,
            },
            pos,
        )
    }
}
