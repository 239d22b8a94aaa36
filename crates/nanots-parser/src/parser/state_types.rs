use super::state::ParserState;
use crate::ast::NodeKind;
use nanots_common::{DiagnosticSink, NodeId};
use nanots_scanner::SyntaxKind;

impl<'a> ParserState<'a> {
    /// `Type := Identifier | ObjectLiteralType | SignatureType`.
    pub(crate) fn parse_type(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let pos = self.scanner.token_pos();
        match self.token {
            SyntaxKind::OpenBraceToken => self.parse_object_literal_type(diagnostics),
            SyntaxKind::LessThanToken | SyntaxKind::OpenParenToken => {
                self.parse_signature_type(diagnostics)
            }
            SyntaxKind::Identifier => {
                let text = self.scanner.token_text().to_string();
                self.next_token(diagnostics);
                self.ast.push(NodeKind::Identifier { text }, pos)
            }
            _ => {
                diagnostics.add(
                    pos,
                    format!("Expected a type but found {}.", self.token.describe()),
                );
                self.ast.push(NodeKind::Identifier { text: String::new() }, pos)
            }
        }
    }

    fn parse_object_literal_type(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let pos = self.scanner.token_pos();
        self.next_token(diagnostics); // '{'
        let mut properties = Vec::new();
        while !self.at(SyntaxKind::CloseBraceToken) && !self.at(SyntaxKind::EndOfFile) {
            let prop_pos = self.scanner.token_pos();
            let name = self.parse_identifier_name(diagnostics);
            let typename = if self.at(SyntaxKind::ColonToken) {
                self.next_token(diagnostics);
                Some(self.parse_type(diagnostics))
            } else {
                None
            };
            properties.push(
                self.ast
                    .push(NodeKind::PropertyDeclaration { name, typename }, prop_pos),
            );
            if self.at(SyntaxKind::CommaToken) {
                self.next_token(diagnostics);
            } else {
                break;
            }
        }
        self.expect(SyntaxKind::CloseBraceToken, diagnostics);
        self.ast.push(NodeKind::ObjectLiteralType { properties }, pos)
    }

    fn parse_signature_type(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let pos = self.scanner.token_pos();
        let type_parameters = self.parse_optional_type_parameter_list(diagnostics);
        self.expect(SyntaxKind::OpenParenToken, diagnostics);
        let parameters = self.parse_parameter_list(diagnostics);
        self.expect(SyntaxKind::CloseParenToken, diagnostics);
        self.expect(SyntaxKind::EqualsGreaterThanToken, diagnostics);
        let typename = self.parse_type(diagnostics);
        self.ast.push(
            NodeKind::Signature {
                type_parameters,
                parameters,
                typename,
            },
            pos,
        )
    }

    pub(crate) fn parse_optional_type_parameter_list(
        &mut self,
        diagnostics: &mut DiagnosticSink,
    ) -> Vec<NodeId> {
        if !self.at(SyntaxKind::LessThanToken) {
            return Vec::new();
        }
        self.next_token(diagnostics);
        let mut type_parameters = Vec::new();
        if !self.at(SyntaxKind::GreaterThanToken) {
            type_parameters.push(self.parse_type_parameter(diagnostics));
            while self.at(SyntaxKind::CommaToken) {
                self.next_token(diagnostics);
                if self.at(SyntaxKind::GreaterThanToken) {
                    break;
                }
                type_parameters.push(self.parse_type_parameter(diagnostics));
            }
        }
        self.expect(SyntaxKind::GreaterThanToken, diagnostics);
        type_parameters
    }

    fn parse_type_parameter(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let pos = self.scanner.token_pos();
        let name = self.parse_identifier_name(diagnostics);
        self.ast.push(NodeKind::TypeParameter { name }, pos)
    }

    pub(crate) fn parse_parameter_list(&mut self, diagnostics: &mut DiagnosticSink) -> Vec<NodeId> {
        let mut parameters = Vec::new();
        if !self.at(SyntaxKind::CloseParenToken) {
            parameters.push(self.parse_parameter(diagnostics));
            while self.at(SyntaxKind::CommaToken) {
                self.next_token(diagnostics);
                if self.at(SyntaxKind::CloseParenToken) {
                    break;
                }
                parameters.push(self.parse_parameter(diagnostics));
            }
        }
        parameters
    }

    fn parse_parameter(&mut self, diagnostics: &mut DiagnosticSink) -> NodeId {
        let pos = self.scanner.token_pos();
        let name = self.parse_identifier_name(diagnostics);
        let typename = if self.at(SyntaxKind::ColonToken) {
            self.next_token(diagnostics);
            Some(self.parse_type(diagnostics))
        } else {
            None
        };
        self.ast.push(NodeKind::Parameter { name, typename }, pos)
    }
}
