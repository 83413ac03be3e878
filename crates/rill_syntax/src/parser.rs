//! The recursive-descent parser.
//!
//! On a token mismatch the parser reports a diagnostic and manufactures a
//! zero-length token of the expected kind, so a single pass produces as
//! many independent diagnostics as possible.

use crate::ast::*;
use crate::kind::SyntaxKind;
use crate::lexer::Lexer;
use crate::token::SyntaxToken;
use rill_core::text::TextSpan;
use rill_core::value::Value;
use rill_diagnostics::DiagnosticBag;
use std::sync::Arc;

pub struct Parser {
    tokens: Vec<SyntaxToken>,
    position: usize,
    diagnostics: DiagnosticBag,
}

impl Parser {
    pub fn new(text: &str) -> Self {
        let (tokens, diagnostics) = Lexer::new(text).lex();
        let tokens = tokens
            .into_iter()
            .filter(|t| t.kind != SyntaxKind::BadToken)
            .collect();
        Self {
            tokens,
            position: 0,
            diagnostics,
        }
    }

    pub fn parse_compilation_unit(mut self) -> (CompilationUnitSyntax, DiagnosticBag) {
        let members = self.parse_members();
        let eof_token = self.match_token(SyntaxKind::EofToken);
        (CompilationUnitSyntax { members, eof_token }, self.diagnostics)
    }

    fn peek(&self, offset: usize) -> &SyntaxToken {
        let index = (self.position + offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    fn current(&self) -> &SyntaxToken {
        self.peek(0)
    }

    fn next_token(&mut self) -> SyntaxToken {
        let token = self.current().clone();
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
        token
    }

    fn match_token(&mut self, kind: SyntaxKind) -> SyntaxToken {
        if self.current().kind == kind {
            return self.next_token();
        }
        self.diagnostics
            .report_unexpected_token(self.current().span, self.current().kind, kind);
        SyntaxToken::new(kind, TextSpan::empty(self.current().span.start), "")
    }

    // ========================================================================
    // Members
    // ========================================================================

    fn parse_members(&mut self) -> Vec<MemberSyntax> {
        let mut members = Vec::new();
        while self.current().kind != SyntaxKind::EofToken {
            let start = self.position;
            members.push(self.parse_member());
            // If no token was consumed the statement parser got stuck on an
            // unexpected token; skip it to guarantee progress.
            if self.position == start {
                self.next_token();
            }
        }
        members
    }

    fn parse_member(&mut self) -> MemberSyntax {
        if self.current().kind == SyntaxKind::FunctionKeyword {
            MemberSyntax::Function(Arc::new(self.parse_function_declaration()))
        } else {
            MemberSyntax::GlobalStatement(GlobalStatementSyntax {
                statement: self.parse_statement(),
            })
        }
    }

    fn parse_function_declaration(&mut self) -> FunctionDeclarationSyntax {
        let function_keyword = self.match_token(SyntaxKind::FunctionKeyword);
        let identifier = self.match_token(SyntaxKind::IdentifierToken);
        let open_paren = self.match_token(SyntaxKind::OpenParenToken);
        let parameters = self.parse_parameter_list();
        let close_paren = self.match_token(SyntaxKind::CloseParenToken);
        let type_clause = self.parse_optional_type_clause();
        let body = self.parse_block_statement();
        FunctionDeclarationSyntax {
            function_keyword,
            identifier,
            open_paren,
            parameters,
            close_paren,
            type_clause,
            body,
        }
    }

    fn parse_parameter_list(&mut self) -> Vec<ParameterSyntax> {
        let mut parameters = Vec::new();
        while self.current().kind != SyntaxKind::CloseParenToken
            && self.current().kind != SyntaxKind::EofToken
        {
            let identifier = self.match_token(SyntaxKind::IdentifierToken);
            let type_clause = self.parse_type_clause();
            parameters.push(ParameterSyntax {
                identifier,
                type_clause,
            });
            if self.current().kind == SyntaxKind::CommaToken {
                self.next_token();
            } else {
                break;
            }
        }
        parameters
    }

    fn parse_optional_type_clause(&mut self) -> Option<TypeClauseSyntax> {
        if self.current().kind == SyntaxKind::ColonToken {
            Some(self.parse_type_clause())
        } else {
            None
        }
    }

    fn parse_type_clause(&mut self) -> TypeClauseSyntax {
        let colon_token = self.match_token(SyntaxKind::ColonToken);
        let identifier = self.match_token(SyntaxKind::IdentifierToken);
        TypeClauseSyntax {
            colon_token,
            identifier,
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn parse_statement(&mut self) -> StatementSyntax {
        match self.current().kind {
            SyntaxKind::OpenBraceToken => StatementSyntax::Block(self.parse_block_statement()),
            SyntaxKind::VarKeyword | SyntaxKind::LetKeyword => {
                self.parse_variable_declaration()
            }
            SyntaxKind::IfKeyword => self.parse_if_statement(),
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::DoKeyword => self.parse_do_while_statement(),
            SyntaxKind::ForKeyword => self.parse_for_statement(),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            _ => StatementSyntax::Expression(ExpressionStatementSyntax {
                expression: self.parse_expression(),
            }),
        }
    }

    fn parse_block_statement(&mut self) -> BlockStatementSyntax {
        let open_brace = self.match_token(SyntaxKind::OpenBraceToken);
        let mut statements = Vec::new();
        while self.current().kind != SyntaxKind::CloseBraceToken
            && self.current().kind != SyntaxKind::EofToken
        {
            let start = self.position;
            statements.push(self.parse_statement());
            if self.position == start {
                self.next_token();
            }
        }
        let close_brace = self.match_token(SyntaxKind::CloseBraceToken);
        BlockStatementSyntax {
            open_brace,
            statements,
            close_brace,
        }
    }

    fn parse_variable_declaration(&mut self) -> StatementSyntax {
        let keyword = self.next_token();
        let identifier = self.match_token(SyntaxKind::IdentifierToken);
        let type_clause = self.parse_optional_type_clause();
        let equals_token = self.match_token(SyntaxKind::EqualsToken);
        let initializer = self.parse_expression();
        StatementSyntax::VariableDeclaration(VariableDeclarationSyntax {
            keyword,
            identifier,
            type_clause,
            equals_token,
            initializer,
        })
    }

    fn parse_if_statement(&mut self) -> StatementSyntax {
        let if_keyword = self.match_token(SyntaxKind::IfKeyword);
        let condition = self.parse_expression();
        let then_statement = Box::new(self.parse_statement());
        let else_clause = if self.current().kind == SyntaxKind::ElseKeyword {
            let else_keyword = self.next_token();
            let else_statement = Box::new(self.parse_statement());
            Some(ElseClauseSyntax {
                else_keyword,
                else_statement,
            })
        } else {
            None
        };
        StatementSyntax::If(IfStatementSyntax {
            if_keyword,
            condition,
            then_statement,
            else_clause,
        })
    }

    fn parse_while_statement(&mut self) -> StatementSyntax {
        let while_keyword = self.match_token(SyntaxKind::WhileKeyword);
        let condition = self.parse_expression();
        let body = Box::new(self.parse_statement());
        StatementSyntax::While(WhileStatementSyntax {
            while_keyword,
            condition,
            body,
        })
    }

    fn parse_do_while_statement(&mut self) -> StatementSyntax {
        let do_keyword = self.match_token(SyntaxKind::DoKeyword);
        let body = Box::new(self.parse_statement());
        let while_keyword = self.match_token(SyntaxKind::WhileKeyword);
        let condition = self.parse_expression();
        StatementSyntax::DoWhile(DoWhileStatementSyntax {
            do_keyword,
            body,
            while_keyword,
            condition,
        })
    }

    fn parse_for_statement(&mut self) -> StatementSyntax {
        let for_keyword = self.match_token(SyntaxKind::ForKeyword);
        let identifier = self.match_token(SyntaxKind::IdentifierToken);
        let equals_token = self.match_token(SyntaxKind::EqualsToken);
        let lower_bound = self.parse_expression();
        let to_keyword = self.match_token(SyntaxKind::ToKeyword);
        let upper_bound = self.parse_expression();
        let body = Box::new(self.parse_statement());
        StatementSyntax::For(ForStatementSyntax {
            for_keyword,
            identifier,
            equals_token,
            lower_bound,
            to_keyword,
            upper_bound,
            body,
        })
    }

    fn parse_return_statement(&mut self) -> StatementSyntax {
        let return_keyword = self.match_token(SyntaxKind::ReturnKeyword);
        // A return value must start on the same logical construct; anything
        // that can begin an expression counts, everything else is a bare
        // return.
        let expression = if self.starts_expression() {
            Some(self.parse_expression())
        } else {
            None
        };
        StatementSyntax::Return(ReturnStatementSyntax {
            return_keyword,
            expression,
        })
    }

    fn starts_expression(&self) -> bool {
        matches!(
            self.current().kind,
            SyntaxKind::NumberToken
                | SyntaxKind::StringToken
                | SyntaxKind::IdentifierToken
                | SyntaxKind::TrueKeyword
                | SyntaxKind::FalseKeyword
                | SyntaxKind::OpenParenToken
                | SyntaxKind::PlusToken
                | SyntaxKind::MinusToken
                | SyntaxKind::BangToken
                | SyntaxKind::TildeToken
        )
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn parse_expression(&mut self) -> ExpressionSyntax {
        self.parse_assignment_expression()
    }

    fn parse_assignment_expression(&mut self) -> ExpressionSyntax {
        if self.current().kind == SyntaxKind::IdentifierToken
            && self.peek(1).kind == SyntaxKind::EqualsToken
        {
            let identifier = self.next_token();
            let equals_token = self.next_token();
            let expression = Box::new(self.parse_assignment_expression());
            return ExpressionSyntax::Assignment(AssignmentExpressionSyntax {
                identifier,
                equals_token,
                expression,
            });
        }
        self.parse_binary_expression(0)
    }

    fn parse_binary_expression(&mut self, parent_precedence: u8) -> ExpressionSyntax {
        let unary_precedence = self.current().kind.unary_operator_precedence();
        let mut left = if unary_precedence != 0 && unary_precedence >= parent_precedence {
            let operator = self.next_token();
            let operand = Box::new(self.parse_binary_expression(unary_precedence));
            ExpressionSyntax::Unary(UnaryExpressionSyntax { operator, operand })
        } else {
            self.parse_primary_expression()
        };

        loop {
            let precedence = self.current().kind.binary_operator_precedence();
            if precedence == 0 || precedence <= parent_precedence {
                break;
            }
            let operator = self.next_token();
            let right = Box::new(self.parse_binary_expression(precedence));
            left = ExpressionSyntax::Binary(BinaryExpressionSyntax {
                left: Box::new(left),
                operator,
                right,
            });
        }

        left
    }

    fn parse_primary_expression(&mut self) -> ExpressionSyntax {
        match self.current().kind {
            SyntaxKind::OpenParenToken => {
                let open_paren = self.next_token();
                let expression = Box::new(self.parse_expression());
                let close_paren = self.match_token(SyntaxKind::CloseParenToken);
                ExpressionSyntax::Parenthesized(ParenthesizedExpressionSyntax {
                    open_paren,
                    expression,
                    close_paren,
                })
            }
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
                let literal_token = self.next_token();
                let value = literal_token.value.clone().unwrap_or(Value::Bool(false));
                ExpressionSyntax::Literal(LiteralExpressionSyntax {
                    literal_token,
                    value,
                })
            }
            SyntaxKind::NumberToken => {
                let literal_token = self.next_token();
                let value = literal_token.value.clone().unwrap_or(Value::Int(0));
                ExpressionSyntax::Literal(LiteralExpressionSyntax {
                    literal_token,
                    value,
                })
            }
            SyntaxKind::StringToken => {
                let literal_token = self.next_token();
                let value = literal_token.value.clone().unwrap_or(Value::string(""));
                ExpressionSyntax::Literal(LiteralExpressionSyntax {
                    literal_token,
                    value,
                })
            }
            _ => self.parse_name_or_call_expression(),
        }
    }

    fn parse_name_or_call_expression(&mut self) -> ExpressionSyntax {
        if self.current().kind == SyntaxKind::IdentifierToken
            && self.peek(1).kind == SyntaxKind::OpenParenToken
        {
            return self.parse_call_expression();
        }
        let identifier = self.match_token(SyntaxKind::IdentifierToken);
        ExpressionSyntax::Name(NameExpressionSyntax { identifier })
    }

    fn parse_call_expression(&mut self) -> ExpressionSyntax {
        let identifier = self.match_token(SyntaxKind::IdentifierToken);
        let open_paren = self.match_token(SyntaxKind::OpenParenToken);
        let mut arguments = Vec::new();
        while self.current().kind != SyntaxKind::CloseParenToken
            && self.current().kind != SyntaxKind::EofToken
        {
            let start = self.position;
            arguments.push(self.parse_expression());
            if self.current().kind == SyntaxKind::CommaToken {
                self.next_token();
            } else if self.position == start {
                self.next_token();
            } else {
                break;
            }
        }
        let close_paren = self.match_token(SyntaxKind::CloseParenToken);
        ExpressionSyntax::Call(CallExpressionSyntax {
            identifier,
            open_paren,
            arguments,
            close_paren,
        })
    }
}
