//! Recursive-descent parser for boolean expressions
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expr  = or ;
//! or    = and { '|' and } ;
//! and   = atom { '&' atom } ;
//! atom  = '!' atom | '(' or ')' | ident | number ;
//! ident = letter { letter | digit | '_' } ;
//! ```
//!
//! The operator characters and the optional end sentinel are
//! configurable through [`ExprSyntax`]; the productions never mention
//! them directly.

use super::error::ParseExprError;
use super::Expr;

/// Operator characters and end sentinel of the expression syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprSyntax {
    /// Conjunction operator, `&` by default.
    pub and_op: char,
    /// Disjunction operator, `|` by default.
    pub or_op: char,
    /// Prefix negation operator, `!` by default.
    pub not_op: char,
    /// Optional character that terminates the expression early.
    pub end: Option<char>,
}

impl Default for ExprSyntax {
    fn default() -> Self {
        ExprSyntax {
            and_op: '&',
            or_op: '|',
            not_op: '!',
            end: None,
        }
    }
}

/// Parse an expression with the default syntax.
pub fn parse_expr(input: &str) -> Result<Expr, ParseExprError> {
    parse_expr_with(input, &ExprSyntax::default())
}

/// Parse an expression with a custom operator syntax.
pub fn parse_expr_with(input: &str, syntax: &ExprSyntax) -> Result<Expr, ParseExprError> {
    let chars: Vec<char> = input.chars().collect();
    let mut p = Parser {
        chars: &chars,
        pos: 0,
        syntax: *syntax,
    };
    p.skip_space();
    let expr = p.parse_or()?;
    if !p.at_end() {
        return Err(ParseExprError::TrailingInput { pos: p.pos });
    }
    Ok(expr)
}

struct Parser<'a> {
    chars: &'a [char],
    pos: usize,
    syntax: ExprSyntax,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied().filter(|&ch| Some(ch) != self.syntax.end)
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn at_end(&self) -> bool {
        self.peek().is_none()
    }

    fn skip_space(&mut self) {
        while matches!(self.peek(), Some(ch) if (ch as u32) <= 32) {
            self.bump();
        }
    }

    fn parse_or(&mut self) -> Result<Expr, ParseExprError> {
        let first = self.parse_and()?;
        if self.peek() != Some(self.syntax.or_op) {
            return Ok(first);
        }
        let mut operands = vec![first];
        while self.peek() == Some(self.syntax.or_op) {
            self.bump();
            self.skip_space();
            operands.push(self.parse_and()?);
        }
        Ok(Expr::or(operands))
    }

    fn parse_and(&mut self) -> Result<Expr, ParseExprError> {
        let first = self.parse_atom()?;
        if self.peek() != Some(self.syntax.and_op) {
            return Ok(first);
        }
        let mut operands = vec![first];
        while self.peek() == Some(self.syntax.and_op) {
            self.bump();
            self.skip_space();
            operands.push(self.parse_atom()?);
        }
        Ok(Expr::and(operands))
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseExprError> {
        match self.peek() {
            Some('(') => {
                self.bump();
                self.skip_space();
                let inner = self.parse_or()?;
                if self.peek() != Some(')') {
                    return Err(ParseExprError::MissingCloseParen { pos: self.pos });
                }
                self.bump();
                self.skip_space();
                Ok(inner)
            }
            Some(ch) if ch == self.syntax.not_op => {
                self.bump();
                self.skip_space();
                Ok(self.parse_atom()?.negate())
            }
            Some(ch) if ch.is_ascii_digit() => Ok(Expr::num(self.parse_number())),
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {
                Ok(Expr::ident(&self.parse_ident()))
            }
            Some(ch) => Err(ParseExprError::UnexpectedChar { ch, pos: self.pos }),
            None => Err(ParseExprError::UnexpectedEnd),
        }
    }

    fn parse_number(&mut self) -> u32 {
        let mut value: u32 = 0;
        while let Some(ch) = self.peek() {
            match ch.to_digit(10) {
                Some(d) => {
                    value = value.saturating_mul(10).saturating_add(d);
                    self.bump();
                }
                None => break,
            }
        }
        self.skip_space();
        value
    }

    fn parse_ident(&mut self) -> String {
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                name.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        self.skip_space();
        name
    }
}
