//! The `Scanner` use `Lexical grammar`, implement `alphabet` as `Characters`,
//! `string` as `Lexme` or `Token`
//! The `Parser` use `Syntactic grammar`, implement `alphabet` as `Tokens`,
//! `string` as `Statement`s made of `Expression`s
//!
//! |Name|Operators|Associates
//! --|--|--
//! Assignment|=|Right
//! Equality|== !=|Left
//! Comparison|< > <= >=|Left
//! Term|+ -|Left
//! Factor|* /|Left
//! Unary|! -|Right
//!
//! Grammar:
//!
//! ``` BNF
//! program        → declaration* EOF ;
//! declaration    → varDecl | statement ;
//! varDecl        → "var" IDENTIFIER ( "=" expression )? ";" ;
//! statement      → printStmt | block | exprStmt ;
//! printStmt      → "print" expression ";" ;
//! block          → "{" declaration* "}" ;
//! exprStmt       → expression ";" ;
//! expression     → assignment ;
//! assignment     → IDENTIFIER "=" assignment | equality ;
//! equality       → comparison ( ( "!=" | "==" ) comparison )* ;
//! comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
//! term           → factor ( ( "-" | "+" ) factor )* ;
//! factor         → unary ( ( "/" | "*" ) unary )* ;
//! unary          → ( "!" | "-" ) unary | primary ;
//! primary        → NUMBER | STRING | "true" | "false" | "nil"
//!                | IDENTIFIER | "(" expression ")" ;
//! ```
//!
//! A syntax error abandons the declaration it occurs in. The parser then
//! `synchronize`s: it drops tokens until just after a `;` or just before a
//! keyword that starts a statement, and carries on from there. An invalid
//! assignment target is only reported, parsing goes on as if nothing happened.

pub(crate) mod expression;

use std::{iter::Peekable, vec::IntoIter};

use TokenType::*;
use anyhow::anyhow;

use crate::{
	LoxError,
	error::{
		Position,
		parser::{ParseError, ParseErrorType, ParserError},
		tracker::ErrorTracker,
	},
	parser::expression::Expression,
	scanner::{Token, TokenType},
	stack::ensure_sufficient_stack,
	statement::Statement,
};

pub(crate) struct Parser<'a> {
	/// The tokens to parse, always ending with `Eof`.
	tokens: Peekable<IntoIter<Token<'a>>>,
	/// Diagnostics in the order they were found.
	errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
	pub fn new(tokens: Vec<Token<'a>>) -> Self { Self { tokens: tokens.into_iter().peekable(), errors: Vec::new() } }

	/// Parse as many statements as possible, reporting every syntax error.
	pub fn parse(mut self, errors: &mut ErrorTracker) -> Result<Vec<Statement<'a>>, LoxError> {
		let mut statements = Vec::new();
		while !self.is_at_end()? {
			if let Some(statement) = self.declaration()? {
				statements.push(statement);
			}
		}
		for error in &self.errors {
			errors.report(error);
		}
		tracing::debug!(count = statements.len(), errors = self.errors.len(), "parsed statements");
		Ok(statements)
	}

	/// Parse one declaration, `None` if it had to be skipped.
	fn declaration(&mut self) -> Result<Option<Statement<'a>>, ParserError> {
		ensure_sufficient_stack(|| self.declaration_inner())
	}

	fn declaration_inner(&mut self) -> Result<Option<Statement<'a>>, ParserError> {
		let result = if matches!(self.peek()?.r#type, Var) {
			self.advance()?;
			self.var_declaration()
		} else {
			self.statement()
		};
		match result {
			Ok(statement) => Ok(Some(statement)),
			Err(ParserError::ParseError(e)) => {
				self.report(e);
				self.synchronize()?;
				Ok(None)
			}
			Err(e) => Err(e),
		}
	}

	fn var_declaration(&mut self) -> Result<Statement<'a>, ParserError> {
		let name_token = match self.peek()?.r#type {
			Identifier(_) => self.advance()?,
			_ => return Err(self.error_at_peek(ParseErrorType::ExpectedVariableName)?),
		};

		let initializer = if matches!(self.peek()?.r#type, Equal) {
			self.advance()?;
			Some(self.expression()?)
		} else {
			None
		};

		self.consume(Semicolon, ParseErrorType::MissingSemicolonAfterDeclaration)?;
		Ok(Statement::VarDeclaration { name_token, initializer })
	}

	fn statement(&mut self) -> Result<Statement<'a>, ParserError> {
		match self.peek()?.r#type {
			Print => {
				self.advance()?;
				let value = self.expression()?;
				self.consume(Semicolon, ParseErrorType::MissingSemicolonAfterValue)?;
				Ok(Statement::Print(value))
			}
			LeftBrace => {
				self.advance()?;
				Ok(Statement::Block(self.block()?))
			}
			_ => {
				let expression = self.expression()?;
				self.consume(Semicolon, ParseErrorType::MissingSemicolonAfterValue)?;
				Ok(Statement::Expression(expression))
			}
		}
	}

	/// Parse the declarations of a block, the `{` is already consumed.
	fn block(&mut self) -> Result<Vec<Statement<'a>>, ParserError> {
		let mut statements = Vec::new();
		while !matches!(self.peek()?.r#type, RightBrace | Eof) {
			if let Some(statement) = self.declaration()? {
				statements.push(statement);
			}
		}
		self.consume(RightBrace, ParseErrorType::UnterminatedBlock)?;
		Ok(statements)
	}

	fn expression(&mut self) -> Result<Expression<'a>, ParserError> { self.assignment() }

	/// Parse assignment expressions, right-associative. Every nested
	/// expression, parenthesized ones included, passes through here.
	fn assignment(&mut self) -> Result<Expression<'a>, ParserError> {
		ensure_sufficient_stack(|| self.assignment_inner())
	}

	fn assignment_inner(&mut self) -> Result<Expression<'a>, ParserError> {
		let expression = self.equality()?;
		if !matches!(self.peek()?.r#type, Equal) {
			return Ok(expression);
		}

		let equals = self.advance()?;
		let value = self.assignment()?;
		if let Expression::Variable(target) = &expression {
			return Ok(Expression::assign(target.clone(), value));
		}
		self.report(ParseError::new(Position::at(&equals), ParseErrorType::InvalidAssignmentTarget));
		Ok(expression)
	}

	/// Parse equality expressions.
	fn equality(&mut self) -> Result<Expression<'a>, ParserError> {
		let mut expression = self.comparison()?;
		while matches!(self.peek()?.r#type, BangEqual | EqualEqual) {
			expression = Expression::binary(expression, self.advance()?, self.comparison()?)
		}
		Ok(expression)
	}

	/// Parse comparison expressions.
	fn comparison(&mut self) -> Result<Expression<'a>, ParserError> {
		let mut expression = self.term()?;
		while matches!(self.peek()?.r#type, Greater | GreaterEqual | Less | LessEqual) {
			expression = Expression::binary(expression, self.advance()?, self.term()?)
		}
		Ok(expression)
	}

	/// Parse term expressions.
	fn term(&mut self) -> Result<Expression<'a>, ParserError> {
		let mut expression = self.factor()?;
		while matches!(self.peek()?.r#type, Minus | Plus) {
			expression = Expression::binary(expression, self.advance()?, self.factor()?)
		}
		Ok(expression)
	}

	/// Parse factor expressions.
	fn factor(&mut self) -> Result<Expression<'a>, ParserError> {
		let mut expression = self.unary()?;
		while matches!(self.peek()?.r#type, Slash | Star) {
			expression = Expression::binary(expression, self.advance()?, self.unary()?)
		}
		Ok(expression)
	}

	/// Parse unary expressions.
	fn unary(&mut self) -> Result<Expression<'a>, ParserError> { ensure_sufficient_stack(|| self.unary_inner()) }

	fn unary_inner(&mut self) -> Result<Expression<'a>, ParserError> {
		if matches!(self.peek()?.r#type, Bang | Minus) {
			return Ok(Expression::unary(self.advance()?, self.unary()?));
		}
		self.primary()
	}

	/// Parse primary expressions.
	fn primary(&mut self) -> Result<Expression<'a>, ParserError> {
		match self.peek()?.r#type {
			False | True | Nil | NumberLiteral(_) | StringLiteral(_) | Identifier(_) => {
				Ok(self.advance()?.try_into()?)
			}
			LeftParen => {
				self.advance()?; // consume '('
				let expr = self.expression()?;
				self.consume(RightParen, ParseErrorType::UnterminatedParenthesis)?;
				Ok(Expression::grouping(expr))
			}
			_ => Err(self.error_at_peek(ParseErrorType::ExpectedExpression)?),
		}
	}

	/// Consume the next token if it has the expected type, fail otherwise.
	fn consume(&mut self, expected: TokenType<'a>, error: ParseErrorType) -> Result<Token<'a>, ParserError> {
		if self.peek()?.r#type == expected {
			return self.advance();
		}
		Err(self.error_at_peek(error)?)
	}

	/// Advance to the next token.
	fn advance(&mut self) -> Result<Token<'a>, ParserError> {
		self.tokens.next().ok_or_else(|| anyhow!("Unexpected end of token stream").into())
	}

	/// Peek at the current token.
	fn peek(&mut self) -> Result<&Token<'a>, ParserError> {
		self.tokens.peek().ok_or_else(|| anyhow!("Token stream is missing its Eof").into())
	}

	fn is_at_end(&mut self) -> Result<bool, ParserError> { Ok(matches!(self.peek()?.r#type, Eof)) }

	fn error_at_peek(&mut self, r#type: ParseErrorType) -> Result<ParserError, ParserError> {
		Ok(ParseError::new(Position::at(self.peek()?), r#type).into())
	}

	fn report(&mut self, error: ParseError) {
		tracing::trace!(%error, "syntax error");
		self.errors.push(error);
	}

	/// Discard tokens until the start of the next statement is likely.
	fn synchronize(&mut self) -> Result<(), ParserError> {
		while !self.is_at_end()? {
			if matches!(self.advance()?.r#type, Semicolon) {
				return Ok(());
			}
			if self.peek()?.r#type.starts_statement() {
				return Ok(());
			}
		}
		Ok(())
	}
}

impl From<ParserError> for LoxError {
	fn from(error: ParserError) -> Self {
		match error {
			ParserError::InternalError(e) => LoxError::InternalError(e),
			ParserError::ParseError(e) => LoxError::InternalError(anyhow!("Unreported syntax error: {e}")),
		}
	}
}
