//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-123 *
//! (45.67)` as nested nodes. Every node owns its children.

use std::mem;

use Expression::*;

use crate::{interpreter::value::Value, scanner::Token, stack::ensure_sufficient_stack};

/// Expression AST nodes
#[derive(Clone, PartialEq)]
pub(crate) enum Expression<'a> {
	Literal(LiteralValue<'a>),
	Grouping(Box<Expression<'a>>),
	/// `operator` is `-` or `!`.
	Unary { operator: Token<'a>, right: Box<Expression<'a>> },
	Binary { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	Variable(Token<'a>),
	Assign { target: Token<'a>, value: Box<Expression<'a>> },
}

impl<'a> Expression<'a> {
	pub fn unary(operator: Token<'a>, right: Self) -> Self { Unary { operator, right: Box::new(right) } }

	pub fn binary(left: Self, operator: Token<'a>, right: Self) -> Self {
		Binary { left: Box::new(left), operator, right: Box::new(right) }
	}

	pub fn grouping(expr: Self) -> Self { Grouping(Box::new(expr)) }

	pub fn assign(target: Token<'a>, value: Self) -> Self { Assign { target, value: Box::new(value) } }

	/// Move the children out, leaving leaves in their place.
	fn take_children(&mut self) -> Vec<Expression<'a>> {
		let take = |child: &mut Box<Expression<'a>>| mem::replace(&mut **child, Literal(LiteralValue::Nil));
		match self {
			Grouping(inner) | Unary { right: inner, .. } | Assign { value: inner, .. } => vec![take(inner)],
			Binary { left, right, .. } => vec![take(left), take(right)],
			Literal(_) | Variable(_) => Vec::new(),
		}
	}
}

/// Nested children are released one level per call, each call checking the
/// stack first.
impl Drop for Expression<'_> {
	fn drop(&mut self) {
		if matches!(self, Literal(_) | Variable(_)) {
			return;
		}
		let children = self.take_children();
		ensure_sufficient_stack(|| drop(children));
	}
}

/// Literal values in the AST
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LiteralValue<'a> {
	Number(f64),
	StringLiteral(&'a str),
	Boolean(bool),
	Nil,
}

impl From<&LiteralValue<'_>> for Value {
	fn from(literal: &LiteralValue<'_>) -> Self {
		match literal {
			LiteralValue::Number(n) => Value::Num(*n),
			LiteralValue::StringLiteral(s) => Value::Str(s.to_string()),
			LiteralValue::Boolean(b) => Value::Bool(*b),
			LiteralValue::Nil => Value::Null,
		}
	}
}

impl std::fmt::Display for Expression<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		ensure_sufficient_stack(|| match self {
			Literal(lit) => write!(f, "{lit}"),
			Grouping(expression) => write!(f, "(group {expression})"),
			Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
			Binary { left, operator, right } => write!(f, "({} {left} {right})", operator.lexeme),
			Variable(token) => write!(f, "{}", token.lexeme),
			Assign { target, value } => write!(f, "(= {} {value})", target.lexeme),
		})
	}
}

impl std::fmt::Debug for Expression<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		ensure_sufficient_stack(|| match self {
			Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
			Grouping(inner) => f.debug_tuple("Grouping").field(inner).finish(),
			Unary { operator, right } => {
				f.debug_struct("Unary").field("operator", operator).field("right", right).finish()
			}
			Binary { left, operator, right } => {
				f.debug_struct("Binary").field("left", left).field("operator", operator).field("right", right).finish()
			}
			Variable(token) => f.debug_tuple("Variable").field(token).finish(),
			Assign { target, value } => {
				f.debug_struct("Assign").field("target", target).field("value", value).finish()
			}
		})
	}
}

impl std::fmt::Display for LiteralValue<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LiteralValue::StringLiteral(s) => write!(f, "\"{s}\""),
			literal => write!(f, "{}", Value::from(literal)),
		}
	}
}

impl<'a> TryFrom<Token<'a>> for Expression<'a> {
	type Error = anyhow::Error;

	fn try_from(token: Token<'a>) -> Result<Self, Self::Error> {
		use crate::scanner::TokenType::*;

		Ok(match token.r#type {
			NumberLiteral(n) => Literal(LiteralValue::Number(n)),
			StringLiteral(s) => Literal(LiteralValue::StringLiteral(s)),
			True => Literal(LiteralValue::Boolean(true)),
			False => Literal(LiteralValue::Boolean(false)),
			Nil => Literal(LiteralValue::Nil),
			Identifier(_) => Variable(token),
			_ => anyhow::bail!("Cannot convert token {:?} to a primary expression", token),
		})
	}
}
