//! There is no place in the grammar where both an expression and a statement
//! are allowed. The operands of, say, `+` are always expressions, never
//! statements. The body of a block is always a list of statements.

use std::mem;

use crate::{parser::expression::Expression, scanner::Token, stack::ensure_sufficient_stack};

/// A statement in the programming language.
#[derive(Clone, PartialEq)]
pub(crate) enum Statement<'a> {
	/// An expression used as a statement.
	Expression(Expression<'a>),
	/// A print statement.
	Print(Expression<'a>),
	/// A variable declaration statement.
	VarDeclaration {
		/// The token of the variable being declared.
		name_token:  Token<'a>,
		/// An optional initializer expression.
		initializer: Option<Expression<'a>>,
	},
	/// A block of statements with its own scope.
	Block(Vec<Statement<'a>>),
}

impl Drop for Statement<'_> {
	fn drop(&mut self) {
		if let Statement::Block(statements) = self {
			let statements = mem::take(statements);
			ensure_sufficient_stack(|| drop(statements));
		}
	}
}

impl std::fmt::Debug for Statement<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		ensure_sufficient_stack(|| match self {
			Statement::Expression(expression) => f.debug_tuple("Expression").field(expression).finish(),
			Statement::Print(expression) => f.debug_tuple("Print").field(expression).finish(),
			Statement::VarDeclaration { name_token, initializer } => f
				.debug_struct("VarDeclaration")
				.field("name_token", name_token)
				.field("initializer", initializer)
				.finish(),
			Statement::Block(statements) => f.debug_tuple("Block").field(statements).finish(),
		})
	}
}

impl std::fmt::Display for Statement<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		ensure_sufficient_stack(|| match self {
			Statement::Expression(expression) => write!(f, "(; {expression})"),
			Statement::Print(expression) => write!(f, "(print {expression})"),
			Statement::VarDeclaration { name_token, initializer: Some(initializer) } => {
				write!(f, "(var {} {initializer})", name_token.lexeme)
			}
			Statement::VarDeclaration { name_token, initializer: None } => write!(f, "(var {})", name_token.lexeme),
			Statement::Block(statements) => {
				write!(f, "(block")?;
				for statement in statements {
					write!(f, " {statement}")?;
				}
				write!(f, ")")
			}
		})
	}
}
