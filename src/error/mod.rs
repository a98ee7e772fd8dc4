pub mod interpreter;
pub mod parser;
pub mod scanner;
pub mod tracker;

use std::fmt::Display;

use crate::scanner::{Token, TokenType};

/// LoxError is the top-level error type for the Lox compiler/interpreter.
///
/// Diagnostics are written by the [`tracker::ErrorTracker`] as they happen,
/// these variants only tell the caller how a unit of work ended.
#[derive(thiserror::Error, Debug)]
pub enum LoxError {
	/// Internal or host error, e.g. an unreadable source file
	#[error("CompilerInternalError: {0:#}")]
	InternalError(#[from] anyhow::Error),
	/// Scanner or parser errors encountered before execution
	#[error("Generated {0} syntax errors")]
	SyntaxErrors(usize),
	/// A runtime error aborted the unit
	#[error("Runtime error aborted execution")]
	RuntimeError,
}

impl LoxError {
	/// Process exit status for a file run that ended with this error.
	pub fn exit_code(&self) -> u8 {
		match self {
			LoxError::SyntaxErrors(_) => 65,
			LoxError::RuntimeError => 70,
			LoxError::InternalError(_) => 74,
		}
	}
}

/// Where in the source an error was detected.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
	pub line:   usize,
	pub column: usize,
	pub lexeme: String,
}

impl Position {
	pub fn new(line: usize, column: usize, lexeme: impl Into<String>) -> Self {
		Self { line, column, lexeme: lexeme.into() }
	}

	pub(crate) fn at(token: &Token) -> Self {
		match token.r#type {
			TokenType::Eof => Self::new(token.line, token.column, "EOF"),
			_ => Self::new(token.line, token.column, token.lexeme),
		}
	}
}

impl Display for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[line {}:{}] at {:?}", self.line, self.column, self.lexeme)
	}
}
