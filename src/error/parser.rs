use crate::error::Position;

#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

#[derive(thiserror::Error, Debug)]
#[error("{position}: {type}")]
pub struct ParseError {
	position: Position,
	r#type:   ParseErrorType,
}

impl ParseError {
	pub fn new(position: Position, r#type: ParseErrorType) -> Self { Self { position, r#type } }

	pub fn r#type(&self) -> &ParseErrorType { &self.r#type }
}

#[derive(Debug, PartialEq)]
pub enum ParseErrorType {
	ExpectedExpression,
	ExpectedVariableName,
	UnterminatedParenthesis,
	UnterminatedBlock,
	MissingSemicolonAfterValue,
	MissingSemicolonAfterDeclaration,
	/// Not fatal: the parser reports it and keeps the left-hand side.
	InvalidAssignmentTarget,
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		let message = match self {
			ExpectedExpression => "Expected expression.",
			ExpectedVariableName => "Expect variable name.",
			UnterminatedParenthesis => "Expect ')' after expression.",
			UnterminatedBlock => "Expect '}' after block.",
			MissingSemicolonAfterValue => "Expect ';' after value.",
			MissingSemicolonAfterDeclaration => "Expect ';' after variable declaration.",
			InvalidAssignmentTarget => "Invalid assignment target.",
		};
		f.write_str(message)
	}
}
