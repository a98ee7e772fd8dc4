use crate::error::Position;

/// An error that aborts the statement being executed.
#[derive(thiserror::Error, Debug)]
#[error("{position}: {type}")]
pub struct RuntimeError {
	position: Position,
	r#type:   RuntimeErrorType,
}

impl RuntimeError {
	pub fn new(position: Position, r#type: RuntimeErrorType) -> Self { Self { position, r#type } }

	pub fn r#type(&self) -> &RuntimeErrorType { &self.r#type }
}

/// Errors that can occur during interpretation
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
	/// An arithmetic or comparison operand was not a number
	OperandMustBeNumber,
	/// The right operand of a string `+` was not a string
	OperandMustBeString,
	/// No scope defines the name
	UndefinedVariable(String),
	/// The name was declared without an initializer and never assigned
	UninitializedVariable(String),
	/// The tree holds an operator the evaluator has no rule for
	UnknownOperator,
}

impl std::fmt::Display for RuntimeErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use RuntimeErrorType::*;
		match self {
			OperandMustBeNumber => write!(f, "Operand must be number."),
			OperandMustBeString => write!(f, "Operand must be string."),
			UndefinedVariable(name) => write!(f, "Undefined variable '{name}'."),
			UninitializedVariable(name) => write!(f, "Variable '{name}' uninitialized."),
			UnknownOperator => write!(f, "Unknown operator."),
		}
	}
}
