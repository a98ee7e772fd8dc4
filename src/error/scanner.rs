use crate::error::Position;

/// A specific scanning error with its position and type.
#[derive(thiserror::Error, Debug)]
#[error("{position}: {type}")]
pub struct ScanError {
	/// Where the offending text starts.
	position: Position,
	/// The type of scanning error.
	r#type:   ScanErrorType,
}

impl ScanError {
	pub fn new(position: Position, r#type: ScanErrorType) -> Self { Self { position, r#type } }

	pub fn r#type(&self) -> &ScanErrorType { &self.r#type }
}

/// Types of scanning errors.
#[derive(Debug, PartialEq)]
pub enum ScanErrorType {
	/// Error for unexpected characters.
	UnexpectedCharacter(char),
	/// Error for strings still open at end of input.
	UnterminatedString,
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "Unexpected character {c:?}.")
			}
			UnterminatedString => {
				write!(f, "Unterminated string.")
			}
		}
	}
}
