//! Variable bindings, one frame per active block.
//!
//! The frames live in a stack owned by the interpreter. The first frame is the
//! global scope and is never popped, every block pushes a frame on entry and
//! pops it on exit. Looking a name up walks the stack from the innermost frame
//! outwards, so an inner `var` shadows an outer one of the same name.

use std::collections::HashMap;

use crate::{
	error::{
		Position,
		interpreter::{RuntimeError, RuntimeErrorType},
	},
	interpreter::value::Value,
	scanner::Token,
};

/// What a frame stores for a name.
#[derive(Debug, Clone, PartialEq)]
enum Binding {
	/// Declared by `var x;` and not assigned yet. Distinct from `nil`.
	Uninitialized,
	Initialized(Value),
}

#[derive(Debug)]
pub(crate) struct Environment {
	/// Innermost frame last.
	scopes: Vec<HashMap<String, Binding>>,
}

impl Environment {
	pub fn new() -> Self { Self { scopes: vec![HashMap::new()] } }

	/// Number of frames, the global one included.
	pub fn depth(&self) -> usize { self.scopes.len() }

	pub fn push_scope(&mut self) {
		self.scopes.push(HashMap::new());
		tracing::trace!(depth = self.depth(), "entered scope");
	}

	/// Drop the innermost frame. The global frame stays.
	pub fn pop_scope(&mut self) {
		if self.scopes.len() > 1 {
			self.scopes.pop();
		}
		tracing::trace!(depth = self.depth(), "left scope");
	}

	/// A variable statement doesn’t just define a new variable, it can also be
	/// used to redefine an existing variable in the same scope.
	pub fn define(&mut self, name: &str, value: Option<Value>) {
		let binding = value.map_or(Binding::Uninitialized, Binding::Initialized);
		self.innermost().insert(name.to_string(), binding);
	}

	pub fn get(&self, token: &Token) -> Result<Value, RuntimeError> {
		let binding = self
			.scopes
			.iter()
			.rev()
			.find_map(|scope| scope.get(token.lexeme))
			.ok_or_else(|| error(token, RuntimeErrorType::UndefinedVariable(token.lexeme.to_string())))?;
		match binding {
			Binding::Initialized(value) => Ok(value.clone()),
			Binding::Uninitialized => {
				Err(error(token, RuntimeErrorType::UninitializedVariable(token.lexeme.to_string())))
			}
		}
	}

	/// Assign a value to the nearest existing variable. Never declares one.
	pub fn assign(&mut self, token: &Token, value: Value) -> Result<(), RuntimeError> {
		let binding = self
			.scopes
			.iter_mut()
			.rev()
			.find_map(|scope| scope.get_mut(token.lexeme))
			.ok_or_else(|| error(token, RuntimeErrorType::UndefinedVariable(token.lexeme.to_string())))?;
		*binding = Binding::Initialized(value);
		Ok(())
	}

	fn innermost(&mut self) -> &mut HashMap<String, Binding> {
		// The global frame is never popped, so there always is a last one.
		let last = self.scopes.len() - 1;
		&mut self.scopes[last]
	}
}

impl Default for Environment {
	fn default() -> Self { Self::new() }
}

fn error(token: &Token, r#type: RuntimeErrorType) -> RuntimeError { RuntimeError::new(Position::at(token), r#type) }
