//! Lox tree-walking interpreter.
//!
//! The interpreter walks the statements produced by the parser, recursively
//! evaluating each expression and computing its runtime value.
//!
//! # Expression Types
//!
//! - **Literals**: `nil`, booleans, numbers, strings
//! - **Unary**: `-` (negation), `!` (logical NOT)
//! - **Binary**: `+`, `-`, `*`, `/`, comparisons, equality
//! - **Grouping**: Parenthesized expressions
//! - **Variable** and **Assign**: read and write bindings in the environment
//!
//! A runtime error unwinds through `?` back to [`Interpreter::interpret`],
//! which reports it and abandons the rest of the unit.

pub(crate) mod value;

use std::io::{self, Write};

use Expression::*;
use value::Value;

use crate::{
	LoxError,
	environment::Environment,
	error::{Position, interpreter::RuntimeError, tracker::ErrorTracker},
	parser::expression::Expression,
	stack::ensure_sufficient_stack,
	statement::Statement,
};

/// Interpreter that executes Lox statements. The global scope lives as long
/// as the interpreter, so a REPL session keeps its variables between lines.
pub(crate) struct Interpreter {
	environment: Environment,
	/// Where `print` writes.
	output:      Box<dyn Write>,
}

impl Interpreter {
	pub fn new() -> Self { Self::with_output(Box::new(io::stdout())) }

	pub fn with_output(output: Box<dyn Write>) -> Self { Self { environment: Environment::new(), output } }

	/// Execute the statements in order. The first runtime error is reported and
	/// ends the unit, whatever was printed before it stays printed.
	pub fn interpret(&mut self, statements: &[Statement], errors: &mut ErrorTracker) -> Result<(), LoxError> {
		let result = statements.iter().try_for_each(|statement| self.execute(statement));
		if let Err(e) = self.output.flush() {
			tracing::warn!("Failed flush output: {e}");
		}
		result.map_err(|e| {
			errors.report(&e);
			LoxError::RuntimeError
		})
	}

	fn execute(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
		ensure_sufficient_stack(|| self.execute_inner(statement))
	}

	fn execute_inner(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
		tracing::trace!(%statement, "execute");
		match statement {
			Statement::Expression(expression) => {
				self.evaluate(expression)?;
			}
			Statement::Print(expression) => {
				let value = self.evaluate(expression)?;
				if let Err(e) = writeln!(self.output, "{value}") {
					tracing::warn!("Failed write output: {e}");
				}
			}
			Statement::VarDeclaration { name_token, initializer } => {
				// The initializer runs before the name exists, so `var a = a;`
				// reads an outer `a`.
				let value = initializer.as_ref().map(|expr| self.evaluate(expr)).transpose()?;
				self.environment.define(name_token.lexeme, value);
			}
			Statement::Block(statements) => self.execute_block(statements)?,
		}
		Ok(())
	}

	/// Run the statements in a fresh scope, dropped again on every exit path.
	fn execute_block(&mut self, statements: &[Statement]) -> Result<(), RuntimeError> {
		self.environment.push_scope();
		let result = statements.iter().try_for_each(|statement| self.execute(statement));
		self.environment.pop_scope();
		result
	}

	/// Evaluate the given expression and return its value.
	fn evaluate(&mut self, expr: &Expression) -> Result<Value, RuntimeError> {
		ensure_sufficient_stack(|| self.evaluate_inner(expr))
	}

	fn evaluate_inner(&mut self, expr: &Expression) -> Result<Value, RuntimeError> {
		Ok(match expr {
			Literal(lit) => lit.into(),
			Grouping(inner) => self.evaluate(inner)?,
			Unary { operator, right } => {
				let right_value = self.evaluate(right)?;
				right_value.unary_op(&operator.r#type).map_err(|e| RuntimeError::new(Position::at(operator), e))?
			}
			Binary { left, operator, right } => {
				let left_value = self.evaluate(left)?;
				let right_value = self.evaluate(right)?;
				left_value
					.binary_op(&operator.r#type, &right_value)
					.map_err(|e| RuntimeError::new(Position::at(operator), e))?
			}
			Variable(token) => self.environment.get(token)?,
			Assign { target, value } => {
				let value = self.evaluate(value)?;
				self.environment.assign(target, value.clone())?;
				value
			}
		})
	}
}
