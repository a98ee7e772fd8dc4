//! Debug dump of the syntax tree, one node per line.
//!
//! Children are indented under the text of their parent, so the tree for
//! `-123 * (45.67)` reads
//!
//! ```text
//! *
//!   -
//!     123
//!   (
//!    45.67
//!   )
//! ```
//!
//! The one-line Lisp-like form is the `Display` of [`Expression`] and
//! [`Statement`].

use std::io::{self, Write};

use crate::{parser::expression::Expression, stack::ensure_sufficient_stack, statement::Statement};

pub(crate) struct TreePrinter<W: Write> {
	out:    W,
	/// Indentation of each open nesting level, innermost last.
	indent: Vec<usize>,
}

impl<W: Write> TreePrinter<W> {
	pub fn new(out: W) -> Self { Self { out, indent: Vec::new() } }

	pub fn print_statement(&mut self, statement: &Statement) -> io::Result<()> {
		ensure_sufficient_stack(|| self.statement(statement))
	}

	pub fn print_expression(&mut self, expression: &Expression) -> io::Result<()> {
		ensure_sufficient_stack(|| self.expression(expression))
	}

	fn statement(&mut self, statement: &Statement) -> io::Result<()> {
		match statement {
			Statement::Expression(expression) => {
				self.line(";")?;
				self.nested(2, |p| p.print_expression(expression))
			}
			Statement::Print(expression) => {
				self.line("print")?;
				self.nested(6, |p| p.print_expression(expression))
			}
			Statement::VarDeclaration { name_token, initializer } => {
				self.line("var")?;
				self.nested(4, |p| {
					p.line(name_token.lexeme)?;
					initializer.as_ref().map_or(Ok(()), |init| p.print_expression(init))
				})
			}
			Statement::Block(statements) => {
				self.line("{")?;
				self.nested(1, |p| statements.iter().try_for_each(|s| p.print_statement(s)))?;
				self.line("}")
			}
		}
	}

	fn expression(&mut self, expression: &Expression) -> io::Result<()> {
		match expression {
			Expression::Literal(literal) => self.line(literal),
			Expression::Grouping(inner) => {
				self.line("(")?;
				self.nested(1, |p| p.print_expression(inner))?;
				self.line(")")
			}
			Expression::Unary { operator, right } => {
				self.line(operator.lexeme)?;
				self.nested(width(operator.lexeme), |p| p.print_expression(right))
			}
			Expression::Binary { left, operator, right } => {
				self.line(operator.lexeme)?;
				self.nested(width(operator.lexeme), |p| {
					p.print_expression(left)?;
					p.print_expression(right)
				})
			}
			Expression::Variable(name) => self.line(name.lexeme),
			Expression::Assign { target, value } => {
				self.line("=")?;
				self.nested(2, |p| {
					p.line(target.lexeme)?;
					p.print_expression(value)
				})
			}
		}
	}

	#[cfg(test)]
	pub fn into_inner(self) -> W { self.out }

	fn current(&self) -> usize { self.indent.last().copied().unwrap_or(0) }

	fn line(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
		writeln!(self.out, "{:indent$}{text}", "", indent = self.current())
	}

	fn nested(&mut self, by: usize, body: impl FnOnce(&mut Self) -> io::Result<()>) -> io::Result<()> {
		self.indent.push(self.current() + by);
		let result = body(self);
		self.indent.pop();
		result
	}
}

/// Children sit one column past the end of the operator.
fn width(lexeme: &str) -> usize { lexeme.chars().count() + 1 }
