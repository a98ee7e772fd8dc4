use std::{
	fs::read_to_string,
	io::{self, BufRead, Write},
	path::Path,
};

use anyhow::Context;

use crate::{
	LoxError,
	error::tracker::ErrorTracker,
	interpreter::Interpreter,
	parser::Parser,
	printer::TreePrinter,
	scanner::Scanner,
	statement::Statement,
};

/// How [`Loxer::dump`] renders parsed statements.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AstFormat {
	/// One Lisp-like line per statement.
	#[default]
	Lisp,
	/// An indented tree, one node per line.
	Tree,
	/// The pretty-printed `Debug` form of the syntax tree.
	Debug,
}

/// Loxer is the main struct for the Lox interpreter.
///
/// It owns one interpreter, so every unit of work run through the same Loxer
/// shares the global scope, and one error tracker, reset before each unit.
pub struct Loxer {
	interpreter: Interpreter,
	errors:      ErrorTracker,
}

impl Loxer {
	/// A Loxer printing to stdout and reporting to stderr.
	pub fn new() -> Self { Self { interpreter: Interpreter::new(), errors: ErrorTracker::new() } }

	/// A Loxer with `print` going to `output` and diagnostics to `diagnostics`.
	pub fn with_output(output: Box<dyn Write>, diagnostics: Box<dyn Write>) -> Self {
		Self { interpreter: Interpreter::with_output(output), errors: ErrorTracker::with_output(diagnostics) }
	}

	/// Read the whole file and run it as one unit.
	pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoxError> {
		let source = read_source(path.as_ref())?;
		self.run(&source)
	}

	/// Run the REPL prompt on stdin until end of input.
	pub fn run_prompt(&mut self) {
		if let Err(e) = self.prompt(io::stdin().lock(), io::stdout()) {
			eprintln!("Failed run prompt: {e}");
		}
	}

	/// Read lines from `input`, running each one as its own unit. Prompts go to
	/// `echo`.
	pub fn prompt<R: BufRead, W: Write>(&mut self, mut input: R, mut echo: W) -> io::Result<()> {
		let mut line = String::new();
		loop {
			line.clear();
			write!(echo, "> ")?;
			echo.flush()?;
			if input.read_line(&mut line)? == 0 {
				writeln!(echo, "\nExited ilox repl")?;
				return Ok(());
			}
			match self.run(line.trim()) {
				Ok(()) => {}
				Err(LoxError::InternalError(e)) => eprintln!("Failed run prompt: {e:#}"),
				// Already reported line by line through the tracker.
				Err(e) => tracing::debug!("{e}"),
			}
		}
	}

	/// Scan, parse and, if both went cleanly, execute `source`.
	pub fn run(&mut self, source: &str) -> Result<(), LoxError> {
		self.errors.reset();
		let statements = self.parse(source)?;
		let result = self.interpreter.interpret(&statements, &mut self.errors);
		tracing::debug!(ok = result.is_ok(), "finished unit");
		result
	}

	/// Parse the file and write its statements to `out` in `format` instead
	/// of running them.
	pub fn dump_file<P: AsRef<Path>>(
		&mut self,
		path: P,
		format: AstFormat,
		out: &mut dyn Write,
	) -> Result<(), LoxError> {
		let source = read_source(path.as_ref())?;
		self.dump(&source, format, out)
	}

	pub fn dump(&mut self, source: &str, format: AstFormat, out: &mut dyn Write) -> Result<(), LoxError> {
		self.errors.reset();
		let statements = self.parse(source)?;
		let written = match format {
			AstFormat::Lisp => statements.iter().try_for_each(|statement| writeln!(out, "{statement}")),
			AstFormat::Tree => {
				let mut printer = TreePrinter::new(out);
				statements.iter().try_for_each(|statement| printer.print_statement(statement))
			}
			AstFormat::Debug => writeln!(out, "{statements:#?}"),
		};
		written.context("Failed write syntax tree")?;
		Ok(())
	}

	/// True if the last unit reported any diagnostic.
	pub fn had_error(&self) -> bool { self.errors.had_error() }

	fn parse<'a>(&mut self, source: &'a str) -> Result<Vec<Statement<'a>>, LoxError> {
		let tokens = Scanner::new(source).scan_tokens(&mut self.errors);
		let statements = Parser::new(tokens).parse(&mut self.errors)?;
		if self.errors.had_error() {
			return Err(LoxError::SyntaxErrors(self.errors.error_count()));
		}
		Ok(statements)
	}
}

impl Default for Loxer {
	fn default() -> Self { Self::new() }
}

fn read_source(path: &Path) -> Result<String, LoxError> {
	Ok(read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?)
}
