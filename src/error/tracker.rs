use std::{
	fmt::Display,
	io::{self, Write},
};

/// Collects the diagnostics of one unit of work.
///
/// Scanner, parser and interpreter all report through the same tracker, which
/// writes every diagnostic on its own line and remembers that something went
/// wrong until it is [`reset`](ErrorTracker::reset).
pub struct ErrorTracker {
	error_count: usize,
	output:      Box<dyn Write>,
}

impl ErrorTracker {
	/// A tracker writing to standard error.
	pub fn new() -> Self { Self::with_output(Box::new(io::stderr())) }

	pub fn with_output(output: Box<dyn Write>) -> Self { Self { error_count: 0, output } }

	/// Write the diagnostic and note that an error happened.
	pub fn report(&mut self, error: &dyn Display) {
		self.error_count += 1;
		tracing::debug!(%error, "reported diagnostic");
		if let Err(e) = writeln!(self.output, "{error}") {
			tracing::warn!("Failed write diagnostic: {e}");
		}
	}

	/// True if anything was reported since the last reset.
	pub fn had_error(&self) -> bool { self.error_count > 0 }

	pub fn error_count(&self) -> usize { self.error_count }

	pub fn reset(&mut self) { self.error_count = 0; }
}

impl Default for ErrorTracker {
	fn default() -> Self { Self::new() }
}
