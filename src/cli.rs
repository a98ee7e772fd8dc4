use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ilox", version, about = "A tree-walking Lox interpreter", after_long_help = "Without a subcommand, ilox starts the prompt.")]
pub struct Cli {
	/// Tracing filter such as `debug` or `ilox=trace`, overrides RUST_LOG
	#[arg(long, global = true)]
	pub log:  Option<String>,
	#[command(subcommand)]
	pub mode: Option<Mode>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Mode {
	/// Run a source file
	File { path: PathBuf },
	/// Input prompt
	Repl,
	/// Print the syntax tree of a source file without running it
	Ast {
		path: PathBuf,
		/// Indented tree instead of one line per statement
		#[arg(long, conflicts_with = "debug")]
		tree:  bool,
		/// Pretty-printed Rust `Debug` form of the syntax tree
		#[arg(long)]
		debug: bool,
	},
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn command_is_well_formed() { Cli::command().debug_assert(); }

	#[test]
	fn parse_modes() {
		let cli = Cli::try_parse_from(["ilox", "file", "main.lox"]).unwrap();
		assert_eq!(cli.mode, Some(Mode::File { path: "main.lox".into() }));

		let cli = Cli::try_parse_from(["ilox", "ast", "main.lox", "--tree", "--log", "debug"]).unwrap();
		assert_eq!(cli.mode, Some(Mode::Ast { path: "main.lox".into(), tree: true, debug: false }));
		assert_eq!(cli.log.as_deref(), Some("debug"));

		let cli = Cli::try_parse_from(["ilox", "ast", "main.lox", "--debug"]).unwrap();
		assert_eq!(cli.mode, Some(Mode::Ast { path: "main.lox".into(), tree: false, debug: true }));
		assert!(Cli::try_parse_from(["ilox", "ast", "main.lox", "--debug", "--tree"]).is_err());

		let cli = Cli::try_parse_from(["ilox"]).unwrap();
		assert_eq!(cli.mode, None);
	}
}
