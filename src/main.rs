use std::{io, process::ExitCode};

use clap::Parser;
use ilox::{AstFormat, cli::*};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.log.as_deref());

	let mut loxer = ilox::Loxer::new();
	let result = match cli.mode.unwrap_or(Mode::Repl) {
		Mode::File { path } => loxer.run_file(&path),
		Mode::Repl => {
			loxer.run_prompt();
			Ok(())
		}
		Mode::Ast { path, tree, debug } => {
			let format = match (tree, debug) {
				(true, _) => AstFormat::Tree,
				(_, true) => AstFormat::Debug,
				_ => AstFormat::Lisp,
			};
			loxer.dump_file(&path, format, &mut io::stdout())
		}
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Failed run file: {e}");
			ExitCode::from(e.exit_code())
		}
	}
}

/// Log to stderr, `--log` first, then RUST_LOG, then warnings only.
fn init_tracing(filter: Option<&str>) {
	let filter = match filter {
		Some(filter) => EnvFilter::new(filter),
		None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
	};
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
