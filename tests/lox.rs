use std::{fs, io, path::PathBuf};

use ilox::{AstFormat, LoxError, Loxer, SharedBuffer};
use pretty_assertions::assert_eq;

/// A Loxer whose print output and diagnostics can be read back.
struct Session {
	loxer:       Loxer,
	output:      SharedBuffer,
	diagnostics: SharedBuffer,
}

impl Session {
	fn new() -> Self {
		let output = SharedBuffer::new(Vec::new());
		let diagnostics = SharedBuffer::new(Vec::new());
		let loxer = Loxer::with_output(Box::new(output.clone()), Box::new(diagnostics.clone()));
		Self { loxer, output, diagnostics }
	}

	fn run(&mut self, source: &str) -> Result<(), LoxError> { self.loxer.run(source) }
}

fn script(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("scripts").join(name) }

#[test]
fn precedence() {
	let mut session = Session::new();
	session.run("print 1+2*3;").unwrap();
	assert_eq!(session.output.contents(), "7\n");
}

#[test]
fn inner_var_shadows_without_mutating_outer() {
	let mut session = Session::new();
	session.run("var x = 2; { var x = 1; } print x;").unwrap();
	assert_eq!(session.output.contents(), "2\n");
}

#[test]
fn assignment_in_block_mutates_outer() {
	let mut session = Session::new();
	session.run("var x = 2; { x = 1; } print x;").unwrap();
	assert_eq!(session.output.contents(), "1\n");
}

#[test]
fn out_of_scope_reference_fails() {
	let mut session = Session::new();
	let result = session.run("{ var x = 1; } print x;");
	assert!(matches!(result, Err(LoxError::RuntimeError)));
	assert_eq!(session.output.contents(), "");
	assert_eq!(session.diagnostics.contents(), "[line 1:22] at \"x\": Undefined variable 'x'.\n");
}

#[test]
fn uninitialized_read_fails() {
	let mut session = Session::new();
	let result = session.run("var x; print x;");
	assert!(matches!(result, Err(LoxError::RuntimeError)));
	assert_eq!(session.output.contents(), "");
	assert_eq!(session.diagnostics.contents(), "[line 1:14] at \"x\": Variable 'x' uninitialized.\n");
}

#[test]
fn nil_initialized_read_succeeds() {
	let mut session = Session::new();
	session.run("var x = nil; print x;").unwrap();
	assert_eq!(session.output.contents(), "nil\n");
}

#[test]
fn mixed_plus_operands() {
	let mut session = Session::new();
	assert!(session.run("print 1 + \"two\";").is_err());
	assert!(session.run("print \"two\" + 1;").is_err());
	assert_eq!(
		session.diagnostics.contents(),
		"[line 1:9] at \"+\": Operand must be number.\n[line 1:13] at \"+\": Operand must be string.\n"
	);
	assert_eq!(session.output.contents(), "");
}

#[test]
fn equality_never_raises() {
	let mut session = Session::new();
	session.run("print 3 == \"three\";").unwrap();
	assert_eq!(session.output.contents(), "false\n");
}

#[test]
fn invalid_assignment_target_keeps_parsing_but_skips_execution() {
	let mut session = Session::new();
	let result = session.run("1 = 2; print 3; print ;");
	assert!(matches!(result, Err(LoxError::SyntaxErrors(2))));
	assert_eq!(
		session.diagnostics.contents(),
		"[line 1:3] at \"=\": Invalid assignment target.\n[line 1:23] at \";\": Expected expression.\n"
	);
	assert_eq!(session.output.contents(), "");
}

#[test]
fn scan_errors_keep_unit_from_running() {
	let mut session = Session::new();
	let result = session.run("print 1; @\n\"open");
	assert!(matches!(result, Err(LoxError::SyntaxErrors(2))));
	assert_eq!(session.output.contents(), "");
	assert_eq!(
		session.diagnostics.contents(),
		"[line 1:10] at \"@\": Unexpected character '@'.\n[line 2:6] at \"\\\"open\": Unterminated string.\n"
	);
}

#[test]
fn runtime_error_keeps_earlier_output() {
	let mut session = Session::new();
	assert!(session.run("print 1; print 2 * nil; print 3;").is_err());
	assert_eq!(session.output.contents(), "1\n");
}

#[test]
fn session_keeps_globals_between_units() {
	let mut session = Session::new();
	session.run("var greeting = \"hi\";").unwrap();
	assert!(session.run("print nope;").is_err());
	assert!(session.loxer.had_error());
	session.run("greeting = greeting + \"!\"; print greeting;").unwrap();
	assert!(!session.loxer.had_error());
	assert_eq!(session.output.contents(), "hi!\n");
}

#[test]
fn block_scope_is_dropped_after_runtime_error() {
	let mut session = Session::new();
	assert!(session.run("{ var inner = 1; print -\"x\"; }").is_err());
	assert!(session.run("print inner;").is_err());
	assert_eq!(session.diagnostics.contents().lines().count(), 2);
}

#[test]
fn prompt_runs_each_line() {
	let mut session = Session::new();
	let mut echo = Vec::new();
	let input = "var a = 1;\nprint a +;\nprint a + 1;\n";
	session.loxer.prompt(input.as_bytes(), &mut echo).unwrap();

	assert_eq!(session.output.contents(), "2\n");
	assert_eq!(session.diagnostics.contents(), "[line 1:10] at \";\": Expected expression.\n");
	assert_eq!(String::from_utf8(echo).unwrap(), "> > > > \nExited ilox repl\n");
}

#[test]
fn scripts() {
	for name in ["scopes", "expressions"] {
		let mut session = Session::new();
		let result = session.loxer.run_file(script(&format!("{name}.lox")));
		assert!(result.is_ok(), "{name}.lox failed: {}", session.diagnostics.contents());
		let expected = fs::read_to_string(script(&format!("{name}.out"))).unwrap();
		assert_eq!(session.output.contents(), expected, "output of {name}.lox");
	}
}

#[test]
fn missing_file_is_an_internal_error() {
	let mut loxer = Loxer::with_output(Box::new(io::sink()), Box::new(io::sink()));
	let result = loxer.run_file(script("does-not-exist.lox"));
	let Err(error) = result else { panic!("expected an error") };
	assert_eq!(error.exit_code(), 74);
	assert!(error.to_string().contains("Failed open source file"));
}

#[test]
fn dump_statements() {
	let mut loxer = Loxer::with_output(Box::new(io::sink()), Box::new(io::sink()));
	let mut out = Vec::new();
	loxer.dump("var x = 1 + 2; { print -x; }", AstFormat::Lisp, &mut out).unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), "(var x (+ 1 2))\n(block (print (- x)))\n");

	let mut out = Vec::new();
	loxer.dump("print (1);", AstFormat::Tree, &mut out).unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), "print\n      (\n       1\n      )\n");
}

#[test]
fn dump_debug_form() {
	let mut loxer = Loxer::with_output(Box::new(io::sink()), Box::new(io::sink()));
	let mut out = Vec::new();
	loxer.dump("var x = (1);", AstFormat::Debug, &mut out).unwrap();
	let dump = String::from_utf8(out).unwrap();
	assert!(dump.starts_with("[\n    VarDeclaration {\n"), "{dump}");
	assert!(dump.contains("Grouping(\n"), "{dump}");
	assert!(dump.contains("Number(\n"), "{dump}");
}

#[test]
fn exit_codes() {
	let mut session = Session::new();
	assert_eq!(session.run("print ;").unwrap_err().exit_code(), 65);
	assert_eq!(session.run("print -nil;").unwrap_err().exit_code(), 70);
}

#[test]
fn deeply_nested_source_runs() {
	const DEPTH: usize = 10_000;
	let mut session = Session::new();

	let parens = format!("print {}1{};", "(".repeat(DEPTH), ")".repeat(DEPTH));
	session.run(&parens).unwrap();

	let negations = format!("print {}1;", "-".repeat(DEPTH));
	session.run(&negations).unwrap();

	let blocks = format!("var x = 0; {}x = x + 1; print x;{}", "{ var y = 1; ".repeat(DEPTH), "}".repeat(DEPTH));
	session.run(&blocks).unwrap();

	assert_eq!(session.output.contents(), "1\n1\n1\n");
	assert_eq!(session.diagnostics.contents(), "");
}

#[test]
fn deeply_nested_source_dumps() {
	const DEPTH: usize = 10_000;
	let mut loxer = Loxer::with_output(Box::new(io::sink()), Box::new(io::sink()));
	let source = format!("{}print {}1{};{}", "{".repeat(DEPTH), "(".repeat(DEPTH), ")".repeat(DEPTH), "}".repeat(DEPTH));

	let mut out = Vec::new();
	loxer.dump(&source, AstFormat::Lisp, &mut out).unwrap();
	let dump = String::from_utf8(out).unwrap();
	assert!(dump.starts_with("(block (block"), "{}", &dump[..40]);
	assert_eq!(dump.matches("(group").count(), DEPTH);

	// The tree form indents every level, so keep it shallower.
	let shallow = format!("print {}1{};", "(".repeat(1_000), ")".repeat(1_000));
	let mut out = Vec::new();
	loxer.dump(&shallow, AstFormat::Tree, &mut out).unwrap();
	assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2 * 1_000 + 2);

	let mut out = Vec::new();
	loxer.dump(&shallow, AstFormat::Debug, &mut out).unwrap();
	assert_eq!(String::from_utf8(out).unwrap().matches("Grouping(").count(), 1_000);
}
