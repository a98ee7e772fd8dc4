//! # ilox, a tree-walking Lox interpreter
//!
//! User's source code: `var average = (min + max) / 2;`

//! ## Scanning
//!
//! Also known as `lexing` or `lexical analysis`, takes in the characters and
//! converts them into tokens. Single characters `(`, `,`, `.`, numbers `123`,
//! string literals `"hi!"`, identifiers `min` are all tokens.
//!
//! Whitespaces and comments are ignored. So the tokens are
//! `["var", "average", "=", "(", "min", "+", "max", ")", "/", "2", ";"]`.

//! ## Parsing
//!
//! A `parser` builds a tree structure of tokens, the `abstract syntax tree`
//! or `AST`, and reports `syntax errors`.
//!
//! ``` markdown
//! average (Statement::VarDeclaration)
//! └── / (Expression::Binary)
//!     ├── + (Expression::Binary)
//!     │   ├── min (Expression::Variable)
//!     │   └── max (Expression::Variable)
//!     └── 2 (Expression::Literal)
//! ```

//! ## Tree-walk interpreter
//!
//! Execute code right after parsing it, walking the AST node by node. Names
//! are looked up at runtime in a stack of scopes, one per block being run.

//! ## Errors
//!
//! Scanner, parser and interpreter report through one [`ErrorTracker`]. A bad
//! character or a syntax error does not stop the current stage, it only keeps
//! the unit from running. A runtime error stops the unit it happens in.
//!
//! ```
//! use ilox::Loxer;
//!
//! let output = ilox::SharedBuffer::new(Vec::new());
//! let mut loxer = Loxer::with_output(Box::new(output.clone()), Box::new(std::io::sink()));
//! loxer.run("var a = 1; { var a = 2; print a; } print a;")?;
//! assert_eq!(output.contents(), "2\n1\n");
//! # Ok::<(), ilox::LoxError>(())
//! ```

pub mod cli;
mod environment;
mod error;
mod interpreter;
mod loxer;
mod parser;
mod printer;
mod scanner;
mod stack;
mod statement;
mod utils;

pub use error::{
	LoxError, Position,
	interpreter::{RuntimeError, RuntimeErrorType},
	parser::{ParseError, ParseErrorType},
	scanner::{ScanError, ScanErrorType},
	tracker::ErrorTracker,
};
pub use loxer::{AstFormat, Loxer};
/// An in-memory output sink whose contents can be read back.
pub type SharedBuffer = utils::RcCell<Vec<u8>>;
