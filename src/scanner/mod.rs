//! Turns source text into tokens.
//!
//! Keywords are part of the shape of the language’s grammar, so at the point
//! we recognize a lexeme we also remember which kind of lexeme it represents:
//! every keyword, operator, bit of punctuation, and literal type gets its own
//! [`TokenType`]. Literal tokens already carry their runtime value.
//!
//! We can’t detect a `reserved word` until we’ve reached the end of what might
//! instead be an identifier, this is `maximal munch`.
//!
//! Scanning never stops at a bad character: the error goes to the tracker and
//! the scanner moves on, so the parser always gets a best-effort token list
//! ending in exactly one [`TokenType::Eof`].
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub(crate) use token::*;
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::error::{
	Position,
	scanner::{ScanError, ScanErrorType},
	tracker::ErrorTracker,
};

/// A scanner for Lox source code
pub(crate) struct Scanner<'a> {
	/// User input source code
	source:       &'a str,
	/// User input source code iterator
	source_iter:  Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:        usize,
	/// Byte offset just past the character last consumed
	cursor:       usize,
	/// Line of the next character
	line:         usize,
	/// Column of the next character, counted in characters
	column:       usize,
	/// Where the current lexeme started.
	token_line:   usize,
	token_column: usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, column: 1, token_line: 1, token_column: 1 }
	}

	/// Scan all tokens from the source code
	pub fn scan_tokens(mut self, errors: &mut ErrorTracker) -> Vec<Token<'a>> {
		let mut tokens = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = index;
			self.token_line = self.line;
			self.token_column = self.column;
			match self.scan_token() {
				Ok(Some(r#type)) => {
					let lexeme = self.lexeme();
					tokens.push(Token::new(r#type, lexeme, self.token_line, self.token_column));
				}
				Ok(None) => {}
				Err(e) => errors.report(&e),
			}
		}
		tokens.push(Token::eof(self.line, self.column));
		tracing::debug!(count = tokens.len(), "scanned tokens");
		tokens
	}

	/// Scan a single lexeme, `None` for whitespace and comments.
	fn scan_token(&mut self) -> Result<Option<TokenType<'a>>, ScanError> {
		let Some(next_char) = self.advance() else { return Ok(None) };
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			',' => Comma,
			'.' => Dot,
			'-' => Minus,
			'+' => Plus,
			';' => Semicolon,
			'*' => Star,
			'!' => if self.match_next('=') { BangEqual } else { Bang },
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			'/' => if self.match_next('/') {
				while self.peek().is_some_and(|c| c != '\n') { self.advance(); }
				return Ok(None);
			} else { Slash },
			' ' | '\r' | '\t' | '\n' => return Ok(None),
			'"' => self.string()?,
			c if c.is_ascii_digit() => self.number(),
			c if is_identifier_char(c) => self.identifier(),
			c => return Err(self.error(ScanErrorType::UnexpectedCharacter(c))),
		};

		Ok(Some(r#type))
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character, keeping line and column in step.
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		if c == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the character after the current one
	fn peek_second(&self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	fn lexeme(&self) -> &'a str {
		let source = self.source;
		&source[self.start..self.cursor]
	}

	fn error(&self, r#type: ScanErrorType) -> ScanError {
		ScanError::new(Position::new(self.token_line, self.token_column, self.lexeme()), r#type)
	}

	/// Scan a string literal. There are no escape sequences.
	fn string(&mut self) -> Result<TokenType<'a>, ScanError> {
		while self.peek().is_some_and(|c| c != '"') {
			self.advance();
		}

		if self.peek().is_none() {
			// Reported where scanning stopped, the partial literal is dropped.
			let position = Position::new(self.line, self.column, self.lexeme());
			return Err(ScanError::new(position, ScanErrorType::UnterminatedString));
		}
		self.advance(); // The closing "
		let source = self.source;
		Ok(StringLiteral(&source[self.start + 1..self.cursor - 1]))
	}

	/// Scan a number literal
	fn number(&mut self) -> TokenType<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// A trailing '.' without a digit after it is not part of the number.
		if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			self.advance(); // consume '.'
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		// Digits with an optional `.digits` part always form a valid f64.
		NumberLiteral(self.lexeme().parse().unwrap_or_default())
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType<'a> {
		while self.peek().is_some_and(is_identifier_char) {
			self.advance();
		}
		TokenType::keyword_or_identifier(self.lexeme())
	}
}

/// Letters, marks, numbers, `_` and other symbols, so emoji make fine names.
fn is_identifier_char(c: char) -> bool {
	use GeneralCategory::*;
	c == '_'
		|| matches!(
			get_general_category(c),
			UppercaseLetter
				| LowercaseLetter
				| TitlecaseLetter
				| ModifierLetter
				| OtherLetter
				| NonspacingMark
				| SpacingMark
				| EnclosingMark
				| DecimalNumber
				| LetterNumber
				| OtherNumber
				| OtherSymbol
		)
}

#[cfg(test)]
mod tests {
	use std::{f64::consts::PI, io};

	use pretty_assertions::assert_eq;

	use super::*;
	use crate::utils::RcCell;

	fn scan(input: &str) -> (Vec<Token<'_>>, usize) {
		let mut errors = ErrorTracker::with_output(Box::new(io::sink()));
		let tokens = Scanner::new(input).scan_tokens(&mut errors);
		(tokens, errors.error_count())
	}

	fn types(input: &str) -> Vec<TokenType<'_>> {
		let (tokens, error_count) = scan(input);
		assert_eq!(error_count, 0, "unexpected scan errors for {input:?}");
		tokens.into_iter().map(|t| t.r#type).collect()
	}

	#[test]
	fn scan_punctuation() {
		assert_eq!(types("(( )){}"), vec![LeftParen, LeftParen, RightParen, RightParen, LeftBrace, RightBrace, Eof]);
		assert_eq!(types(",.;-+*/"), vec![Comma, Dot, Semicolon, Minus, Plus, Star, Slash, Eof]);
	}

	#[test]
	fn scan_operators() {
		assert_eq!(types("<= >= !==="), vec![LessEqual, GreaterEqual, BangEqual, EqualEqual, Eof]);
		assert_eq!(types("! = < >"), vec![Bang, Equal, Less, Greater, Eof]);
	}

	#[test]
	fn scan_empty() {
		assert_eq!(types(""), vec![Eof]);
		assert_eq!(types("  \t\r\n  "), vec![Eof]);
	}

	#[test]
	fn scan_comments() {
		assert_eq!(types("// single line comment"), vec![Eof]);
		assert_eq!(types("1 // comment with ()[]{}\n2"), vec![NumberLiteral(1.0), NumberLiteral(2.0), Eof]);
	}

	#[test]
	fn scan_numbers() {
		assert_eq!(types("0 42 3.14"), vec![NumberLiteral(0.0), NumberLiteral(42.0), NumberLiteral(3.14), Eof]);
		assert_eq!(types("1."), vec![NumberLiteral(1.0), Dot, Eof]);
		assert_eq!(types(".5"), vec![Dot, NumberLiteral(5.0), Eof]);
	}

	#[test]
	fn scan_number_precision() {
		assert_eq!(types("3.14159265358979323846264338327950288")[0], NumberLiteral(PI));
	}

	#[test]
	fn scan_strings() {
		assert_eq!(types(r#""hello world""#), vec![StringLiteral("hello world"), Eof]);
		assert_eq!(types(r#""""#), vec![StringLiteral(""), Eof]);
		assert_eq!(types(r#""世界""#), vec![StringLiteral("世界"), Eof]);
	}

	#[test]
	fn scan_string_with_newlines() {
		let (tokens, _) = scan("\"hello\nworld\" x");
		assert_eq!(tokens[0].r#type, StringLiteral("hello\nworld"));
		assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
		assert_eq!((tokens[1].line, tokens[1].column), (2, 8));
	}

	#[test]
	fn scan_unterminated_string() {
		let sink = RcCell::new(Vec::new());
		let mut errors = ErrorTracker::with_output(Box::new(sink.clone()));
		let tokens = Scanner::new("print \"abc\ndef").scan_tokens(&mut errors);

		assert_eq!(tokens.iter().map(|t| t.r#type.clone()).collect::<Vec<_>>(), vec![Print, Eof]);
		assert_eq!(errors.error_count(), 1);
		assert_eq!(sink.contents(), "[line 2:4] at \"\\\"abc\\ndef\": Unterminated string.\n");
	}

	#[test]
	fn scan_keywords() {
		assert_eq!(
			types("and class else false for fn fun if nil or print return super this true var while"),
			vec![
				And, Class, Else, False, For, Fn, Fn, If, Nil, Or, Print, Return, Super, This, True, Var, While, Eof
			]
		);
	}

	#[test]
	fn scan_identifiers() {
		assert_eq!(
			types("x _name myVariable123 and123 naïve 🦀"),
			vec![
				Identifier("x"),
				Identifier("_name"),
				Identifier("myVariable123"),
				Identifier("and123"),
				Identifier("naïve"),
				Identifier("🦀"),
				Eof
			]
		);
	}

	#[test]
	fn scan_errors_carry_their_type() {
		let error = Scanner::new("@").scan_token().unwrap_err();
		assert_eq!(error.r#type(), &ScanErrorType::UnexpectedCharacter('@'));
		assert_eq!(error.to_string(), "[line 1:1] at \"@\": Unexpected character '@'.");

		let error = Scanner::new("\"ab").scan_token().unwrap_err();
		assert_eq!(error.r#type(), &ScanErrorType::UnterminatedString);
	}

	#[test]
	fn unexpected_characters_are_skipped() {
		let (tokens, error_count) = scan("1 @ 2 # 3");
		assert_eq!(error_count, 2);
		let types: Vec<_> = tokens.into_iter().map(|t| t.r#type).collect();
		assert_eq!(types, vec![NumberLiteral(1.0), NumberLiteral(2.0), NumberLiteral(3.0), Eof]);
	}

	#[test]
	fn columns_count_characters_not_bytes() {
		let (tokens, _) = scan("\"é\" x\n  y");
		assert_eq!((tokens[1].lexeme, tokens[1].line, tokens[1].column), ("x", 1, 5));
		assert_eq!((tokens[2].lexeme, tokens[2].line, tokens[2].column), ("y", 2, 3));
		assert_eq!((tokens[3].line, tokens[3].column), (2, 4));
	}

	#[test]
	fn lexemes_rescan_to_same_token() {
		let source = "var π = (1.5 + \"ß\") >= x; // done\nprint π;";
		let (tokens, _) = scan(source);
		for token in tokens.iter().filter(|t| t.r#type != Eof) {
			let (again, _) = scan(token.lexeme);
			assert_eq!(again.len(), 2, "lexeme {:?} did not rescan to one token", token.lexeme);
			assert_eq!(again[0].lexeme, token.lexeme);
			assert_eq!(again[0].r#type, token.r#type);
		}
	}
}
