//! Stack growth for the recursive stages.
//!
//! Parsing, evaluation, printing and dropping a tree all recurse once per
//! nesting level, so a deeply nested program would overflow the native stack.
//! Every recursive step runs through [`ensure_sufficient_stack`], which moves
//! onto a fresh stack segment when the current one runs low.

/// Grow when less than this much stack is left.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
	stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R { f() }
