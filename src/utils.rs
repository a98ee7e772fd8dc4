use std::{
	cell::{Ref, RefCell, RefMut},
	io::Write,
	rc::Rc,
};

/// Clone the RcCell, it's shallow copy
#[derive(Debug, Default)]
pub struct RcCell<T> {
	inner: Rc<RefCell<T>>,
}

impl<T> Clone for RcCell<T> {
	fn clone(&self) -> Self { Self { inner: self.inner.clone() } }
}

impl<T> RcCell<T> {
	pub fn new(value: T) -> Self { Self { inner: Rc::new(RefCell::new(value)) } }

	pub fn borrow(&self) -> Ref<'_, T> { self.inner.borrow() }

	pub fn borrow_mut(&self) -> RefMut<'_, T> { self.inner.borrow_mut() }
}

impl<T> From<T> for RcCell<T> {
	fn from(value: T) -> Self { Self::new(value) }
}

/// A byte buffer that can be handed out as an output sink while a clone is
/// kept around to read back what was written.
impl RcCell<Vec<u8>> {
	pub fn contents(&self) -> String { String::from_utf8_lossy(&self.borrow()).into_owned() }
}

impl Write for RcCell<Vec<u8>> {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.borrow_mut().write(buf) }

	fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}
