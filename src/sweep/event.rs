/// Handle of an endpoint record in the event store. Even handles are left
/// (lexicographically smaller) endpoints of their segment piece, odd
/// handles right ones; divisions preserve the parity convention.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Event(pub(crate) usize);

impl Event {
  pub fn is_left(self) -> bool {
    self.0 & 1 == 0
  }

  pub fn is_right(self) -> bool {
    !self.is_left()
  }

  /// Index into the per-piece side tables; left events only.
  pub(crate) fn position(self) -> usize {
    debug_assert!(self.is_left());
    self.0 >> 1
  }
}

impl std::fmt::Debug for Event {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(fmt, "e{}", self.0)
  }
}
