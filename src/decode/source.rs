//! Where decoded data comes from.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use std::fmt;


//------------ SliceSource ---------------------------------------------------

/// A bounds-checked cursor over a bytes slice.
///
/// The source hands out sub-slices of the original data which keep the
/// lifetime of the data rather than that of the source. This is what allows
/// decoded values to point right into the data without copying.
///
/// The source also keeps track of its position in the data originally handed
/// to the decoder. If it is created for a part of some larger data, this
/// position starts at the offset of that part.
#[derive(Clone, Copy, Debug)]
pub struct SliceSource<'s> {
    /// The remaining data.
    data: &'s [u8],

    /// The position of the first octet of `data`.
    pos: usize,
}

impl<'s> SliceSource<'s> {
    /// Creates a new source starting at position zero.
    pub fn new(data: &'s [u8]) -> Self {
        Self::with_pos(data, 0)
    }

    /// Creates a new source for data that starts at the given position.
    pub fn with_pos(data: &'s [u8], pos: usize) -> Self {
        SliceSource { data, pos }
    }

    /// Returns the data that hasn’t been consumed yet.
    pub fn remaining(&self) -> &'s [u8] {
        self.data
    }

    /// Returns whether all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the position of the next octet.
    pub fn pos(&self) -> Pos {
        self.pos.into()
    }

    /// Returns the position of the next octet as a plain offset.
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    /// Takes a single octet from the source.
    ///
    /// Returns `None` if there aren’t any more octets available.
    pub fn take_opt_u8(&mut self) -> Option<u8> {
        let (&first, tail) = self.data.split_first()?;
        self.data = tail;
        self.pos += 1;
        Some(first)
    }

    /// Returns the n-th octet if that many octets are available.
    ///
    /// Does not consume anything.
    pub fn peek_nth(&self, n: usize) -> Option<u8> {
        self.data.get(n).copied()
    }

    /// Takes exactly `len` octets from the source.
    ///
    /// Returns `None` and leaves the source untouched if there aren’t
    /// enough octets.
    pub fn take_exact(&mut self, len: usize) -> Option<&'s [u8]> {
        let (head, tail) = self.data.split_at_checked(len)?;
        self.data = tail;
        self.pos += len;
        Some(head)
    }
}


//------------ Pos -----------------------------------------------------------

/// The logical position within a source.
///
/// Values of this type can only be used for diagnostics. They can not be used
/// to determine how far a source has been advanced since it was created. This
/// is why we used a newtype.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Pos(usize);

impl Pos {
    /// Returns the position as an offset into the decoded data.
    pub fn to_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for Pos {
    fn from(pos: usize) -> Pos {
        Pos(pos)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn take_and_peek() {
        let data = b"\x01\x02\x03\x04";
        let mut source = SliceSource::with_pos(data, 10);
        assert_eq!(source.peek_nth(1), Some(2));
        assert_eq!(source.peek_nth(4), None);
        assert_eq!(source.take_opt_u8(), Some(1));
        assert_eq!(source.pos(), Pos::from(11));
        assert_eq!(source.take_exact(4), None);
        assert_eq!(source.pos(), Pos::from(11));
        assert_eq!(source.take_exact(3), Some(b"\x02\x03\x04".as_ref()));
        assert!(source.is_empty());
        assert_eq!(source.take_opt_u8(), None);
        assert_eq!(source.pos().to_usize(), 14);
    }
}
