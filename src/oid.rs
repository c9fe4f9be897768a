//! ASN.1 Object Identifiers.
//!
//! This module contains the [`Oid`] type that implements object identifiers,
//! a construct used by ANS.1 to uniquely identify all sorts of things. The
//! type is also re-exported at the top-level.

use std::fmt;
use smallvec::SmallVec;


//------------ Oid -----------------------------------------------------------

/// An object identifer.
///
/// Object identifiers are globally unique, hierarchical values that are used
/// to identify objects or their type. When written, they are presented as a
/// sequence of integers separated by dots such as ‘1.3.6.1.5.5.7.1’ or with
/// the integers separated by white space and enclosed in curly braces such
/// as ‘{ 1 3 6 1 5 5 7 1 }’. These integers are called arcs.
///
/// Values of this type are created from the content octets of an encoded
/// object identifier and keep the decoded arcs. Creation never fails: if
/// the encoding is broken, all arcs up to the problem are kept and
/// [`validate`][Self::validate] returns `false`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Oid {
    /// The arcs decoded so far.
    arcs: SmallVec<[u32; 10]>,

    /// Whether the encoding was correct.
    valid: bool,
}

impl Oid {
    /// Creates an object identifier from its content octets.
    ///
    /// The content is a sequence of subidentifiers. Each of them is encoded
    /// in base 128 with the most significant bit of each octet indicating
    /// whether more octets follow. The first subidentifier encodes both the
    /// first and second arc.
    pub fn from_content(content: &[u8]) -> Self {
        let mut arcs = SmallVec::<[u32; 10]>::new();
        let mut valid = !content.is_empty();
        for subid in Subidentifiers::new(content) {
            let subid = match subid {
                Some(subid) => subid,
                None => {
                    valid = false;
                    break
                }
            };
            if arcs.is_empty() {
                // The first arc is 0, 1, or 2. For 0 and 1, the second is
                // limited to 0..39, for 2 it is everything else.
                let (first, second) = match subid {
                    0..=39 => (0, subid),
                    40..=79 => (1, subid - 40),
                    _ => (2, subid - 80),
                };
                arcs.push(first);
                arcs.push(second);
            }
            else {
                arcs.push(subid);
            }
        }
        Oid { arcs, valid }
    }

    /// Returns whether the encoding of the object identifier was correct.
    ///
    /// It has to contain at least one subidentifier, each of which must be
    /// encoded in the minimal number of octets, must end in an octet with
    /// the most significant bit cleared, and must fit into a `u32`.
    pub fn validate(&self) -> bool {
        self.valid
    }

    /// Returns the arcs of the object identifier.
    pub fn arcs(&self) -> &[u32] {
        self.arcs.as_ref()
    }

    /// Returns an iterator over the arcs.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.arcs.iter().copied()
    }

    /// Returns whether the identifier has exactly the given arcs.
    pub fn matches(&self, arcs: &[u32]) -> bool {
        self.valid && self.arcs() == arcs
    }
}


//--- Display

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut arcs = self.iter();
        if let Some(first) = arcs.next() {
            write!(f, "{}", first)?;
        }
        for arc in arcs {
            write!(f, ".{}", arc)?;
        }
        if !self.valid {
            f.write_str(" (invalid)")?;
        }
        Ok(())
    }
}


//------------ Subidentifiers ------------------------------------------------

/// An iterator over the subidentifiers in an object identifier.
///
/// Each item is either the value of the subidentifier or `None` if it isn’t
/// correctly encoded. After the first `None`, the iterator is exhausted.
struct Subidentifiers<'a> {
    /// The remainder of the object identifier’s encoded octets.
    slice: &'a [u8],
}

impl<'a> Subidentifiers<'a> {
    fn new(slice: &'a [u8]) -> Self {
        Subidentifiers { slice }
    }
}

impl<'a> Iterator for Subidentifiers<'a> {
    type Item = Option<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let slice = self.slice;
        let &first = slice.first()?;

        // A leading 0x80 would be a superfluous zero.
        if first == 0x80 {
            self.slice = b"";
            return Some(None)
        }

        let mut res = 0u32;
        for (i, &octet) in slice.iter().enumerate() {
            res = match res.checked_mul(0x80) {
                Some(res) => res | u32::from(octet & 0x7F),
                None => {
                    self.slice = b"";
                    return Some(None)
                }
            };
            if octet & 0x80 == 0 {
                self.slice = slice.get(i + 1..).unwrap_or_default();
                return Some(Some(res))
            }
        }

        // Last octet has bit 8 set.
        self.slice = b"";
        Some(None)
    }
}


//============ Tests =========================================================
