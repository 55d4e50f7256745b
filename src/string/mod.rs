//! Bounded mutable string
//!
//! A fixed-capacity owning string buffer:
//! - Capacity is chosen at construction and never changes
//! - Logical length is tracked separately from capacity
//! - Appends that would overflow are rejected, never truncated
//! - Comparison, concatenation, search, and in-place replacement operate
//!   on logical content only; capacity is invisible to them

use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::mem;
use std::ops::{Add, AddAssign, Index};

use thiserror::Error;

/// Errors from fallible [`BoundedString`] operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StringError {
    #[error("capacity exceeded ({needed} bytes > {capacity} bytes)")]
    CapacityExceeded { needed: usize, capacity: usize },

    #[error("index out of range ({index} >= {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A mutable string that can never outgrow the capacity it was built with.
///
/// The buffer is allocated once, up front. Every mutation either succeeds
/// in full or fails with a [`StringError`] and leaves the content exactly
/// as it was.
pub struct BoundedString {
    /// `capacity + 1` bytes; `buf[len]` is always the NUL terminator.
    buf: Box<[u8]>,
    /// Number of meaningful bytes, always `<= capacity`.
    len: usize,
}

impl BoundedString {
    /// Create an empty string that can hold up to `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity + 1].into_boxed_slice(),
            len: 0,
        }
    }

    /// Create a string holding `text`, with room for up to `capacity` bytes.
    ///
    /// Fails with [`StringError::CapacityExceeded`] when `text` does not fit;
    /// the text is never silently cut down to size.
    pub fn from_str_bounded(text: &str, capacity: usize) -> Result<Self, StringError> {
        if text.len() > capacity {
            return Err(StringError::CapacityExceeded {
                needed: text.len(),
                capacity,
            });
        }
        let mut s = Self::with_capacity(capacity);
        s.buf[..text.len()].copy_from_slice(text.as_bytes());
        s.len = text.len();
        Ok(s)
    }

    /// Maximum number of content bytes this string can ever hold.
    pub fn capacity(&self) -> usize {
        self.buf.len() - 1
    }

    /// Current content length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop the content without touching capacity.
    pub fn clear(&mut self) {
        self.len = 0;
        self.buf[0] = 0;
    }

    /// Borrow the content as `&str`. No copy, no mutation.
    pub fn as_str(&self) -> &str {
        // Safety: content only ever comes from `&str`/`char` inputs and is
        // written whole, so `buf[..len]` is always valid UTF-8.
        unsafe { std::str::from_utf8_unchecked(&self.buf[..self.len]) }
    }

    /// Borrow the content bytes, excluding the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Address of the underlying buffer. Stable across moves of ownership
    /// (see [`take`](Self::take)); mainly useful for asserting that.
    pub fn as_ptr(&self) -> *const u8 {
        self.buf.as_ptr()
    }

    /// Append `text` to the end of the content.
    ///
    /// Fails with [`StringError::CapacityExceeded`] when the result would
    /// not fit, in which case the content is unchanged.
    pub fn push_str(&mut self, text: &str) -> Result<(), StringError> {
        let needed = self.len + text.len();
        if needed > self.capacity() {
            return Err(StringError::CapacityExceeded {
                needed,
                capacity: self.capacity(),
            });
        }
        self.buf[self.len..needed].copy_from_slice(text.as_bytes());
        self.len = needed;
        self.buf[self.len] = 0;
        Ok(())
    }

    /// Append `text` followed by a newline.
    ///
    /// Atomic: if `text` plus the newline does not fit, nothing is appended.
    pub fn push_line(&mut self, text: &str) -> Result<(), StringError> {
        let needed = self.len + text.len() + 1;
        if needed > self.capacity() {
            return Err(StringError::CapacityExceeded {
                needed,
                capacity: self.capacity(),
            });
        }
        self.push_str(text)?;
        self.push_str("\n")
    }

    /// Content byte at `index`.
    ///
    /// Checked counterpart of the `[]` operator: out-of-range indexes fail
    /// with [`StringError::IndexOutOfRange`] instead of panicking.
    pub fn byte_at(&self, index: usize) -> Result<u8, StringError> {
        if index >= self.len {
            return Err(StringError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.buf[index])
    }

    /// Replace every occurrence of `from` with `to`, in place.
    ///
    /// When both characters encode to the same number of bytes the content
    /// length is preserved. A replacement that widens the content past
    /// capacity fails with [`StringError::CapacityExceeded`] and changes
    /// nothing.
    pub fn replace_char(&mut self, from: char, to: char) -> Result<(), StringError> {
        if from.is_ascii() && to.is_ascii() {
            for b in &mut self.buf[..self.len] {
                if *b == from as u8 {
                    *b = to as u8;
                }
            }
            return Ok(());
        }
        let mut to_utf8 = [0u8; 4];
        let replaced = self.as_str().replace(from, to.encode_utf8(&mut to_utf8));
        if replaced.len() > self.capacity() {
            return Err(StringError::CapacityExceeded {
                needed: replaced.len(),
                capacity: self.capacity(),
            });
        }
        self.buf[..replaced.len()].copy_from_slice(replaced.as_bytes());
        self.len = replaced.len();
        self.buf[self.len] = 0;
        Ok(())
    }

    /// Byte index of the first occurrence of `needle` in the content,
    /// or `None` if it does not occur.
    ///
    /// An empty needle returns `None`. That matches the exercise this type
    /// reproduces; a conventional substring search would return `Some(0)`.
    pub fn index_of(&self, needle: &str) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        self.as_str().find(needle)
    }

    /// Move the content and buffer out of `self`, leaving it empty with
    /// zero capacity.
    ///
    /// The returned string keeps the same allocation; no bytes are copied.
    pub fn take(&mut self) -> BoundedString {
        mem::take(self)
    }

    /// Write the content to `w`. The exercise's "print" operation, with the
    /// output collaborator made explicit.
    pub fn write_to<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(self.as_bytes())
    }
}

impl Default for BoundedString {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl Clone for BoundedString {
    /// Deep copy: same capacity, same content, independent storage.
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            len: self.len,
        }
    }
}

impl fmt::Debug for BoundedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedString")
            .field("content", &self.as_str())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl fmt::Display for BoundedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equality over logical content only; capacity never participates.
impl PartialEq for BoundedString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for BoundedString {}

/// Lexicographic byte ordering over logical content; a strict prefix sorts
/// before the longer string.
impl Ord for BoundedString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialOrd for BoundedString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for &BoundedString {
    type Output = BoundedString;

    /// Concatenate without mutating either operand. The result's capacity
    /// is the sum of the operands' capacities, so the combined content
    /// always fits.
    fn add(self, rhs: &BoundedString) -> BoundedString {
        let mut out = BoundedString::with_capacity(self.capacity() + rhs.capacity());
        out.buf[..self.len].copy_from_slice(self.as_bytes());
        out.buf[self.len..self.len + rhs.len].copy_from_slice(rhs.as_bytes());
        out.len = self.len + rhs.len;
        out
    }
}

impl Add for BoundedString {
    type Output = BoundedString;

    fn add(self, rhs: BoundedString) -> BoundedString {
        &self + &rhs
    }
}

impl AddAssign<&BoundedString> for BoundedString {
    /// Append `rhs` in place.
    ///
    /// Panics when the receiver's capacity would be exceeded; use
    /// [`BoundedString::push_str`] where the overflow must be handled.
    fn add_assign(&mut self, rhs: &BoundedString) {
        if let Err(e) = self.push_str(rhs.as_str()) {
            panic!("{e}");
        }
    }
}

impl Index<usize> for BoundedString {
    type Output = u8;

    /// Content byte at `index`.
    ///
    /// Panics when `index >= len()`, like slice indexing; the checked
    /// counterpart is [`BoundedString::byte_at`].
    fn index(&self, index: usize) -> &u8 {
        if index >= self.len {
            panic!(
                "{}",
                StringError::IndexOutOfRange {
                    index,
                    len: self.len,
                }
            );
        }
        &self.buf[index]
    }
}
