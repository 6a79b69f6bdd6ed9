// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// A 1-based case number.
///
/// Case files number their cases from one, while everything in memory is
/// indexed from zero; wrapping the former in its own type keeps the two
/// spaces apart at compile time. `#[repr(transparent)]` over `usize`, so
/// the wrapper is free.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CaseNumber(usize);

impl CaseNumber {
    /// The first case of a session.
    pub const FIRST: CaseNumber = CaseNumber(1);

    /// Creates a new `CaseNumber`.
    ///
    /// # Panics
    ///
    /// Panics if `number` is zero; case numbering is 1-based.
    #[inline]
    pub fn new(number: usize) -> Self {
        assert!(
            number > 0,
            "called `CaseNumber::new` with case number 0; case numbering is 1-based"
        );
        Self(number)
    }

    /// Returns the case number as a plain `usize`.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns the number of the case that follows this one.
    #[inline]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<CaseNumber> for usize {
    #[inline]
    fn from(number: CaseNumber) -> Self {
        number.get()
    }
}

impl std::fmt::Display for CaseNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_get_and_next() {
        let n = CaseNumber::new(3);
        assert_eq!(n.get(), 3);
        assert_eq!(n.next(), CaseNumber::new(4));
        assert_eq!(CaseNumber::FIRST.get(), 1);
    }

    #[test]
    #[should_panic(expected = "case numbering is 1-based")]
    fn test_zero_is_rejected() {
        let _ = CaseNumber::new(0);
    }

    #[test]
    fn test_display_is_the_bare_number() {
        assert_eq!(CaseNumber::new(12).to_string(), "12");
    }

    #[test]
    fn test_ordering_follows_file_order() {
        assert!(CaseNumber::new(1) < CaseNumber::new(2));
        assert_eq!(usize::from(CaseNumber::new(7)), 7);
    }
}
