//! Boyer-Moore exact substring search over bytes.
//!
//! [`ByteMatcher`] preprocesses a needle once and can then be reused for any
//! number of searches. It backs [`ByteString::index_of`],
//! [`ByteString::replace`] and [`ByteString::split`].
//!
//! # Example
//!
//! ```
//! use binstr_core::boyer_moore::ByteMatcher;
//!
//! let matcher = ByteMatcher::new(b"needle");
//! assert_eq!(matcher.find(b"haystack with a needle in it"), Some(16));
//! assert_eq!(matcher.find(b"just hay"), None);
//! ```
//!
//! [`ByteString::index_of`]: crate::ByteString::index_of
//! [`ByteString::replace`]: crate::ByteString::replace
//! [`ByteString::split`]: crate::ByteString::split

/// Number of distinct byte values.
const ALPHABET_SIZE: usize = 256;

/// A preprocessed needle for Boyer-Moore searching.
///
/// Both shift tables are computed at construction and never change, so a
/// matcher can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct ByteMatcher {
    needle: Vec<u8>,
    /// Bad-character shifts: distance from the needle's end to the last
    /// occurrence of each byte, or the needle length when absent.
    char_table: [usize; ALPHABET_SIZE],
    /// Good-suffix shifts, indexed by the length of the matched suffix.
    offset_table: Vec<usize>,
}

impl ByteMatcher {
    /// Create a matcher for the given needle.
    pub fn new(needle: impl AsRef<[u8]>) -> Self {
        let needle = needle.as_ref().to_vec();
        let char_table = make_char_table(&needle);
        let offset_table = make_offset_table(&needle);
        Self {
            needle,
            char_table,
            offset_table,
        }
    }

    /// The needle this matcher searches for.
    pub fn needle(&self) -> &[u8] {
        &self.needle
    }

    /// Find the first occurrence of the needle in `haystack`.
    ///
    /// An empty needle matches at index 0.
    pub fn find(&self, haystack: &[u8]) -> Option<usize> {
        let n = self.needle.len();
        if n == 0 {
            return Some(0);
        }

        let mut i = n - 1;
        while i < haystack.len() {
            let mut j = n - 1;
            while self.needle[j] == haystack[i] {
                if j == 0 {
                    return Some(i);
                }
                i -= 1;
                j -= 1;
            }
            i += self.offset_table[n - 1 - j].max(self.char_table[haystack[i] as usize]);
        }

        None
    }

    /// Find the first occurrence of the needle at or after `start`.
    pub fn find_from(&self, haystack: &[u8], start: usize) -> Option<usize> {
        if start > haystack.len() {
            return None;
        }
        self.find(&haystack[start..]).map(|index| index + start)
    }

    /// Iterate over the start offsets of all non-overlapping matches.
    ///
    /// An empty needle yields no matches.
    pub fn find_iter<'m, 'h>(&'m self, haystack: &'h [u8]) -> Matches<'m, 'h> {
        Matches {
            matcher: self,
            haystack,
            position: 0,
        }
    }
}

/// Iterator over non-overlapping matches, created by [`ByteMatcher::find_iter`].
#[derive(Debug)]
pub struct Matches<'m, 'h> {
    matcher: &'m ByteMatcher,
    haystack: &'h [u8],
    position: usize,
}

impl Iterator for Matches<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.matcher.needle.is_empty() {
            return None;
        }
        let index = self.matcher.find_from(self.haystack, self.position)?;
        self.position = index + self.matcher.needle.len();
        Some(index)
    }
}

fn make_char_table(needle: &[u8]) -> [usize; ALPHABET_SIZE] {
    let n = needle.len();
    let mut table = [n; ALPHABET_SIZE];
    for (i, &byte) in needle.iter().enumerate() {
        table[byte as usize] = n - 1 - i;
    }
    table
}

fn make_offset_table(needle: &[u8]) -> Vec<usize> {
    let n = needle.len();
    let mut table = vec![0; n];

    let mut last_prefix_position = n;
    for i in (1..=n).rev() {
        if is_prefix(needle, i) {
            last_prefix_position = i;
        }
        table[n - i] = last_prefix_position - i + n;
    }

    for i in 0..n.saturating_sub(1) {
        let slen = suffix_length(needle, i);
        table[slen] = n - 1 - i + slen;
    }

    table
}

/// Whether `needle[p..]` is also a prefix of `needle`.
fn is_prefix(needle: &[u8], p: usize) -> bool {
    needle[p..] == needle[..needle.len() - p]
}

/// Length of the longest common suffix of `needle[..=p]` and `needle`.
fn suffix_length(needle: &[u8], p: usize) -> usize {
    needle[..=p]
        .iter()
        .rev()
        .zip(needle.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}
