//! Symbol module - String interning for identifiers.
//!
//! A [`Symbol`] is a compact (4-byte) handle to an interned string. Equal
//! strings always intern to the same symbol, so comparing symbols is an
//! integer comparison.
//!
//! # Examples
//!
//! ```
//! use larkc_util::symbol::Symbol;
//!
//! let s1 = Symbol::intern("hello");
//! let s2 = Symbol::intern("hello");
//! let s3 = Symbol::intern("world");
//!
//! assert_eq!(s1, s2);
//! assert_ne!(s1, s3);
//! assert_eq!(s3.as_str(), "world");
//! ```

mod interner;

use std::fmt;

pub use interner::{StringTable, STRING_TABLE};

/// Statistics about the string interner for profiling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Number of interned strings
    pub count: usize,
    /// Number of cache hits (string already interned)
    pub hits: usize,
    /// Number of cache misses (new string allocation)
    pub misses: usize,
}

impl InternerStats {
    /// Fraction of intern calls that found an existing entry.
    ///
    /// Returns `0.0` when nothing has been interned yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// A handle to an interned string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    /// Index into the global string table
    pub(crate) index: u32,
}

static_assertions::assert_eq_size!(Symbol, u32);

impl Symbol {
    /// Intern a string, returning its symbol
    ///
    /// ```
    /// use larkc_util::symbol::Symbol;
    ///
    /// let name = Symbol::intern("main");
    /// assert_eq!(Symbol::intern("main"), name);
    /// ```
    #[inline]
    pub fn intern(string: &str) -> Self {
        STRING_TABLE.intern(string)
    }

    /// Get the string value associated with this symbol
    ///
    /// Returns an empty string if the symbol was never produced by
    /// [`Symbol::intern`].
    #[inline]
    pub fn as_str(&self) -> &'static str {
        STRING_TABLE.get(*self).unwrap_or("")
    }

    /// Check if the symbol's string is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Get the length of the symbol's string in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Statistics of the global interner.
    pub fn stats() -> InternerStats {
        STRING_TABLE.stats()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(string: &str) -> Self {
        Symbol::intern(string)
    }
}
