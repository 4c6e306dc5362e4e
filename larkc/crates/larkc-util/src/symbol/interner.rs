//! String interner implementation using DashMap for concurrent access.
//!
//! Lookups on the hit path only touch the DashMap shards. New strings are
//! appended under a write lock on the index table, so two threads racing to
//! intern the same text still receive the same symbol.

use ahash::RandomState;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::LazyLock;

use super::{InternerStats, Symbol};
use crate::error::{SymbolError, SymbolResult};

/// Global string table instance, initialized on first use.
pub static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(StringTable::new);

/// Thread-safe string table.
///
/// Interned strings are leaked to obtain `'static` references. They are
/// never removed, so a [`Symbol`] stays valid for the whole process.
pub struct StringTable {
    /// Text to index, for the intern fast path.
    map: DashMap<&'static str, u32, RandomState>,

    /// Index to text, for [`Symbol::as_str`].
    strings: RwLock<Vec<&'static str>>,

    /// Number of cache hits (string already interned)
    hits: AtomicUsize,

    /// Number of cache misses (new string allocation)
    misses: AtomicUsize,
}

static_assertions::assert_impl_all!(StringTable: Send, Sync);

impl StringTable {
    fn new() -> Self {
        Self {
            map: DashMap::with_capacity_and_hasher(256, RandomState::new()),
            strings: RwLock::new(Vec::with_capacity(256)),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Intern a string, returning its symbol.
    pub fn intern(&self, string: &str) -> Symbol {
        if let Some(index) = self.map.get(string) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Symbol { index: *index };
        }

        let mut strings = self.strings.write();

        // Another thread may have won the race while we waited for the lock.
        if let Some(index) = self.map.get(string) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Symbol { index: *index };
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let interned: &'static str = Box::leak(string.to_owned().into_boxed_str());
        let index = strings.len() as u32;
        strings.push(interned);
        self.map.insert(interned, index);
        Symbol { index }
    }

    /// Look up the text of a symbol.
    pub fn get(&self, symbol: Symbol) -> SymbolResult<&'static str> {
        self.strings
            .read()
            .get(symbol.index as usize)
            .copied()
            .ok_or(SymbolError::NotFound {
                index: symbol.index,
            })
    }

    /// Snapshot of the interner counters.
    pub fn stats(&self) -> InternerStats {
        InternerStats {
            count: self.strings.read().len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
