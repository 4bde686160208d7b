//! Visited sets for graph traversals.
//!
//! Three backings are provided:
//! - `VisitedBits`: a dense, word-packed bitset keyed by node index
//! - `KeyedVisitMap<N, S>`: a sparse set that refuses ids outside the graph
//! - `HashSet<N, S>`: a sparse set keyed by raw node identifiers, accepting any id
//!
//! Traversals depend only on the `VisitMap` contract, so the storage choice
//! belongs to the graph (through `Visitable`) and is invisible to algorithms.

use std::collections::hash_map::RandomState;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

/// A mutable set of visited nodes.
///
/// Once `visit(a)` has returned `true`, `a` stays visited until the map is
/// reset. A map may refuse ids outside its universe; `visit` then returns
/// `false` and traversals treat the id as unreachable.
pub trait VisitMap<N> {
    /// Marks `a` visited. Returns `true` iff this call performed the first visit.
    fn visit(&mut self, a: N) -> bool;

    /// Returns `true` if `a` has been visited.
    fn is_visited(&self, a: N) -> bool;
}

impl<N, S> VisitMap<N> for HashSet<N, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn visit(&mut self, a: N) -> bool {
        self.insert(a)
    }

    #[inline]
    fn is_visited(&self, a: N) -> bool {
        self.contains(&a)
    }
}

/// A sparse visit map bounded by a shared key set.
///
/// `visit` refuses any id missing from the key set, so a graph keyed by
/// arbitrary ids can still make traversals from an absent node emit nothing.
/// The key set is shared with the graph; each map owns only its visited set.
///
/// ```
/// use std::collections::HashSet;
/// use std::sync::Arc;
/// use halo_visit::visit::{KeyedVisitMap, VisitMap};
///
/// let keys: Arc<HashSet<u64>> = Arc::new([7, 42].into_iter().collect());
/// let mut map = KeyedVisitMap::new(keys);
/// assert!(map.visit(42));
/// assert!(!map.visit(999));
/// assert!(!map.is_visited(999));
/// ```
#[derive(Clone, Debug)]
pub struct KeyedVisitMap<N, S = RandomState> {
    keys: Arc<HashSet<N, S>>,
    visited: HashSet<N, S>,
}

impl<N, S> KeyedVisitMap<N, S>
where
    N: Eq + Hash,
    S: BuildHasher + Clone,
{
    /// Creates an empty map over `keys`.
    pub fn new(keys: Arc<HashSet<N, S>>) -> Self {
        let visited = HashSet::with_capacity_and_hasher(keys.len(), keys.hasher().clone());
        Self { keys, visited }
    }

    /// The ids this map accepts.
    #[inline]
    pub fn keys(&self) -> &HashSet<N, S> {
        &self.keys
    }

    /// Number of visited ids.
    #[inline]
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if nothing has been visited.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Forgets every visit. The key set is kept.
    pub fn clear(&mut self) {
        self.visited.clear();
    }
}

impl<N, S> VisitMap<N> for KeyedVisitMap<N, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    /// Ids outside the key set are refused.
    #[inline]
    fn visit(&mut self, a: N) -> bool {
        self.keys.contains(&a) && self.visited.insert(a)
    }

    #[inline]
    fn is_visited(&self, a: N) -> bool {
        self.visited.contains(&a)
    }
}

const WORD_BITS: usize = usize::BITS as usize;

#[inline(always)]
fn bit_word_mask(bit: usize) -> (usize, usize) {
    (bit / WORD_BITS, 1usize << (bit % WORD_BITS))
}

/// A dense, word-packed bitset.
///
/// Used as the visit map of index-addressed graphs, as a node filter, and as
/// a flattened adjacency matrix.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new` | \(O(n / w)\) |
/// | `set` / `is_set` | \(O(1)\) |
/// | `clear_all` | \(O(n / w)\) |
/// | `count_ones` | \(O(n / w)\) |
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitedBits {
    bits: usize,
    words: Vec<usize>,
}

impl VisitedBits {
    /// Creates a new bitset with `bits` bits, all cleared.
    pub fn new(bits: usize) -> Self {
        Self {
            bits,
            words: vec![0; bits.div_ceil(WORD_BITS)],
        }
    }

    /// Number of bits.
    #[inline]
    pub fn len_bits(&self) -> usize {
        self.bits
    }

    /// Clears all bits.
    pub fn clear_all(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    /// Resizes to `bits` bits. New bits are cleared; shrinking drops the tail.
    pub fn resize(&mut self, bits: usize) {
        self.words.resize(bits.div_ceil(WORD_BITS), 0);
        if bits < self.bits {
            // Keep the unused tail of the last word clear.
            let tail = bits % WORD_BITS;
            if tail != 0 {
                if let Some(last) = self.words.last_mut() {
                    *last &= (1usize << tail) - 1;
                }
            }
        }
        self.bits = bits;
    }

    /// Returns whether `bit` is set. Out-of-range bits read as cleared.
    #[inline]
    pub fn is_set(&self, bit: usize) -> bool {
        if bit >= self.bits {
            return false;
        }
        let (word, mask) = bit_word_mask(bit);
        self.words[word] & mask != 0
    }

    /// Sets `bit` and returns `true` iff it was previously cleared.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    #[inline]
    pub fn set(&mut self, bit: usize) -> bool {
        assert!(bit < self.bits, "bit {bit} out of bounds for len {}", self.bits);
        let (word, mask) = bit_word_mask(bit);
        let prev = self.words[word];
        self.words[word] = prev | mask;
        prev & mask == 0
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates over the indices of set bits in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let mut w = word;
            std::iter::from_fn(move || {
                if w == 0 {
                    return None;
                }
                let tz = w.trailing_zeros() as usize;
                w &= w - 1;
                Some(wi * WORD_BITS + tz)
            })
        })
    }
}

impl FromIterator<usize> for VisitedBits {
    /// Builds a bitset just large enough to hold every collected index.
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let items: Vec<usize> = iter.into_iter().collect();
        let bits = items.iter().max().map_or(0, |&m| m + 1);
        let mut set = VisitedBits::new(bits);
        for i in items {
            set.set(i);
        }
        set
    }
}

impl VisitMap<usize> for VisitedBits {
    /// Indices at or beyond `len_bits()` are refused.
    #[inline]
    fn visit(&mut self, a: usize) -> bool {
        a < self.bits && self.set(a)
    }

    #[inline]
    fn is_visited(&self, a: usize) -> bool {
        self.is_set(a)
    }
}
