use std::fmt;

use crate::stable::{BubbleSort, GnomeSort, InsertionSort, MergeSort, ShakerSort};
use crate::unstable::{CombSort, SelectionSort, ShellSort};

/// How an algorithm moves elements into place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Repeatedly exchanges out of order pairs.
    Exchange,
    /// Picks the next element in order from the unsorted rest.
    Selection,
    /// Inserts each element into an already sorted prefix.
    Insertion,
    /// Merges sorted runs through a scratch buffer.
    Merge,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Exchange => "exchange",
            Method::Selection => "selection",
            Method::Insertion => "insertion",
            Method::Merge => "merge",
        };

        f.write_str(name)
    }
}

/// Static metadata of a strategy, see [`Algorithm::descriptor`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Descriptor {
    pub name: &'static str,
    pub stable: bool,
    pub method: Method,
}

/// The shape every sorting strategy conforms to.
///
/// Implementors are stateless, the only thing they mutate is the slice handed to [`sort`].
///
/// [`sort`]: Algorithm::sort
pub trait Algorithm {
    const NAME: &'static str;

    /// Whether elements that compare equal keep their relative order.
    const STABLE: bool;

    const METHOD: Method;

    /// Sorts `v` in place so that no element is `is_less` than its predecessor.
    fn sort<T, F>(v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool;

    fn descriptor() -> Descriptor {
        Descriptor {
            name: Self::NAME,
            stable: Self::STABLE,
            method: Self::METHOD,
        }
    }
}

/// Metadata of every strategy in this crate.
pub fn descriptors() -> [Descriptor; 8] {
    [
        BubbleSort::descriptor(),
        ShakerSort::descriptor(),
        CombSort::descriptor(),
        GnomeSort::descriptor(),
        SelectionSort::descriptor(),
        InsertionSort::descriptor(),
        ShellSort::descriptor(),
        MergeSort::descriptor(),
    ]
}

/// Swaps `v[lhs]` and `v[rhs]` if `is_less(&v[lhs], &v[rhs])`, returns whether it did.
///
/// The exchange based strategies call this with `lhs` being the later position, so equal elements
/// are never exchanged.
///
/// # Panics
///
/// Panics if `lhs` or `rhs` are out of bounds.
#[inline]
pub fn compare_and_swap<T, F>(v: &mut [T], lhs: usize, rhs: usize, is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&v[lhs], &v[rhs]) {
        v.swap(lhs, rhs);
        true
    } else {
        false
    }
}
