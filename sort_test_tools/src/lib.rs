use std::cmp::Ordering;

/// What the generic tests need to know about the sort under test.
pub trait Sort {
    fn name() -> String;

    /// Stability is only asserted for sorts returning true.
    fn is_stable() -> bool;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
pub mod types;
