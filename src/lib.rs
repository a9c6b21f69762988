//! A collection of classic in-place comparison sorts behind one uniform interface.
//!
//! Every algorithm is a unit struct implementing [`Algorithm`]. The strategy is picked at compile
//! time and the generic entry points forward to it:
//!
//! ```ignore
//! use sort_collection::stable::BubbleSort;
//!
//! let mut v = vec![5, 3, 4, 1, 2];
//! sort_collection::sort::<BubbleSort, _>(&mut v);
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//! ```
//!
//! Each algorithm module additionally exposes `sort` and `sort_by` functions with the same shape
//! as their `slice` counterparts.

use std::ops::{Bound, RangeBounds};

macro_rules! sort_impl {
    ($name:ident, stable: $stable:expr, method: $method:ident) => {
        paste::paste! {
            #[doc = concat!("Strategy type for ", stringify!($name), " sort.")]
            #[derive(Copy, Clone, Debug, Default)]
            pub struct [<$name:camel Sort>];

            impl $crate::Algorithm for [<$name:camel Sort>] {
                const NAME: &'static str = concat!(stringify!($name), "_sort");
                const STABLE: bool = $stable;
                const METHOD: $crate::Method = $crate::Method::$method;

                #[inline]
                fn sort<T, F>(v: &mut [T], is_less: &mut F)
                where
                    F: FnMut(&T, &T) -> bool,
                {
                    [<$name _sort>](v, is_less);
                }
            }

            #[inline]
            pub fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                [<$name _sort>](v, &mut |a: &T, b: &T| a.lt(b));
            }

            #[inline]
            pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                [<$name _sort>](v, &mut |a: &T, b: &T| {
                    compare(a, b) == std::cmp::Ordering::Less
                });
            }
        }
    };
}

mod algorithm;

pub mod stable;
pub mod unstable;

pub use algorithm::{compare_and_swap, descriptors, Algorithm, Descriptor, Method};

/// Sorts `v` in place with strategy `A`, using the natural order of `T`.
#[inline]
pub fn sort<A, T>(v: &mut [T])
where
    A: Algorithm,
    T: Ord,
{
    A::sort(v, &mut T::lt);
}

/// Sorts `v` in place with strategy `A`, using `is_less` to decide whether the first argument
/// must be placed before the second.
///
/// `is_less` must be a strict weak ordering. If it is not, the resulting order is unspecified and
/// exchange based strategies may not terminate, but `v` will always hold exactly the elements it
/// held before.
#[inline]
pub fn sort_by<A, T, F>(v: &mut [T], mut is_less: F)
where
    A: Algorithm,
    F: FnMut(&T, &T) -> bool,
{
    A::sort(v, &mut is_less);
}

/// Sorts the sub-range `range` of `v` with strategy `A`, leaving everything outside the range
/// untouched.
///
/// # Panics
///
/// Panics if `range` is out of bounds or decreasing, the same way slice indexing does.
#[inline]
pub fn sort_range<A, T, R>(v: &mut [T], range: R)
where
    A: Algorithm,
    T: Ord,
    R: RangeBounds<usize>,
{
    sort::<A, T>(sub_range(v, range));
}

/// Sorts the sub-range `range` of `v` with strategy `A` and a custom `is_less` predicate.
///
/// # Panics
///
/// Panics if `range` is out of bounds or decreasing, the same way slice indexing does.
#[inline]
pub fn sort_range_by<A, T, R, F>(v: &mut [T], range: R, is_less: F)
where
    A: Algorithm,
    R: RangeBounds<usize>,
    F: FnMut(&T, &T) -> bool,
{
    sort_by::<A, T, F>(sub_range(v, range), is_less);
}

fn sub_range<T, R: RangeBounds<usize>>(v: &mut [T], range: R) -> &mut [T] {
    let bounds: (Bound<usize>, Bound<usize>) =
        (range.start_bound().cloned(), range.end_bound().cloned());

    &mut v[bounds]
}
