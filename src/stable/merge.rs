use std::mem;
use std::ptr;

use crate::compare_and_swap;

sort_impl!(merge, stable: true, method: Merge);

/// Top-down merge sort.
///
/// Allocates one scratch buffer of `v.len()` elements before touching `v`, the recursion reuses
/// it for every merge step.
fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // The buffer keeps length 0 so it only ever holds shallow copies of the contents of `v`,
    // there are no dtors to run on these copies if `is_less` panics.
    let mut buf = Vec::<T>::with_capacity(len);

    // SAFETY: `buf` has capacity for `len` elements and `T` is not zero-sized.
    unsafe {
        merge_sort_recursive(v, buf.as_mut_ptr(), is_less);
    }
}

/// # Safety
///
/// `buf` must be valid for writes of `v.len()` elements and must not alias `v`.
unsafe fn merge_sort_recursive<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    if len == 2 {
        compare_and_swap(v, 1, 0, is_less);
        return;
    }

    // The left run gets the extra element for odd lengths.
    let mid = len - len / 2;

    unsafe {
        merge_sort_recursive(&mut v[..mid], buf, is_less);
        merge_sort_recursive(&mut v[mid..], buf, is_less);
        merge(v, mid, buf, is_less);
    }
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` into `buf` and copies the result back into
/// `v[..]`.
///
/// Until the final copy back, `v` is only read. If `is_less` panics, `v` still holds every element
/// exactly once and `buf` only holds bitwise copies that are never dropped.
///
/// # Safety
///
/// The two runs must be non-empty and `buf` must be valid for writes of `v.len()` elements, not
/// aliasing `v`. `T` must not be a zero-sized type.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let arr_ptr = v.as_mut_ptr();

    let mut left = 0;
    let mut right = mid;
    let mut out = 0;

    unsafe {
        while left < mid && right < len {
            // Consume the lesser side.
            // If equal, prefer the left run to maintain stability.
            let take = if is_less(&*arr_ptr.add(right), &*arr_ptr.add(left)) {
                right += 1;
                right - 1
            } else {
                left += 1;
                left - 1
            };

            ptr::copy_nonoverlapping(arr_ptr.add(take), buf.add(out), 1);
            out += 1;
        }

        // At most one of the runs has elements left over, they are already in order.
        let left_rest = mid - left;
        ptr::copy_nonoverlapping(arr_ptr.add(left), buf.add(out), left_rest);
        out += left_rest;

        let right_rest = len - right;
        ptr::copy_nonoverlapping(arr_ptr.add(right), buf.add(out), right_rest);
        out += right_rest;

        debug_assert_eq!(out, len);
        ptr::copy_nonoverlapping(buf, arr_ptr, len);
    }
}
