use std::mem::ManuallyDrop;
use std::ptr;

use crate::compare_and_swap;

sort_impl!(insertion, stable: true, method: Insertion);

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    compare_and_swap(v, 1, 0, is_less);

    // v[..i] is sorted before each step.
    for i in 2..len {
        // SAFETY: 1 <= i < len.
        unsafe {
            insert_tail(v, i, 1, is_less);
        }
    }
}

/// The position of `v` whose element is currently held outside of the slice.
///
/// Dropping it writes the held element back into `slot`, also when `is_less` unwinds.
struct Gap<T> {
    held: *const T,
    slot: *mut T,
}

impl<T> Drop for Gap<T> {
    fn drop(&mut self) {
        // SAFETY: `held` points to a live element that is not part of `v` and `slot` is the one
        // position of `v` without a valid element.
        unsafe {
            ptr::copy_nonoverlapping(self.held, self.slot, 1);
        }
    }
}

/// Inserts `v[i]` into the sequence `v[i % gap], v[i % gap + gap], .., v[i - gap]` which is
/// already sorted, so that the whole gapped sequence up to `i` becomes sorted.
///
/// With `gap == 1` this is the classic insertion step. Shell sort uses larger gaps.
///
/// # Safety
///
/// `gap` must be at least 1 and `gap <= i < v.len()` must hold.
pub(crate) unsafe fn insert_tail<T, F>(v: &mut [T], i: usize, gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(gap >= 1 && i >= gap && i < v.len());

    let base = v.as_mut_ptr();

    unsafe {
        let tail = base.add(i);

        // Compared in place, nothing has been moved yet.
        if !is_less(&*tail, &*tail.sub(gap)) {
            return;
        }

        // From here on every comparison goes through `held`, it is the copy that ends up in `v`.
        let held = ManuallyDrop::new(ptr::read(tail));
        ptr::copy_nonoverlapping(tail.sub(gap), tail, 1);

        let mut gap_slot = Gap {
            held: &*held,
            slot: tail.sub(gap),
        };

        let mut pos = i - gap;
        while pos >= gap {
            let prev = base.add(pos - gap);
            if !is_less(&*held, &*prev) {
                break;
            }

            ptr::copy_nonoverlapping(prev, gap_slot.slot, 1);
            gap_slot.slot = prev;
            pos -= gap;
        }

        // Dropping `gap_slot` moves `held` into its final position.
    }
}
