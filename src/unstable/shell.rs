use crate::stable::insertion::insert_tail;

sort_impl!(shell, stable: false, method: Insertion);

/// Largest gap of Knuth's `3h + 1` sequence used for a slice of length `len`.
///
/// Starts at 1 and grows while the gap is below `len / 9`.
pub fn initial_gap(len: usize) -> usize {
    let mut gap = 1;
    while gap < len / 9 {
        gap = 3 * gap + 1;
    }

    gap
}

/// The gap following `gap` in the decreasing `3h + 1` sequence. Returns 0 after the final gap 1.
#[inline]
pub fn next_gap(gap: usize) -> usize {
    gap.saturating_sub(1) / 3
}

fn shell_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut gap = initial_gap(len);
    while gap > 0 {
        // One combined scan covers all `gap` interleaved subsequences.
        for i in gap..len {
            // SAFETY: 1 <= gap <= i < len.
            unsafe {
                insert_tail(v, i, gap, is_less);
            }
        }

        gap = next_gap(gap);
    }
}
