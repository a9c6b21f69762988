use crate::compare_and_swap;

sort_impl!(comb, stable: false, method: Exchange);

/// Shrinks `gap` by the factor 1.3, rounding down.
///
/// A shrunk gap of 9 or 10 is replaced by 11 (Comb sort 11). A gap of 1 stays 1.
#[inline]
pub fn next_gap(gap: usize) -> usize {
    if gap <= 1 {
        return 1;
    }

    // floor(gap * 10 / 13) without overflowing for huge lengths.
    match (gap / 13) * 10 + (gap % 13) * 10 / 13 {
        9 | 10 => 11,
        shrunk => shrunk,
    }
}

fn comb_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut gap = len;
    loop {
        gap = next_gap(gap);
        debug_assert!(gap < len);

        let mut swapped = false;
        for i in 0..len - gap {
            swapped |= compare_and_swap(v, i + gap, i, is_less);
        }

        // Once the gap is down to 1 this is a bubble sort pass, a pass without exchanges means
        // the slice is sorted.
        if gap == 1 && !swapped {
            break;
        }
    }
}
