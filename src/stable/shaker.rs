use crate::compare_and_swap;

sort_impl!(shaker, stable: true, method: Exchange);

/// Cocktail shaker sort, alternating forward and backward bubble passes over a shrinking window.
fn shaker_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return;
    }

    let mut far_left = 0;
    let mut far_right = len - 1;
    let mut last_swap = far_left;

    while far_left != far_right {
        // Forward, moves the largest element of the window to its right end.
        for i in far_left..far_right {
            if compare_and_swap(v, i + 1, i, is_less) {
                last_swap = i;
            }
        }

        // No exchange at all, the window is sorted.
        if last_swap == far_left {
            return;
        }

        far_right = last_swap;

        // Backward, moves the smallest element of the window to its left end.
        for i in (far_left + 1..=far_right).rev() {
            if compare_and_swap(v, i, i - 1, is_less) {
                last_swap = i;
            }
        }

        far_left = last_swap;
    }
}
