use crate::compare_and_swap;

sort_impl!(bubble, stable: true, method: Exchange);

/// Bubble sort that shrinks the scanned window by the run of trailing elements that needed no
/// exchange in the previous pass.
///
/// *O*(*n*) comparisons for already sorted input, *O*(*n*^2) otherwise.
fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return;
    }

    // Everything after `loop_end` is already in its final position.
    let mut loop_end = len - 1;
    while loop_end != 0 {
        // Number of consecutive pairs at the end of this pass that were already in order.
        let mut in_order = 0;
        for i in 0..loop_end {
            if compare_and_swap(v, i + 1, i, is_less) {
                in_order = 0;
            } else {
                in_order += 1;
            }
        }

        // If the very last pair was exchanged, only that element is known to be in place.
        loop_end -= in_order.max(1);
    }
}
