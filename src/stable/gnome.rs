use crate::compare_and_swap;

sort_impl!(gnome, stable: true, method: Exchange);

fn gnome_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut current = 0;
    while current != len - 1 {
        if compare_and_swap(v, current + 1, current, is_less) && current != 0 {
            // Re-check the pair that the swapped element now forms on its left.
            current -= 1;
        } else {
            current += 1;
        }
    }
}
