sort_impl!(selection, stable: false, method: Selection);

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for current in 0..len - 1 {
        // Leftmost minimum of v[current..].
        let mut min = current;
        for i in (current + 1)..len {
            if is_less(&v[i], &v[min]) {
                min = i;
            }
        }

        if min != current {
            v.swap(current, min);
        }
    }
}
