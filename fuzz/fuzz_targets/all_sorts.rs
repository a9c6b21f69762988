#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_collection::stable::{BubbleSort, GnomeSort, InsertionSort, MergeSort, ShakerSort};
use sort_collection::unstable::{CombSort, SelectionSort, ShellSort};
use sort_collection::Algorithm;

fn check<A: Algorithm>(data: &[u8]) {
    let mut expected = data.to_vec();
    expected.sort();

    let mut v = data.to_vec();
    sort_collection::sort::<A, _>(&mut v);
    assert_eq!(v, expected, "{}", A::NAME);

    if A::STABLE {
        // Low nibble as key, the position makes equal keys distinguishable.
        let mut expected = data.iter().copied().enumerate().collect::<Vec<_>>();
        expected.sort_by_key(|&(_, val)| val & 0xF);

        let mut v = data.iter().copied().enumerate().collect::<Vec<_>>();
        sort_collection::sort_by::<A, _, _>(&mut v, |a, b| (a.1 & 0xF) < (b.1 & 0xF));
        assert_eq!(v, expected, "{}", A::NAME);
    }
}

fuzz_target!(|data: &[u8]| {
    check::<BubbleSort>(data);
    check::<ShakerSort>(data);
    check::<CombSort>(data);
    check::<GnomeSort>(data);
    check::<SelectionSort>(data);
    check::<InsertionSort>(data);
    check::<ShellSort>(data);
    check::<MergeSort>(data);
});
