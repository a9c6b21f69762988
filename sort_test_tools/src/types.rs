use std::cmp::Ordering;

/// 1 KiB element, moving it costs far more than comparing it.
#[derive(Clone, Debug)]
pub struct OneKiloByte {
    key: i32,
    payload: [i32; 255],
}

impl OneKiloByte {
    pub fn new(key: i32) -> Self {
        Self {
            key,
            payload: [key; 255],
        }
    }

    pub fn key(&self) -> i32 {
        self.key
    }

    /// Whether the payload still matches the key, a torn move would break this.
    pub fn is_intact(&self) -> bool {
        self.payload.iter().all(|&val| val == self.key)
    }
}

impl PartialEq for OneKiloByte {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for OneKiloByte {}

impl PartialOrd for OneKiloByte {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OneKiloByte {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// A key plus the index of its occurrence among equal keys.
///
/// Sorting by `key` alone and then checking that `occurrence` is ascending for every run of equal
/// keys verifies stability.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tagged {
    pub key: i32,
    pub occurrence: u32,
}

/// Tags every value with how many times its key has been seen before, keys are reduced to
/// `0..key_count`.
pub fn tag_occurrences(values: &[i32], key_count: usize) -> Vec<Tagged> {
    let mut counts = vec![0u32; key_count];

    values
        .iter()
        .map(|val| {
            let key = (val.unsigned_abs() as usize % key_count) as i32;
            counts[key as usize] += 1;

            Tagged {
                key,
                occurrence: counts[key as usize],
            }
        })
        .collect()
}
