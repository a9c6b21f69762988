//! Sorts that keep equal elements in their original relative order.

pub mod bubble;
pub mod gnome;
pub mod insertion;
pub mod merge;
pub mod shaker;

pub use bubble::BubbleSort;
pub use gnome::GnomeSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use shaker::ShakerSort;
