//! Sorts that may reorder equal elements.

pub mod comb;
pub mod selection;
pub mod shell;

pub use comb::CombSort;
pub use selection::SelectionSort;
pub use shell::ShellSort;
