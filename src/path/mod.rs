//! Paths produced by the searches and the routine that rebuilds them.

mod generic_path;
pub use generic_path::*;

mod reconstruct;
pub use reconstruct::reconstruct_path;

/// a Type to represent the Cost of traversing an Edge
pub type Cost = usize;
