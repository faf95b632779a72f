//! Interactive screen-region selection

mod region;
mod selector;

pub use region::{Point, Region};
pub use selector::{RegionSelector, SelectionOutcome, SelectionSurface};
