//! Regional and federal points grids, one module per program.
//!
//! Every constant here belongs to exactly one grid. Grids do not
//! share tables with each other or with the comprehensive ranking grid.

pub(crate) mod british_columbia;
pub(crate) mod federal;
pub(crate) mod manitoba;
pub(crate) mod ontario;
pub(crate) mod saskatchewan;
