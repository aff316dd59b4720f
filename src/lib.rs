//! Cell formatters and sort comparers for data grids.
//!
//! Everything under [`grid`] is pure: functions borrow rows and column
//! definitions and never mutate them.

pub mod grid;
