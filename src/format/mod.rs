//! Text formatting for `bench_summary`.
//!
//! - [`format_time`] scales nanoseconds to ns/µs/ms/s
//! - [`format_benchmark_name`] turns identifiers into display labels
//! - [`AlignedTable`] renders pipe-delimited Markdown tables

mod name;
mod table;
mod time;

pub use name::format_benchmark_name;
pub use table::{AlignedTable, Justify, pad};
pub use time::format_time;
