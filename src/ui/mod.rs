//! Terminal output.
//!
//! - [`Output`] is the shared, line-atomic sink every worker writes to
//! - [`Theme`] holds the `console` styles for paths and failures

pub mod output;
pub mod theme;

pub use output::{Output, OutputMode};
pub use theme::{should_use_colors, Theme};
