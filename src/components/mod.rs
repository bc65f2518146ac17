//! UI Components
//!
//! Row and footer views of the todo list.

mod todo_row;
mod stats_footer;

pub use todo_row::TodoRow;
pub use stats_footer::StatsFooter;
