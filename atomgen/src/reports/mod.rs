//! Report data structures for commands.
//!
//! Operations build reports; commands render them to an `Output` target.

mod check;
mod generate;
mod list;
mod output;

pub use check::{CheckReport, JobDiagnostics};
pub use generate::{GenerateReport, JobReport, JobStatus};
pub use list::{JobRow, ListReport, SectionRow};
pub use output::{Report, TerminalOutput};
