//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod init;
mod output;

pub use check::{CheckReport, ClientSummary, ResolvedType};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};
pub use init::InitReport;
pub use output::{Report, TerminalOutput};
