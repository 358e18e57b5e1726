pub mod batch;
pub mod menu;
pub mod report;

pub use batch::{run_batch, BatchSummary};
pub use menu::InteractiveSession;
pub use report::write_report;
