pub mod normalize;
pub mod reconcile;
pub mod sync;

pub use sync::{SyncLogic, SyncSummary};
