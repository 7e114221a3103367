pub mod activity;
pub mod ledger;
pub mod raw;

pub use activity::Activity;
pub use ledger::Ledger;
pub use raw::RawActivity;
