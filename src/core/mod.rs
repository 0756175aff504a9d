pub mod clock;
pub mod reconcile;
pub mod report;
