pub mod entry;
pub mod summary;

pub use entry::WaterEntry;
pub use summary::DailySummary;
