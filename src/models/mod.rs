pub mod record;
pub mod summary;

pub use record::TimeRecord;
pub use summary::Summary;
