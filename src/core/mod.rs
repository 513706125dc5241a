pub mod aggregate;
pub mod backup;
pub mod clock;
