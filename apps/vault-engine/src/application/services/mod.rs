//! Application services.

mod locked_value;

pub use locked_value::LockedValueAccountant;
