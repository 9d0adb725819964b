//! Global hotkey infrastructure module

mod device_query;
mod noop;

pub use self::device_query::DeviceQueryHotkeys;
pub use noop::NoOpHotkeys;
