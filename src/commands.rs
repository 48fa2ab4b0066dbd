// Command handlers module
// One handler per mode. Each takes the output sinks explicitly.

pub mod create;
pub mod jump;
pub mod list;
pub mod modify;
pub mod remove;
pub mod source;
