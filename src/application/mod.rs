//! Application layer: the two request operations and their deadline handling.

pub mod deadline;
pub mod services;
