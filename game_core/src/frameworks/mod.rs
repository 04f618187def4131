// Frameworks: environment config and process runtime.

pub mod config;
pub mod runtime;
