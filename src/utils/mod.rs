//! Stream helpers shared by the library and CLI.

pub mod files;
