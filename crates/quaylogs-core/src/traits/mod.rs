//! Core traits shared between the fetch loop and its collaborators.

mod sink;

pub use sink::PageSink;
