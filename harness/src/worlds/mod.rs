//! World implementations for the harness runner.

pub mod chapter_selection;
