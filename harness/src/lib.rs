//! Qanit Harness: chapter-selection world and run orchestration.
//!
//! The harness loads a chapter catalog, builds a [`ChapterSelection`]
//! world, runs it through the search engine, and packages the outcome as
//! a [`SelectionReport`].
//!
//! The harness does NOT implement search logic; it delegates to
//! `qanit-search`. Worlds provide domain rules only.
//!
//! [`ChapterSelection`]: worlds::chapter_selection::ChapterSelection
//! [`SelectionReport`]: report::SelectionReport

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod loader;
pub mod report;
pub mod runner;
pub mod worlds;
