//! Browse a catalog of course offerings and build a conflict-free schedule.
//!
//! Meeting-time strings are parsed once by [`catalog::enrich_schedule`],
//! then [`conflict::has_conflict`] and [`selection::state_of`] tell which
//! courses can join a [`selection::SelectionSet`].

pub mod catalog;
pub mod conflict;
pub mod display;
pub mod filter;
pub mod ics;
pub mod selection;
pub mod times;
pub mod utils;
