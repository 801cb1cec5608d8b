//! Shift Detection and Rate Resolution Engine
//!
//! This crate turns free-text Portuguese schedule descriptions such as
//! `"29 até 03 de outubro das 09 as 18"` into dates and a daily time window,
//! classifies the window into shift periods with break, overtime, night
//! differential and weekend/holiday counts, and prices staff roles per date
//! and period from a configurable rate matrix with multiplier fallbacks.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
