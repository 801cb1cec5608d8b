//! Parsing of free-text Portuguese schedule descriptions.
//!
//! The parser tokenizes the text and then applies a small grammar: one
//! rule for the daily time window and an ordered set of rules for dates and
//! date ranges. Each rule is a plain function over the token stream.
//!
//! # Example
//!
//! ```
//! use shift_engine::parsing::parse;
//! use chrono::NaiveDate;
//!
//! let reference = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
//! let schedule = parse("10/09 das 23 às 02", Some(reference)).unwrap();
//!
//! assert_eq!(schedule.dates, vec![NaiveDate::from_ymd_opt(2026, 9, 10).unwrap()]);
//! assert!(schedule.window.unwrap().is_overnight());
//! ```

mod date_rules;
mod schedule_parser;
mod time_rules;
mod tokenizer;

pub use schedule_parser::{MAX_RANGE_DAYS, parse};
pub use tokenizer::{Token, fold_diacritics, tokenize};
