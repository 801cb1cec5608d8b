//! Free-text schedule parsing.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};
use tracing::{debug, trace};

use super::date_rules::{DATE_RULES, DateExpr, resolve_range, resolve_single};
use super::time_rules::find_time_window;
use super::tokenizer::{Token, tokenize};
use crate::error::{EngineError, EngineResult, ParseFailureReason};
use crate::models::ParsedSchedule;

/// Longest range a single expression may expand to, in days.
pub const MAX_RANGE_DAYS: i64 = 366;

/// Parses a Portuguese schedule description into dates and a daily window.
///
/// # Arguments
///
/// * `text` - The schedule as typed by the user, e.g. `"10/09 das 23 às 02"`
/// * `reference_date` - Anchors dates written without a year. Defaults to
///   today's local date.
///
/// # Returns
///
/// A [`ParsedSchedule`] with ascending, distinct dates. Text with a window
/// but no date yields the reference date. Text with dates but no window
/// yields `window: None`. A day number without a month, as in
/// `"dia 10 das 09 às 18"`, is not a date and is ignored.
///
/// # Errors
///
/// [`EngineError::ParseFailure`] tagged with:
/// - `unrecognized_format` when neither a date nor a window is found
/// - `invalid_date` when the only dates written do not exist (e.g. 31/02)
/// - `range_too_long` when a range covers more than 366 days
///
/// # Example
///
/// ```
/// use shift_engine::parsing::parse;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
/// let schedule = parse("29 até 03 de outubro das 09 as 18", Some(reference)).unwrap();
///
/// assert_eq!(schedule.dates.len(), 5);
/// assert_eq!(schedule.dates[0], NaiveDate::from_ymd_opt(2026, 9, 29).unwrap());
///
/// let window = schedule.window.unwrap();
/// assert_eq!((window.start_minute, window.end_minute), (540, 1080));
/// ```
pub fn parse(text: &str, reference_date: Option<NaiveDate>) -> EngineResult<ParsedSchedule> {
    let reference = reference_date.unwrap_or_else(|| Local::now().date_naive());
    let tokens = tokenize(text);

    let time = find_time_window(&tokens);
    let exprs = match &time {
        Some(found) => {
            let mut exprs = scan_dates(&tokens[..found.start]);
            exprs.extend(scan_dates(&tokens[found.end..]));
            exprs
        }
        None => scan_dates(&tokens),
    };
    let window = time.map(|found| found.window);

    let mut dates = BTreeSet::new();
    let mut impossible = false;
    for expr in &exprs {
        match expand(expr, reference, text)? {
            Some(expanded) => dates.extend(expanded),
            None => impossible = true,
        }
    }

    if dates.is_empty() {
        if impossible {
            return Err(failure(ParseFailureReason::InvalidDate, text));
        }
        if window.is_none() {
            return Err(failure(ParseFailureReason::UnrecognizedFormat, text));
        }
        dates.insert(reference);
    }

    debug!(
        dates = dates.len(),
        has_window = window.is_some(),
        expressions = exprs.len(),
        "Parsed schedule text"
    );

    Ok(ParsedSchedule {
        dates: dates.into_iter().collect(),
        window,
        raw_text: text.to_string(),
    })
}

/// Applies the date rules left to right, skipping tokens no rule claims.
fn scan_dates(tokens: &[Token]) -> Vec<DateExpr> {
    let mut exprs = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let head = &tokens[i..];
        let found = DATE_RULES
            .iter()
            .find_map(|(name, rule)| rule(head).map(|m| (*name, m)));
        match found {
            Some((name, matched)) => {
                trace!(rule = name, position = i, "Matched date rule");
                exprs.extend(matched.exprs);
                i += matched.consumed.max(1);
            }
            None => {
                if let Token::Number(value) = tokens[i] {
                    debug!(value, position = i, "Number not claimed by any date rule");
                }
                i += 1;
            }
        }
    }
    exprs
}

/// Expands an expression into concrete dates. `Ok(None)` marks a date that
/// does not exist.
fn expand(expr: &DateExpr, reference: NaiveDate, text: &str) -> EngineResult<Option<Vec<NaiveDate>>> {
    match *expr {
        DateExpr::Single(date) => Ok(resolve_single(date, reference).map(|d| vec![d])),
        DateExpr::Range(start, end) => {
            let Some((first, last)) = resolve_range(start, end, reference) else {
                return Ok(None);
            };
            let days = (last - first).num_days() + 1;
            if days > MAX_RANGE_DAYS {
                return Err(failure(ParseFailureReason::RangeTooLong, text));
            }
            Ok(Some(first.iter_days().take(days as usize).collect()))
        }
    }
}

fn failure(reason: ParseFailureReason, text: &str) -> EngineError {
    debug!(%reason, "Schedule text rejected");
    EngineError::ParseFailure {
        reason,
        text: text.to_string(),
    }
}
