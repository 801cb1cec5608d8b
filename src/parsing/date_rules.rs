//! Grammar rules for dates and date ranges.
//!
//! Each rule inspects the head of a token slice and either declines or
//! reports the date expressions it recognized and how many tokens it used.
//! Rules only check shape; calendar validity and year inference happen when
//! the expressions are resolved against a reference date.

use chrono::{Datelike, NaiveDate};

use super::tokenizer::Token;

const RANGE_CONNECTORS: &[&str] = &["ate", "a", "ao"];
const LIST_JOINERS: &[&str] = &["e"];

/// A date as written, with the year possibly left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PartialDate {
    pub day: u32,
    pub month: u32,
    pub year: Option<i32>,
}

impl PartialDate {
    fn new(day: u32, month: u32, year: Option<i32>) -> Self {
        Self { day, month, year }
    }

    fn month_day(&self) -> (u32, u32) {
        (self.month, self.day)
    }

    fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

/// A single date or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateExpr {
    Single(PartialDate),
    Range(PartialDate, PartialDate),
}

/// What a rule recognized at the head of a slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DateMatch {
    pub exprs: Vec<DateExpr>,
    pub consumed: usize,
}

impl DateMatch {
    fn one(expr: DateExpr, consumed: usize) -> Self {
        Self {
            exprs: vec![expr],
            consumed,
        }
    }
}

pub(crate) type DateRule = fn(&[Token]) -> Option<DateMatch>;

/// Rules in priority order; the first that matches at a position wins.
pub(crate) const DATE_RULES: &[(&str, DateRule)] = &[
    ("numeric_range", numeric_range),
    ("textual_range", textual_range),
    ("numeric_end_range", numeric_end_range),
    ("numeric_open_range", numeric_open_range),
    ("textual_list", textual_list),
    ("numeric_date", numeric_date_rule),
    ("textual_date", textual_date_rule),
];

/// `D/M[/Y] <connector> D/M[/Y]` and `D/M[/Y] <connector> D de <month>`
fn numeric_range(tokens: &[Token]) -> Option<DateMatch> {
    let (start, used) = numeric_date(tokens)?;
    let rest = tokens.get(used..)?;
    if !is_range_connector(rest.first()?) {
        return None;
    }
    let tail = rest.get(1..)?;
    let (end, end_used) = numeric_date(tail).or_else(|| textual_date(tail))?;
    Some(DateMatch::one(
        DateExpr::Range(start, end),
        used + 1 + end_used,
    ))
}

/// `D1 <connector> D2 [de] <month> [de Y]` and
/// `D1 [de] <month1> <connector> D2 [de] <month2> [de Y]`
///
/// With a single month, `D1 > D2` places `D1` in the preceding month.
fn textual_range(tokens: &[Token]) -> Option<DateMatch> {
    if let Some((start, used)) = textual_date(tokens) {
        let rest = tokens.get(used..)?;
        if !is_range_connector(rest.first()?) {
            return None;
        }
        let (end, end_used) = textual_date(rest.get(1..)?)?;
        return Some(DateMatch::one(
            DateExpr::Range(start, end),
            used + 1 + end_used,
        ));
    }

    let first_day = tokens.first()?.number()?;
    if !is_range_connector(tokens.get(1)?) {
        return None;
    }
    let (end, end_used) = textual_date(tokens.get(2..)?)?;
    Some(DateMatch::one(
        DateExpr::Range(start_before(first_day, end), end),
        2 + end_used,
    ))
}

/// `D1 <connector> [dia] D2/M2[/Y]`, with the same month inference as the
/// textual form.
fn numeric_end_range(tokens: &[Token]) -> Option<DateMatch> {
    let first_day = tokens.first()?.number()?;
    if !is_range_connector(tokens.get(1)?) {
        return None;
    }
    let skip = skip_day_word(tokens, 2);
    let (end, end_used) = numeric_date(tokens.get(skip..)?)?;
    Some(DateMatch::one(
        DateExpr::Range(start_before(first_day, end), end),
        skip + end_used,
    ))
}

/// The start of a range written as a bare day: in the end's month, or the
/// month before when the day is past the end day.
fn start_before(first_day: u32, end: PartialDate) -> PartialDate {
    if first_day <= end.day {
        return PartialDate::new(first_day, end.month, end.year);
    }
    let (month, year) = if end.month == 1 {
        (12, end.year.map(|y| y - 1))
    } else {
        (end.month - 1, end.year)
    };
    PartialDate::new(first_day, month, year)
}

/// `D1/M1[/Y] <connector> [dia] D2`, the end day in the start month, or in
/// the next month when `D2 < D1`.
fn numeric_open_range(tokens: &[Token]) -> Option<DateMatch> {
    let (start, used) = numeric_date(tokens)?;
    if !is_range_connector(tokens.get(used)?) {
        return None;
    }
    let at = skip_day_word(tokens, used + 1);
    let end_day = tokens.get(at)?.number()?;
    if tokens.get(at + 1) == Some(&Token::Slash) {
        return None;
    }
    let end = if end_day < start.day {
        let (month, year) = if start.month == 12 {
            let next_year = match start.year {
                Some(y) => Some(y.checked_add(1)?),
                None => None,
            };
            (1, next_year)
        } else {
            (start.month + 1, start.year)
        };
        PartialDate::new(end_day, month, year)
    } else {
        PartialDate::new(end_day, start.month, start.year)
    };
    Some(DateMatch::one(DateExpr::Range(start, end), at + 1))
}

/// `D1, D2 e D3 [de] <month> [de Y]`
fn textual_list(tokens: &[Token]) -> Option<DateMatch> {
    let mut days = vec![tokens.first()?.number()?];
    let mut i = 1;
    while let Some(joiner) = tokens.get(i) {
        let is_joiner = *joiner == Token::Comma || joiner.is_any_word(LIST_JOINERS);
        match tokens.get(i + 1).and_then(Token::number) {
            Some(day) if is_joiner => {
                days.push(day);
                i += 2;
            }
            _ => break,
        }
    }
    if days.len() < 2 {
        return None;
    }
    let (last, used) = textual_date(tokens.get(i - 1..)?)?;
    let exprs = days
        .iter()
        .map(|&day| DateExpr::Single(PartialDate::new(day, last.month, last.year)))
        .collect();
    Some(DateMatch {
        exprs,
        consumed: i - 1 + used,
    })
}

fn numeric_date_rule(tokens: &[Token]) -> Option<DateMatch> {
    let (date, used) = numeric_date(tokens)?;
    Some(DateMatch::one(DateExpr::Single(date), used))
}

fn textual_date_rule(tokens: &[Token]) -> Option<DateMatch> {
    let (date, used) = textual_date(tokens)?;
    Some(DateMatch::one(DateExpr::Single(date), used))
}

/// `D/M` or `D/M/Y`
fn numeric_date(tokens: &[Token]) -> Option<(PartialDate, usize)> {
    let day = tokens.first()?.number()?;
    if tokens.get(1)? != &Token::Slash {
        return None;
    }
    let month = tokens.get(2)?.number()?;
    if tokens.get(3) == Some(&Token::Slash) {
        if let Some(year) = tokens.get(4).and_then(Token::number) {
            return Some((PartialDate::new(day, month, Some(normalize_year(year))), 5));
        }
    }
    Some((PartialDate::new(day, month, None), 3))
}

/// `D [de] <month> [[de] Y]`
fn textual_date(tokens: &[Token]) -> Option<(PartialDate, usize)> {
    let day = tokens.first()?.number()?;
    let mut i = 1;
    if tokens.get(i)?.is_word("de") {
        i += 1;
    }
    let month = match tokens.get(i)? {
        Token::Word(w) => month_from_word(w)?,
        _ => return None,
    };
    i += 1;

    let year = match (tokens.get(i), tokens.get(i + 1)) {
        (Some(de), Some(Token::Number(y))) if de.is_word("de") => {
            i += 2;
            Some(normalize_year(*y))
        }
        (Some(Token::Number(y)), _) if *y >= 1000 => {
            i += 1;
            Some(normalize_year(*y))
        }
        _ => None,
    };
    Some((PartialDate::new(day, month, year), i))
}

fn is_range_connector(token: &Token) -> bool {
    *token == Token::Dash || token.is_any_word(RANGE_CONNECTORS)
}

/// Index of the token after an optional `dia` at `at`.
fn skip_day_word(tokens: &[Token], at: usize) -> usize {
    match tokens.get(at) {
        Some(token) if token.is_word("dia") => at + 1,
        _ => at,
    }
}

/// Two-digit years are in the 2000s. Years beyond what a date can hold are
/// capped at the last representable year.
fn normalize_year(year: u32) -> i32 {
    let year = i32::try_from(year)
        .unwrap_or(i32::MAX)
        .min(NaiveDate::MAX.year());
    if year < 100 { 2000 + year } else { year }
}

/// Maps a folded Portuguese month name or abbreviation to its number.
pub(crate) fn month_from_word(word: &str) -> Option<u32> {
    let month = match word {
        "janeiro" | "jan" => 1,
        "fevereiro" | "fev" => 2,
        "marco" | "mar" => 3,
        "abril" | "abr" => 4,
        "maio" | "mai" => 5,
        "junho" | "jun" => 6,
        "julho" | "jul" => 7,
        "agosto" | "ago" => 8,
        "setembro" | "set" => 9,
        "outubro" | "out" => 10,
        "novembro" | "nov" => 11,
        "dezembro" | "dez" => 12,
        _ => return None,
    };
    Some(month)
}

/// Resolves a single date against the reference date.
///
/// Without a year the reference year is used, moving to the next year when
/// the date has already passed. `None` means the date does not exist.
pub(crate) fn resolve_single(date: PartialDate, reference: NaiveDate) -> Option<NaiveDate> {
    match date.year {
        Some(year) => date.in_year(year),
        None => {
            let this_year = date.in_year(reference.year())?;
            if this_year < reference {
                date.in_year(reference.year() + 1)
            } else {
                Some(this_year)
            }
        }
    }
}

/// Resolves both ends of a range.
///
/// A missing year is taken from the other end, adding a year when the range
/// wraps past December. With no year at all the range lands in the reference
/// year, or the next one if it ended before the reference date. `None` means
/// an end does not exist or the range runs backwards.
pub(crate) fn resolve_range(
    start: PartialDate,
    end: PartialDate,
    reference: NaiveDate,
) -> Option<(NaiveDate, NaiveDate)> {
    let wraps = end.month_day() < start.month_day();
    let (start_year, end_year) = match (start.year, end.year) {
        (Some(s), Some(e)) => (s, e),
        (Some(s), None) => (s, if wraps { s.checked_add(1)? } else { s }),
        (None, Some(e)) => (if wraps { e - 1 } else { e }, e),
        (None, None) => {
            let s = reference.year();
            let e = if wraps { s + 1 } else { s };
            match end.in_year(e) {
                Some(last) if last < reference => (s + 1, e + 1),
                _ => (s, e),
            }
        }
    };

    let first = start.in_year(start_year)?;
    let last = end.in_year(end_year)?;
    if last < first {
        return None;
    }
    Some((first, last))
}
