//! Grammar rules for the daily time window.
//!
//! A time point is `H`, `H:MM`, `Hh`, `HhMM` or `H:MMh`. Two points joined by
//! `as`, `a`, `ate` or `-` form a window. The anchored rule requires a
//! leading `das`/`da`; the bare rule requires at least one point to carry a
//! `:` or `h` marker so that day numbers are never read as hours.

use tracing::trace;

use super::tokenizer::Token;
use crate::models::TimeWindow;

const HOUR_SUFFIXES: &[&str] = &["h", "hs", "hr", "hrs", "hora", "horas"];
const TIME_CONNECTORS: &[&str] = &["as", "a", "ate"];
const TIME_ANCHORS: &[&str] = &["das", "da"];

/// A window found in a token stream, with the token span it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TimeMatch {
    pub window: TimeWindow,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy)]
struct TimePoint {
    minute: u32,
    next: usize,
    marked: bool,
}

/// Finds the first time window. Anchored matches win over bare ones.
pub(crate) fn find_time_window(tokens: &[Token]) -> Option<TimeMatch> {
    let anchored = (0..tokens.len()).find_map(|i| anchored_window(tokens, i));
    if anchored.is_some() {
        trace!("Matched anchored time window");
        return anchored;
    }
    let bare = (0..tokens.len()).find_map(|i| bare_window(tokens, i));
    if bare.is_some() {
        trace!("Matched bare time window");
    }
    bare
}

/// `das T1 <connector> T2`
fn anchored_window(tokens: &[Token], i: usize) -> Option<TimeMatch> {
    if !tokens.get(i)?.is_any_word(TIME_ANCHORS) {
        return None;
    }
    let (first, second) = window_points(tokens, i + 1)?;
    build(tokens, i, first, second)
}

/// `T1 <connector> T2` with at least one marked point.
fn bare_window(tokens: &[Token], i: usize) -> Option<TimeMatch> {
    if i > 0 && tokens[i - 1] == Token::Slash {
        return None;
    }
    let (first, second) = window_points(tokens, i)?;
    if !(first.marked || second.marked) {
        return None;
    }
    build(tokens, i, first, second)
}

fn window_points(tokens: &[Token], i: usize) -> Option<(TimePoint, TimePoint)> {
    let first = time_point(tokens, i)?;
    if !is_connector(tokens.get(first.next)?) {
        return None;
    }
    let second = time_point(tokens, first.next + 1)?;
    Some((first, second))
}

fn build(tokens: &[Token], start: usize, first: TimePoint, second: TimePoint) -> Option<TimeMatch> {
    if tokens.get(second.next) == Some(&Token::Slash) {
        return None;
    }
    let window = TimeWindow::new(first.minute, second.minute).ok()?;
    Some(TimeMatch {
        window,
        start,
        end: second.next,
    })
}

fn is_connector(token: &Token) -> bool {
    *token == Token::Dash || token.is_any_word(TIME_CONNECTORS)
}

fn time_point(tokens: &[Token], i: usize) -> Option<TimePoint> {
    let hour = tokens.get(i)?.number()?;
    if tokens.get(i + 1) == Some(&Token::Slash) {
        return None;
    }

    let (minute, mut next, marked) = match tokens.get(i + 1) {
        Some(Token::Colon) => {
            let minute = tokens.get(i + 2)?.number()?;
            (minute, i + 3, true)
        }
        Some(t) if t.is_any_word(HOUR_SUFFIXES) => {
            let trailing = tokens
                .get(i + 2)
                .and_then(Token::number)
                .filter(|_| tokens.get(i + 3) != Some(&Token::Slash));
            match trailing {
                Some(minute) => (minute, i + 3, true),
                None => (0, i + 2, true),
            }
        }
        _ => (0, i + 1, false),
    };
    if marked && tokens.get(next).is_some_and(|t| t.is_any_word(HOUR_SUFFIXES)) {
        next += 1;
    }

    Some(TimePoint {
        minute: minute_of_day(hour, minute)?,
        next,
        marked,
    })
}

/// `24:00` is midnight.
fn minute_of_day(hour: u32, minute: u32) -> Option<u32> {
    match (hour, minute) {
        (24, 0) => Some(0),
        (h, m) if h < 24 && m < 60 => Some(h * 60 + m),
        _ => None,
    }
}
