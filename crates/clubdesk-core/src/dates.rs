//! Date normalization for loosely-formatted admin input.
//!
//! Parsing is an ordered chain of strategies. The explicit month-day-year
//! form is authoritative: when the input matches its shape, later strategies
//! never run, even if they would have produced a different reading of an
//! ambiguous string.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};

/// Outcome of one parse strategy.
enum Parse {
  /// The strategy recognised the input and produced a date.
  Value(NaiveDateTime),
  /// The strategy recognised the input's shape but the date itself is
  /// invalid (e.g. a nonexistent calendar day). Later strategies must not
  /// run; a day that overflows the month is rejected, never rolled forward.
  Invalid,
  /// The input is not in this strategy's format.
  NoMatch,
}

/// Parse strategies, in precedence order.
const STRATEGIES: &[fn(&str) -> Parse] = &[month_day_year, generic];

/// Normalize a date-like input string into its canonical form.
///
/// Returns `YYYY-MM-DD` when `all_day` (any time component is ignored),
/// otherwise an RFC 3339 UTC instant, defaulting to midnight when the input
/// carries no time. Blank or unparseable input yields `None`; the caller
/// decides whether that is acceptable.
pub fn normalize(input: &str, all_day: bool) -> Option<String> {
  let s = input.trim();
  if s.is_empty() {
    return None;
  }

  let mut parsed = None;
  for parse in STRATEGIES {
    match parse(s) {
      Parse::Value(dt) => {
        parsed = Some(dt);
        break;
      }
      Parse::Invalid => return None,
      Parse::NoMatch => {}
    }
  }
  parsed.map(|dt| canonical(dt, all_day))
}

fn canonical(dt: NaiveDateTime, all_day: bool) -> String {
  if all_day {
    dt.date().format("%Y-%m-%d").to_string()
  } else {
    dt.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true)
  }
}

// ─── Strategies ──────────────────────────────────────────────────────────────

/// Strict `M[-/]D[-/]YYYY`, optionally followed by an `HH:MM` time separated
/// by a space or `T` (the colon itself is optional). Month and day take one
/// or two digits; the year takes exactly four.
fn month_day_year(s: &str) -> Parse {
  let (date_part, time_part) = match s.split_once([' ', 'T']) {
    Some((d, t)) => (d, Some(t)),
    None => (s, None),
  };

  let fields: Vec<&str> = date_part.split(['-', '/']).collect();
  let [month, day, year] = fields[..] else {
    return Parse::NoMatch;
  };
  if !(digits(month, 1, 2) && digits(day, 1, 2) && digits(year, 4, 4)) {
    return Parse::NoMatch;
  }

  let time = match time_part {
    None => NaiveTime::MIN,
    Some(t) => match hh_mm(t) {
      Some(time) => time,
      None => return Parse::NoMatch,
    },
  };

  // Shape matched; from here an invalid date is a rejection, not a fallthrough.
  let ymd = (year.parse(), month.parse(), day.parse());
  let (Ok(y), Ok(m), Ok(d)) = ymd else {
    return Parse::Invalid;
  };
  match NaiveDate::from_ymd_opt(y, m, d) {
    Some(date) => Parse::Value(date.and_time(time)),
    None => Parse::Invalid,
  }
}

/// Fallback over well-known unambiguous formats.
fn generic(s: &str) -> Parse {
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Parse::Value(dt.naive_utc());
  }

  const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
  ];
  for fmt in DATETIME_FORMATS {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
      return Parse::Value(dt);
    }
  }

  const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"];
  for fmt in DATE_FORMATS {
    if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
      return Parse::Value(date.and_time(NaiveTime::MIN));
    }
  }

  Parse::NoMatch
}

// ─── Low-level helpers ───────────────────────────────────────────────────────

fn hh_mm(t: &str) -> Option<NaiveTime> {
  let (hour, minute) = match t.split_once(':') {
    Some((h, m)) => (h, m),
    None if t.len() >= 3 => t.split_at(t.len() - 2),
    None => return None,
  };
  if !(digits(hour, 1, 2) && digits(minute, 2, 2)) {
    return None;
  }
  NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}

fn digits(s: &str, min: usize, max: usize) -> bool {
  (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
