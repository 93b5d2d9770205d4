//! Calendar events.

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result, dates,
  record::{self, Record},
};

/// A persisted calendar event.
///
/// Dates are stored in canonical form: `YYYY-MM-DD` for all-day events,
/// RFC 3339 UTC instants otherwise. Events are never edited in place;
/// delete-and-recreate is the only update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
  pub id:          String,
  pub title:       String,
  pub start:       String,
  pub end:         Option<String>,
  pub all_day:     bool,
  pub description: String,
}

impl Record for Event {
  const KIND: &'static str = "events";

  fn id(&self) -> &str {
    &self.id
  }
}

/// Caller-supplied payload for creating an event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub start:       String,
  #[serde(default)]
  pub end:         Option<String>,
  #[serde(default)]
  pub all_day:     bool,
  #[serde(default)]
  pub description: String,
}

impl EventDraft {
  /// Validate and normalize into a persistable [`Event`] with a fresh id.
  pub fn into_event(self) -> Result<Event> {
    if self.title.trim().is_empty() {
      return Err(Error::InvalidInput("title"));
    }

    let start = dates::normalize(&self.start, self.all_day)
      .ok_or(Error::InvalidInput("start"))?;

    // An absent or blank end is fine; a present-but-unparseable one is not.
    let end = match self.end.as_deref().map(str::trim) {
      None | Some("") => None,
      Some(raw) => Some(
        dates::normalize(raw, self.all_day).ok_or(Error::InvalidInput("end"))?,
      ),
    };

    Ok(Event {
      id: record::next_id(),
      title: self.title,
      start,
      end,
      all_day: self.all_day,
      description: self.description,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::EventDraft;
  use crate::Error;

  fn draft() -> EventDraft {
    EventDraft {
      title: "General meeting".to_string(),
      start: "3-5-2024".to_string(),
      all_day: true,
      ..EventDraft::default()
    }
  }

  #[test]
  fn valid_draft_normalizes_and_assigns_id() {
    let event = draft().into_event().unwrap();
    assert!(!event.id.is_empty());
    assert_eq!(event.start, "2024-03-05");
    assert_eq!(event.end, None);
    assert!(event.all_day);
  }

  #[test]
  fn missing_title_names_the_field() {
    let result = EventDraft { title: "  ".to_string(), ..draft() }.into_event();
    assert!(matches!(result, Err(Error::InvalidInput("title"))));
  }

  #[test]
  fn missing_start_names_the_field() {
    let result = EventDraft { start: String::new(), ..draft() }.into_event();
    assert!(matches!(result, Err(Error::InvalidInput("start"))));
  }

  #[test]
  fn unparseable_start_is_invalid_input() {
    let result = EventDraft { start: "02/30/2024".to_string(), ..draft() }.into_event();
    assert!(matches!(result, Err(Error::InvalidInput("start"))));
  }

  #[test]
  fn blank_end_is_stored_as_absent() {
    let event = EventDraft { end: Some("  ".to_string()), ..draft() }
      .into_event()
      .unwrap();
    assert_eq!(event.end, None);
  }

  #[test]
  fn unparseable_end_is_rejected() {
    let result =
      EventDraft { end: Some("sometime".to_string()), ..draft() }.into_event();
    assert!(matches!(result, Err(Error::InvalidInput("end"))));
  }

  #[test]
  fn end_follows_the_all_day_policy() {
    let event = EventDraft {
      end: Some("3-6-2024".to_string()),
      ..draft()
    }
    .into_event()
    .unwrap();
    assert_eq!(event.end.as_deref(), Some("2024-03-06"));
  }
}
