//! Spotlight stories.

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  record::{self, Record},
};

/// A persisted member-spotlight story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotlightStory {
  pub id:    String,
  pub name:  String,
  pub title: String,
  pub story: String,
  /// Path reference to a previously-stored image blob.
  pub image: String,
}

impl Record for SpotlightStory {
  const KIND: &'static str = "spotlight-stories";

  fn id(&self) -> &str {
    &self.id
  }
}

/// Caller-supplied payload for creating a story.
///
/// `image` is not taken from the caller directly: the upload collaborator
/// stores the blob first and supplies the resulting path reference.
#[derive(Debug, Clone, Default)]
pub struct StoryDraft {
  pub name:  String,
  pub title: String,
  pub story: String,
  pub image: Option<String>,
}

impl StoryDraft {
  /// Validate into a persistable [`SpotlightStory`] with a fresh id.
  pub fn into_story(self) -> Result<SpotlightStory> {
    for (field, value) in
      [("name", &self.name), ("title", &self.title), ("story", &self.story)]
    {
      if value.trim().is_empty() {
        return Err(Error::InvalidInput(field));
      }
    }
    let image = self
      .image
      .filter(|path| !path.trim().is_empty())
      .ok_or(Error::InvalidInput("image"))?;

    Ok(SpotlightStory {
      id: record::next_id(),
      name: self.name,
      title: self.title,
      story: self.story,
      image,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::StoryDraft;
  use crate::Error;

  fn draft() -> StoryDraft {
    StoryDraft {
      name:  "Alice Liddell".to_string(),
      title: "Founder".to_string(),
      story: "Started the club in a dorm room.".to_string(),
      image: Some("images/uploads/alice-1700000000000.png".to_string()),
    }
  }

  #[test]
  fn valid_draft_becomes_a_story() {
    let story = draft().into_story().unwrap();
    assert!(!story.id.is_empty());
    assert_eq!(story.name, "Alice Liddell");
  }

  #[test]
  fn each_required_field_is_named_when_missing() {
    for field in ["name", "title", "story"] {
      let mut d = draft();
      match field {
        "name" => d.name = String::new(),
        "title" => d.title = String::new(),
        _ => d.story = String::new(),
      }
      match d.into_story() {
        Err(Error::InvalidInput(named)) => assert_eq!(named, field),
        other => panic!("expected InvalidInput({field}), got {other:?}"),
      }
    }
  }

  #[test]
  fn missing_image_reference_is_invalid_input() {
    let result = StoryDraft { image: None, ..draft() }.into_story();
    assert!(matches!(result, Err(Error::InvalidInput("image"))));
  }
}
