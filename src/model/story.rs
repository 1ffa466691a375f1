//! Story records as returned by the search API.

use crate::model::StoryId;
use serde::{Deserialize, Deserializer, Serialize};

/// One search result.
///
/// Immutable once constructed. Identity is [`Story::object_id`]; two stories
/// with the same id are the same story as far as removal is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Identity (`objectID` on the wire).
    #[serde(rename = "objectID")]
    pub object_id: StoryId,
    /// Link to the story. Empty for text posts.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Headline.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Submitter's username.
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    /// Number of comments.
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: u32,
    /// Score.
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u32,
}

impl Story {
    /// Placeholder story added locally by the "add dummy item" action.
    pub fn dummy(object_id: StoryId) -> Self {
        Self {
            object_id,
            url: "https://news.ycombinator.com/".to_string(),
            title: "Dummy Title".to_string(),
            author: "Dummy Author".to_string(),
            num_comments: 0,
            points: 0,
        }
    }
}

/// The API reports missing numbers and titles as `null` on comment-only hits.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_hit() {
        let json = r#"{
            "objectID": "1",
            "url": "https://redux.js.org/",
            "title": "Redux",
            "author": "Dan Abramov, Andrew Clark",
            "num_comments": 2,
            "points": 5,
            "created_at": "2015-06-02T00:00:00Z"
        }"#;

        let story: Story = serde_json::from_str(json).expect("valid story");
        assert_eq!(story.object_id, StoryId::new(1));
        assert_eq!(story.title, "Redux");
        assert_eq!(story.author, "Dan Abramov, Andrew Clark");
        assert_eq!(story.num_comments, 2);
        assert_eq!(story.points, 5);
    }

    #[test]
    fn null_fields_decode_as_defaults() {
        let json = r#"{"objectID": 9, "url": null, "title": null, "author": "pg", "num_comments": null, "points": null}"#;

        let story: Story = serde_json::from_str(json).expect("valid story");
        assert_eq!(story.url, "");
        assert_eq!(story.title, "");
        assert_eq!(story.num_comments, 0);
        assert_eq!(story.points, 0);
    }

    #[test]
    fn missing_fields_decode_as_defaults() {
        let story: Story = serde_json::from_str(r#"{"objectID": "3"}"#).expect("valid story");
        assert_eq!(story.object_id.get(), 3);
        assert!(story.author.is_empty());
    }

    #[test]
    fn missing_object_id_is_rejected() {
        let result: Result<Story, _> = serde_json::from_str(r#"{"title": "orphan"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn dummy_story_carries_given_id() {
        let story = Story::dummy(StoryId::new(1_000_000_000));
        assert_eq!(story.object_id.get(), 1_000_000_000);
        assert_eq!(story.author, "Dummy Author");
    }
}
