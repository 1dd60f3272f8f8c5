//! Post entity and the user-entered draft it is created from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned post identifier.
///
/// APIs in the wild hand out either numeric or string ids; both are accepted
/// and serialized back in the form they arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(u64),
    Text(String),
}

impl PostId {
    /// Parse a user-supplied id (CLI argument). Digits become numeric ids.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(n) => PostId::Number(n),
            Err(_) => PostId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{}", n),
            PostId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for PostId {
    fn from(value: u64) -> Self {
        PostId::Number(value)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        PostId::Text(value.to_string())
    }
}

/// A persisted post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Post {
    pub fn new(id: impl Into<PostId>, title: &str, description: &str) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// Build the post that results from applying `draft` to the entity `id`.
    pub fn from_draft(id: PostId, draft: Draft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
        }
    }
}

/// Title/description pair that has not been persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Draft {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

impl From<&Post> for Draft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            description: post.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_deserialize() {
        let numeric: Post = serde_json::from_str(r#"{"id":1,"title":"A","description":"a"}"#).unwrap();
        assert_eq!(numeric.id, PostId::Number(1));

        let text: Post = serde_json::from_str(r#"{"id":"abc","title":"A"}"#).unwrap();
        assert_eq!(text.id, PostId::Text("abc".into()));
        assert_eq!(text.description, "");
    }

    #[test]
    fn id_keeps_its_json_form() {
        let post = Post::new("7", "t", "d");
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], serde_json::json!("7"));

        let post = Post::new(7, "t", "d");
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], serde_json::json!(7));
    }

    #[test]
    fn parse_prefers_numbers() {
        assert_eq!(PostId::parse("42"), PostId::Number(42));
        assert_eq!(PostId::parse("x42"), PostId::Text("x42".into()));
        assert_eq!(PostId::parse("42").to_string(), "42");
    }

    #[test]
    fn draft_from_post_copies_fields() {
        let post = Post::new(1, "Title", "Body");
        let draft = Draft::from(&post);
        assert_eq!(draft, Draft::new("Title", "Body"));
    }
}
