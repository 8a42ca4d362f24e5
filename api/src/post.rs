//! Feed content as the (mocked) backend serves it.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// What kind of media a post carries.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, strum::EnumIs)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Image,
    Video,
    Carousel,
}

/// A single feed post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub kind: PostKind,
    pub media_url: String,
    pub caption: String,
    pub likes: u32,
    pub comments: u32,
    /// How many supernovas this post has received overall.
    pub supernovas: u32,
    /// Posts curated into the "Feel Good" rail.
    pub feel_good: bool,
    pub posted_at: DateTime<Utc>,
    pub hashtags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_json_roundtrip() {
        let post = Post {
            id: "post_1".to_owned(),
            author_id: "user_1".to_owned(),
            kind: PostKind::Image,
            media_url: "https://example.com/p.jpg".to_owned(),
            caption: "Morning hike".to_owned(),
            likes: 12,
            comments: 3,
            supernovas: 1,
            feel_good: true,
            posted_at: Utc::now(),
            hashtags: vec!["nature".to_owned()],
        };

        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"kind\":\"image\""));
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(back, post);
    }
}
