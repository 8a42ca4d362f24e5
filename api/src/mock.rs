//! The content the simulated backend serves: ten creators, ten posts.
//!
//! This stands in for a feed service. It is deliberately small; the demo
//! only needs enough material to fill the screens.

use chrono::TimeDelta;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::cause::CauseId;
use crate::post::Post;
use crate::post::PostKind;
use crate::user::epoch_millis;

/// A content creator's public profile, as the feed would return it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: String,
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub bio: String,
    pub karma: u32,
    pub cause: CauseId,
    pub followers: u32,
    pub following: u32,
    pub posts: u32,
    pub verified: bool,
}

const AVATAR_BASE: &str = "https://i.pravatar.cc/200";

#[allow(clippy::too_many_arguments)]
fn creator(
    id: &str,
    name: &str,
    username: &str,
    avatar_img: u32,
    bio: &str,
    karma: u32,
    cause: CauseId,
    followers: u32,
    following: u32,
    posts: u32,
    verified: bool,
) -> Creator {
    Creator {
        id: id.to_owned(),
        name: name.to_owned(),
        username: username.to_owned(),
        avatar: format!("{AVATAR_BASE}?img={avatar_img}"),
        bio: bio.to_owned(),
        karma,
        cause,
        followers,
        following,
        posts,
        verified,
    }
}

/// All sample creators, ordered by id.
pub fn sample_creators() -> Vec<Creator> {
    vec![
        creator(
            "user_1",
            "Sarah Chen",
            "sarahcreates",
            1,
            "✨ Creating positive vibes | Environmental advocate | Nature lover 🌿",
            87,
            CauseId::EC,
            12_500,
            890,
            156,
            true,
        ),
        creator(
            "user_2",
            "Marcus Johnson",
            "marcus_fit",
            3,
            "Fitness coach | Mental health advocate 💪🧠",
            92,
            CauseId::MH,
            45_000,
            520,
            234,
            true,
        ),
        creator(
            "user_3",
            "Emma Wilson",
            "emma.good",
            5,
            "Spreading kindness one post at a time 💚",
            76,
            CauseId::HW,
            8_900,
            1_200,
            89,
            false,
        ),
        creator(
            "user_4",
            "David Park",
            "davidventures",
            7,
            "Adventure seeker | Animal rescue volunteer 🐕",
            81,
            CauseId::AW,
            23_000,
            670,
            312,
            true,
        ),
        creator(
            "user_5",
            "Lisa Thompson",
            "lisa_cooks",
            9,
            "Plant-based chef 🌱 | Health advocate",
            68,
            CauseId::HH,
            15_600,
            430,
            178,
            false,
        ),
        creator(
            "user_6",
            "Alex Rivera",
            "alex_helps",
            11,
            "Humanitarian worker | Making a difference 🌍",
            95,
            CauseId::HC,
            67_000,
            340,
            445,
            true,
        ),
        creator(
            "user_7",
            "Jordan Lee",
            "jordanlee",
            13,
            "Content creator | Ocean conservation 🌊",
            73,
            CauseId::EC,
            34_000,
            890,
            267,
            false,
        ),
        creator(
            "user_8",
            "Mia Santos",
            "miawellness",
            15,
            "Yoga instructor | Mindfulness 🧘‍♀️",
            84,
            CauseId::MH,
            28_000,
            560,
            198,
            true,
        ),
        creator(
            "user_9",
            "Chris Martin",
            "chrisoutdoors",
            17,
            "Wildlife photographer 📷 | Conservation",
            79,
            CauseId::AW,
            41_000,
            280,
            523,
            true,
        ),
        creator(
            "user_10",
            "Nina Patel",
            "ninahelps",
            19,
            "Social worker | Community builder 💛",
            88,
            CauseId::HW,
            19_000,
            720,
            145,
            false,
        ),
    ]
}

pub fn creator_by_id(id: &str) -> Option<Creator> {
    sample_creators().into_iter().find(|c| c.id == id)
}

/// Suggestions for the follow step: up to `count` creators not in
/// `exclude`, rotated by wall clock so repeat visits vary a little.
pub fn suggested_creators(count: usize, exclude: &[String]) -> Vec<Creator> {
    let available: Vec<Creator> = sample_creators()
        .into_iter()
        .filter(|c| !exclude.contains(&c.id))
        .collect();
    if available.is_empty() {
        return available;
    }
    let offset = epoch_millis() as usize % available.len();
    available
        .iter()
        .cycle()
        .skip(offset)
        .take(count.min(available.len()))
        .cloned()
        .collect()
}

struct PostSeed {
    id: &'static str,
    author_id: &'static str,
    media: &'static str,
    caption: &'static str,
    likes: u32,
    comments: u32,
    supernovas: u32,
    feel_good: bool,
    hours_ago: i64,
    hashtags: &'static [&'static str],
}

const POST_SEEDS: [PostSeed; 10] = [
    PostSeed {
        id: "post_1",
        author_id: "user_1",
        media: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800",
        caption: "Morning hike in the mountains 🏔️ Nothing beats fresh air and beautiful views. #nature #hiking #feelgood",
        likes: 1234,
        comments: 89,
        supernovas: 45,
        feel_good: true,
        hours_ago: 2,
        hashtags: &["nature", "hiking", "feelgood"],
    },
    PostSeed {
        id: "post_2",
        author_id: "user_2",
        media: "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=800",
        caption: "Remember: Your mental health matters more than any workout 💪🧠 Take breaks when you need them.",
        likes: 3456,
        comments: 234,
        supernovas: 128,
        feel_good: true,
        hours_ago: 4,
        hashtags: &["mentalhealth", "fitness", "selfcare"],
    },
    PostSeed {
        id: "post_3",
        author_id: "user_3",
        media: "https://images.unsplash.com/photo-1447752875215-b2761acb3c5d?w=800",
        caption: "Found this peaceful spot today. Sometimes you just need to disconnect and breathe 🌿",
        likes: 892,
        comments: 45,
        supernovas: 23,
        feel_good: false,
        hours_ago: 5,
        hashtags: &[],
    },
    PostSeed {
        id: "post_4",
        author_id: "user_4",
        media: "https://images.unsplash.com/photo-1433086966358-54859d0ed716?w=800",
        caption: "Another successful rescue mission! This little guy is now safe and being cared for 🐕💚",
        likes: 5678,
        comments: 456,
        supernovas: 234,
        feel_good: true,
        hours_ago: 6,
        hashtags: &["animalrescue", "dogsofinstagram", "adopt"],
    },
    PostSeed {
        id: "post_5",
        author_id: "user_5",
        media: "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=800",
        caption: "Beach cleanup day! 2 hours and 50 pounds of trash collected 🌊♻️ Every action counts!",
        likes: 2345,
        comments: 178,
        supernovas: 89,
        feel_good: true,
        hours_ago: 8,
        hashtags: &["beachcleanup", "environment", "volunteer"],
    },
    PostSeed {
        id: "post_6",
        author_id: "user_6",
        media: "https://images.unsplash.com/photo-1519681393784-d120267933ba?w=800",
        caption: "Delivering supplies to communities in need. The smiles make everything worth it 🌍💛",
        likes: 8901,
        comments: 567,
        supernovas: 345,
        feel_good: true,
        hours_ago: 10,
        hashtags: &["humanitarian", "givingback", "community"],
    },
    PostSeed {
        id: "post_7",
        author_id: "user_7",
        media: "https://images.unsplash.com/photo-1476514525535-07fb3b4ae5f1?w=800",
        caption: "Sunset from the trail. Nature always knows how to put on a show 🌅",
        likes: 1567,
        comments: 67,
        supernovas: 34,
        feel_good: false,
        hours_ago: 12,
        hashtags: &[],
    },
    PostSeed {
        id: "post_8",
        author_id: "user_8",
        media: "https://images.unsplash.com/photo-1501785888041-af3ef285b470?w=800",
        caption: "Morning meditation by the lake. Starting the day with intention and gratitude 🧘‍♀️✨",
        likes: 3210,
        comments: 145,
        supernovas: 78,
        feel_good: true,
        hours_ago: 14,
        hashtags: &["meditation", "mindfulness", "wellness"],
    },
    PostSeed {
        id: "post_9",
        author_id: "user_9",
        media: "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?w=800",
        caption: "Caught this family of foxes during my morning shoot 🦊📷 Wildlife photography never gets old!",
        likes: 6789,
        comments: 389,
        supernovas: 167,
        feel_good: true,
        hours_ago: 16,
        hashtags: &["wildlife", "photography", "nature"],
    },
    PostSeed {
        id: "post_10",
        author_id: "user_10",
        media: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800",
        caption: "Community garden project update! Fresh vegetables for 20 families this month 🥬🍅",
        likes: 2890,
        comments: 198,
        supernovas: 95,
        feel_good: true,
        hours_ago: 18,
        hashtags: &["community", "garden", "localfood"],
    },
];

/// All sample posts, newest first.
pub fn sample_posts() -> Vec<Post> {
    let now = Utc::now();
    POST_SEEDS
        .iter()
        .map(|seed| Post {
            id: seed.id.to_owned(),
            author_id: seed.author_id.to_owned(),
            kind: PostKind::Image,
            media_url: seed.media.to_owned(),
            caption: seed.caption.to_owned(),
            likes: seed.likes,
            comments: seed.comments,
            supernovas: seed.supernovas,
            feel_good: seed.feel_good,
            posted_at: now - TimeDelta::hours(seed.hours_ago),
            hashtags: seed.hashtags.iter().map(|h| (*h).to_owned()).collect(),
        })
        .collect()
}

pub fn posts_by_author(author_id: &str) -> Vec<Post> {
    sample_posts()
        .into_iter()
        .filter(|p| p.author_id == author_id)
        .collect()
}

pub fn feel_good_posts() -> Vec<Post> {
    sample_posts().into_iter().filter(|p| p.feel_good).collect()
}

/// One page of the feed, newest first. Pages are 1-based.
pub fn recent_posts(page: usize, limit: usize) -> Vec<Post> {
    let start = page.saturating_sub(1) * limit;
    sample_posts().into_iter().skip(start).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_consistent() {
        let creators = sample_creators();
        let posts = sample_posts();
        assert_eq!(creators.len(), 10);
        assert_eq!(posts.len(), 10);

        // every post has a known author
        for post in &posts {
            assert!(creator_by_id(&post.author_id).is_some(), "{}", post.id);
        }
    }

    #[test]
    fn pagination_slices() {
        assert_eq!(recent_posts(1, 4).len(), 4);
        assert_eq!(recent_posts(3, 4).len(), 2);
        assert_eq!(recent_posts(4, 4).len(), 0);
        assert_eq!(recent_posts(1, 4)[0].id, "post_1");
    }

    #[test]
    fn suggestions_respect_exclusions() {
        let exclude = vec!["user_1".to_owned(), "user_2".to_owned()];
        let suggested = suggested_creators(6, &exclude);
        assert_eq!(suggested.len(), 6);
        assert!(suggested.iter().all(|c| !exclude.contains(&c.id)));
    }

    #[test]
    fn feel_good_filter() {
        assert!(feel_good_posts().iter().all(|p| p.feel_good));
        assert_eq!(feel_good_posts().len(), 8);
    }
}
