use std::ops::Deref;
use std::sync::Arc;

use api::mock;
use api::mock::Creator;
use api::post::Post;

/// Content the simulated backend serves, loaded once at startup. The
/// feed screens read from this instead of refetching the fixtures on
/// every render, which also keeps post timestamps stable for a run.
#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub creators: Vec<Creator>,
    pub posts: Vec<Post>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new() -> Self {
        Self(Arc::new(AppStateData {
            creators: mock::sample_creators(),
            posts: mock::sample_posts(),
        }))
    }

    pub fn creator(&self, id: &str) -> Option<&Creator> {
        self.creators.iter().find(|c| c.id == id)
    }

    pub fn posts_by(&self, author_id: &str) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.author_id == author_id).collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
