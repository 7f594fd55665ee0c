use chrono::{Local, NaiveDate};

use crate::db::models::{NewPost, Post, UserPatch, DEFAULT_ROLE};
use crate::error::{AppError, AppResult};
use crate::ids::IdGenerator;
use crate::storage::{keys, Storage};
use crate::users::{avatar_url, UserRepository};

pub const WORDS_PER_MINUTE: usize = 200;
pub const EXCERPT_CHARS: usize = 150;
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800";

const ANONYMOUS_AUTHOR: &str = "Anonymous";
const ANONYMOUS_ROLE: &str = "Guest";

/// `ceil(words / 200)` minutes, words being whitespace-separated tokens.
pub fn read_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    format!("{} min read", words.div_ceil(WORDS_PER_MINUTE))
}

/// First 150 characters of the body followed by an ellipsis.
pub fn excerpt(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}

/// `Oct 26, 2023`
pub fn format_post_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Anything a post id can arrive as. Strings (from a link or a command
/// line) compare by numeric value, so `"2"`, `" 2 "` and `"2.0"` all find id 2.
pub trait IntoPostId {
    fn into_post_id(self) -> Option<i64>;
}

impl IntoPostId for i64 {
    fn into_post_id(self) -> Option<i64> {
        Some(self)
    }
}

impl IntoPostId for i32 {
    fn into_post_id(self) -> Option<i64> {
        Some(i64::from(self))
    }
}

impl IntoPostId for u64 {
    fn into_post_id(self) -> Option<i64> {
        i64::try_from(self).ok()
    }
}

impl IntoPostId for &str {
    fn into_post_id(self) -> Option<i64> {
        let trimmed = self.trim();
        trimmed.parse::<i64>().ok().or_else(|| {
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite() && n.fract() == 0.0)
                .filter(|n| n.abs() < 9.0e15)
                .map(|n| n as i64)
        })
    }
}

impl IntoPostId for &String {
    fn into_post_id(self) -> Option<i64> {
        self.as_str().into_post_id()
    }
}

impl IntoPostId for String {
    fn into_post_id(self) -> Option<i64> {
        self.as_str().into_post_id()
    }
}

/// Posts, newest first, with attribution taken from the current session.
#[derive(Clone)]
pub struct PostRepository {
    storage: Storage,
    ids: IdGenerator,
    users: UserRepository,
}

impl PostRepository {
    pub fn new(storage: Storage, ids: IdGenerator, users: UserRepository) -> Self {
        Self {
            storage,
            ids,
            users,
        }
    }

    pub fn list_posts(&self) -> AppResult<Vec<Post>> {
        self.storage.get_or_default(keys::POSTS)
    }

    pub fn create_post(&self, new_post: NewPost) -> AppResult<Post> {
        self.create_post_on(new_post, Local::now().date_naive())
    }

    fn create_post_on(&self, new_post: NewPost, today: NaiveDate) -> AppResult<Post> {
        if new_post.title.trim().is_empty() {
            return Err(AppError::MissingField("title"));
        }
        if new_post.content.trim().is_empty() {
            return Err(AppError::MissingField("content"));
        }

        let session = self.users.get_session()?;
        let (author, author_role, author_avatar) = match &session {
            Some(user) => (
                user.fullname.clone(),
                if user.role.is_empty() {
                    DEFAULT_ROLE.to_string()
                } else {
                    user.role.clone()
                },
                user.avatar.clone(),
            ),
            None => (
                ANONYMOUS_AUTHOR.to_string(),
                ANONYMOUS_ROLE.to_string(),
                avatar_url(ANONYMOUS_AUTHOR),
            ),
        };

        let category = new_post
            .category
            .filter(|c| !c.is_empty())
            .or_else(|| new_post.tags.first().cloned())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let post = Post {
            id: self.ids.next_id()?,
            title: new_post.title,
            excerpt: new_post
                .excerpt
                .unwrap_or_else(|| excerpt(&new_post.content)),
            read_time: read_time(&new_post.content),
            content: new_post.content,
            category,
            author,
            author_role,
            author_avatar,
            image: new_post
                .image
                .filter(|i| !i.is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            date: format_post_date(today),
            tags: new_post.tags,
        };

        let mut posts = self.list_posts()?;
        posts.insert(0, post.clone());
        self.storage.set(keys::POSTS, &posts)?;
        tracing::info!("Published post {} by {}", post.id, post.author);

        if let Some(user) = session {
            self.users.update_session(UserPatch {
                articles: Some(user.articles.saturating_add(1)),
                ..Default::default()
            })?;
        }

        Ok(post)
    }

    pub fn get_post_by_id(&self, id: impl IntoPostId) -> AppResult<Option<Post>> {
        let Some(id) = id.into_post_id() else {
            return Ok(None);
        };
        let post = self.list_posts()?.into_iter().find(|p| p.id == id);
        tracing::debug!("Lookup post {}: found={}", id, post.is_some());
        Ok(post)
    }

    /// Posts whose author snapshot equals `fullname` exactly.
    pub fn list_posts_by_author(&self, fullname: &str) -> AppResult<Vec<Post>> {
        Ok(self
            .list_posts()?
            .into_iter()
            .filter(|p| p.author == fullname)
            .collect())
    }

    /// Up to `limit` other posts, in feed order.
    pub fn related_posts(&self, id: impl IntoPostId, limit: usize) -> AppResult<Vec<Post>> {
        let id = id.into_post_id();
        Ok(self
            .list_posts()?
            .into_iter()
            .filter(|p| Some(p.id) != id)
            .take(limit)
            .collect())
    }
}
