use crate::commands::render;
use crate::db::models::NewPost;
use crate::error::{AppError, AppResult};
use crate::filter;
use crate::state::AppState;

const RELATED_LIMIT: usize = 3;

/// Article form contents before validation.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub image: Option<String>,
}

pub fn publish(state: &AppState, draft: Draft) -> AppResult<String> {
    let tags: Vec<String> = draft
        .tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    let max = state.config.authoring.max_tags;
    if tags.len() > max {
        return Err(AppError::TooManyTags {
            max,
            got: tags.len(),
        });
    }

    let post = state.posts.create_post(NewPost {
        title: draft.title,
        content: draft.content,
        excerpt: draft.excerpt,
        category: draft.category,
        tags,
        image: draft
            .image
            .or_else(|| Some(state.config.authoring.default_image.clone())),
    })?;

    Ok(format!("Article published successfully! (id {})", post.id))
}

pub fn list(state: &AppState, token: Option<&str>) -> AppResult<String> {
    let posts = state.posts.list_posts()?;
    let selected = filter::filter_by_token(&posts, token);
    Ok(render::feed(&selected))
}

pub fn tokens(state: &AppState) -> AppResult<String> {
    let posts = state.posts.list_posts()?;
    Ok(filter::distinct_filter_tokens(&posts).join("\n"))
}

pub fn show(state: &AppState, id: &str) -> AppResult<String> {
    let post = state
        .posts
        .get_post_by_id(id)?
        .ok_or_else(|| AppError::PostNotFound(id.to_string()))?;
    let related = state.posts.related_posts(post.id, RELATED_LIMIT)?;
    Ok(render::article(&post, &related))
}
