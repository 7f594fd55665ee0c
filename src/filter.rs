//! Feed filtering by category or tag.
//!
//! Matching is loose: substring in either direction on the category,
//! substring on tags, plus the `development` and `tutorials` aliases.
//! An empty category is contained in every token, so uncategorised posts
//! show up under every filter.

use std::collections::HashSet;

use crate::db::models::Post;

pub const ALL: &str = "All";

/// Every selectable token: `All` first, then categories and tags in the
/// order they first appear. Duplicates collapse case-sensitively.
pub fn distinct_filter_tokens(posts: &[Post]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut tokens = vec![ALL.to_string()];
    seen.insert(ALL);

    for post in posts {
        let category = Some(post.category.as_str()).filter(|c| !c.is_empty());
        for token in category.into_iter().chain(post.tags.iter().map(String::as_str)) {
            if seen.insert(token) {
                tokens.push(token.to_string());
            }
        }
    }

    tokens
}

/// Posts matching `token`, in their original order. `None` or any casing
/// of `all` keeps everything.
pub fn filter_by_token<'a>(posts: &'a [Post], token: Option<&str>) -> Vec<&'a Post> {
    let needle = match token {
        Some(t) if !t.eq_ignore_ascii_case(ALL) => t.to_lowercase(),
        _ => return posts.iter().collect(),
    };

    posts.iter().filter(|post| matches(post, &needle)).collect()
}

fn matches(post: &Post, needle: &str) -> bool {
    let category = post.category.to_lowercase();

    if category.contains(needle) || needle.contains(category.as_str()) {
        return true;
    }

    if post
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(needle))
    {
        return true;
    }

    match needle {
        "development" => category.contains("dev"),
        "tutorials" => category == "tutorial" || post.tags.iter().any(|t| t == "Tutorial"),
        _ => false,
    }
}
