use std::fmt::Write;

use crate::db::models::{Post, User, DEFAULT_ROLE};
use crate::posts::DEFAULT_CATEGORY;

pub fn post_card(post: &Post) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", post.id, post.title);
    let _ = writeln!(
        out,
        "    {} | {} | {} • {}",
        if post.category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            post.category.as_str()
        },
        post.author,
        post.date,
        post.read_time
    );
    let _ = write!(out, "    {}", post.excerpt);
    out
}

pub fn feed(posts: &[&Post]) -> String {
    if posts.is_empty() {
        return "No articles found in this category.".to_string();
    }
    posts
        .iter()
        .map(|p| post_card(p))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn article(post: &Post, related: &[Post]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(out, "{}", post.excerpt);
    let _ = writeln!(out);
    let role = if post.author_role.is_empty() {
        DEFAULT_ROLE
    } else {
        post.author_role.as_str()
    };
    let _ = writeln!(out, "By {} ({})", post.author, role);
    let _ = writeln!(out, "{} • {}", post.date, post.read_time);
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        let _ = writeln!(out, "{}", tags.join(" "));
    }
    let _ = writeln!(out);
    let _ = write!(out, "{}", post.content);

    let _ = write!(out, "\n\nRelated articles:\n");
    if related.is_empty() {
        let _ = write!(out, "No related articles found.");
    } else {
        let cards: Vec<String> = related.iter().map(post_card).collect();
        let _ = write!(out, "{}", cards.join("\n"));
    }
    out
}

pub fn profile(user: &User, posts: &[Post]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", user.fullname, user.role);
    let _ = writeln!(
        out,
        "{}",
        if user.bio.is_empty() {
            "No bio yet. Use edit-profile to add one."
        } else {
            user.bio.as_str()
        }
    );
    let _ = writeln!(
        out,
        "Articles: {}  Followers: {}  Following: {}",
        user.articles, user.followers, user.following
    );
    let _ = writeln!(out);
    if posts.is_empty() {
        let _ = write!(out, "You haven't written any articles yet.");
    } else {
        let cards: Vec<String> = posts.iter().map(post_card).collect();
        let _ = write!(out, "{}", cards.join("\n\n"));
    }
    out
}

/// First word of the name, as shown in a greeting.
pub fn first_name(fullname: &str) -> &str {
    fullname.split(' ').next().unwrap_or(fullname)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::default_posts;

    #[test]
    fn empty_feed_has_a_message() {
        assert_eq!(feed(&[]), "No articles found in this category.");
    }

    #[test]
    fn card_shows_id_title_and_meta() {
        let posts = default_posts();
        let card = post_card(&posts[0]);
        assert!(card.starts_with("[1] The Future of Web Assembly"));
        assert!(card.contains("Dev | Elena Rodriguez | Oct 26, 2023 • 5 min read"));
    }

    #[test]
    fn article_lists_tags_and_related() {
        let posts = default_posts();
        let text = article(&posts[2], &posts[..1]);
        assert!(text.contains("#React #Vue #JavaScript"));
        assert!(text.contains("By Mike Ross (Frontend Developer)"));
        assert!(text.contains("Related articles:\n[1] The Future of Web Assembly"));
    }

    #[test]
    fn first_name_splits_on_space() {
        assert_eq!(first_name("Ada Lovelace"), "Ada");
        assert_eq!(first_name("Cher"), "Cher");
    }
}
