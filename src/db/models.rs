use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLE: &str = "Writer";

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub fullname: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub articles: u32,
}

/// Input for registering a user. `role` falls back to [`DEFAULT_ROLE`].
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

/// Merge patch over a [`User`]: only `Some` fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub fullname: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub followers: Option<u32>,
    pub following: Option<u32>,
    pub articles: Option<u32>,
}

impl UserPatch {
    pub fn apply(self, mut user: User) -> User {
        if let Some(fullname) = self.fullname {
            user.fullname = fullname;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(avatar) = self.avatar {
            user.avatar = avatar;
        }
        if let Some(bio) = self.bio {
            user.bio = bio;
        }
        if let Some(followers) = self.followers {
            user.followers = followers;
        }
        if let Some(following) = self.following {
            user.following = following;
        }
        if let Some(articles) = self.articles {
            user.articles = articles;
        }
        user
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub category: String,
    pub author: String,
    #[serde(default)]
    pub author_role: String,
    #[serde(default)]
    pub author_avatar: String,
    #[serde(default)]
    pub image: String,
    pub date: String,
    pub read_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Input for authoring a post. Omitted fields get authoring defaults.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
}
