use bloggy::config::Config;
use bloggy::db;
use bloggy::db::models::{NewPost, NewUser};
use bloggy::error::AppError;
use bloggy::filter::{distinct_filter_tokens, filter_by_token};
use bloggy::state::AppState;
use bloggy::storage::Storage;
use tempfile::TempDir;

fn open(dir: &TempDir) -> AppState {
    let pool = db::create_pool(&dir.path().join("blog.db")).expect("Failed to create database");
    db::run_migrations(&pool).expect("Failed to run migrations");
    AppState::new(Storage::sqlite(pool), Config::default()).expect("Failed to build state")
}

fn writer(name: &str, email: &str) -> NewUser {
    NewUser {
        fullname: name.to_string(),
        email: email.to_string(),
        password: "s3cret".to_string(),
        role: None,
    }
}

fn draft(title: &str) -> NewPost {
    NewPost {
        title: title.to_string(),
        content: "Some words about something".to_string(),
        ..Default::default()
    }
}

#[test]
fn first_run_seeds_three_posts_and_no_users() {
    let dir = TempDir::new().unwrap();
    let state = open(&dir);

    let titles: Vec<String> = state
        .posts
        .list_posts()
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "The Future of Web Assembly",
            "Design Systems 101",
            "React vs Vue in 2024"
        ]
    );
    assert!(state.users.list_users().unwrap().is_empty());
}

#[test]
fn registered_user_can_authenticate() {
    let dir = TempDir::new().unwrap();
    let state = open(&dir);

    state
        .users
        .register_user(writer("Niklaus Wirth", "wirth@ethz.ch"))
        .unwrap();
    let found = state
        .users
        .authenticate("wirth@ethz.ch", "s3cret")
        .unwrap()
        .expect("user should authenticate");
    assert_eq!(found.fullname, "Niklaus Wirth");
}

#[test]
fn duplicate_email_adds_exactly_one_user() {
    let dir = TempDir::new().unwrap();
    let state = open(&dir);

    state
        .users
        .register_user(writer("First", "same@example.com"))
        .unwrap();
    let second = state.users.register_user(NewUser {
        password: "different".to_string(),
        ..writer("Second", "same@example.com")
    });

    assert!(matches!(second, Err(AppError::DuplicateEmail(_))));
    assert_eq!(state.users.list_users().unwrap().len(), 1);
}

#[test]
fn anonymous_post_is_attributed_to_guest() {
    let dir = TempDir::new().unwrap();
    let state = open(&dir);

    let post = state.posts.create_post(draft("Drive-by")).unwrap();
    assert_eq!(post.author, "Anonymous");
    assert_eq!(post.author_role, "Guest");
}

#[test]
fn posting_increments_article_count_in_session_and_user_list() {
    let dir = TempDir::new().unwrap();
    let state = open(&dir);

    let user = state
        .users
        .register_user(writer("Edsger Dijkstra", "ewd@utexas.edu"))
        .unwrap();
    state.users.login("ewd@utexas.edu", "s3cret").unwrap();

    state.posts.create_post(draft("GOTO considered harmful")).unwrap();

    let session = state.users.get_session().unwrap().unwrap();
    let listed = state.users.find_by_id(user.id).unwrap().unwrap();
    assert_eq!(session.articles, user.articles + 1);
    assert_eq!(listed.articles, user.articles + 1);
    assert_eq!(session, listed);
}

#[test]
fn new_posts_come_before_older_ones() {
    let dir = TempDir::new().unwrap();
    let state = open(&dir);

    let a = state.posts.create_post(draft("A")).unwrap();
    let b = state.posts.create_post(draft("B")).unwrap();
    let c = state.posts.create_post(draft("C")).unwrap();

    let ids: Vec<i64> = state
        .posts
        .list_posts()
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![c.id, b.id, a.id, 1, 2, 3]);
}

#[test]
fn filter_all_and_development() {
    let dir = TempDir::new().unwrap();
    let state = open(&dir);
    let posts = state.posts.list_posts().unwrap();

    let lower: Vec<i64> = filter_by_token(&posts, Some("all")).iter().map(|p| p.id).collect();
    let upper: Vec<i64> = filter_by_token(&posts, Some("All")).iter().map(|p| p.id).collect();
    assert_eq!(lower, vec![1, 2, 3]);
    assert_eq!(upper, lower);

    let dev = filter_by_token(&posts, Some("development"));
    assert!(dev.iter().all(|p| p.category == "Dev"));
    assert_eq!(dev.len(), 2);

    assert_eq!(distinct_filter_tokens(&posts)[0], "All");
}

#[test]
fn string_and_numeric_ids_find_the_same_post() {
    let dir = TempDir::new().unwrap();
    let state = open(&dir);

    let by_str = state.posts.get_post_by_id("2").unwrap();
    let by_num = state.posts.get_post_by_id(2).unwrap();
    assert!(by_str.is_some());
    assert_eq!(by_str, by_num);
}
