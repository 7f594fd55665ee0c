pub mod account;
pub mod feed;
pub mod render;

use clap::Subcommand;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create an account
    Register {
        #[arg(long = "name")]
        fullname: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long = "confirm")]
        confirm_password: String,
    },
    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show who is signed in
    Whoami,
    /// Show the signed-in user's profile and articles
    Profile,
    /// Edit the signed-in user's profile; omitted fields keep their value
    EditProfile {
        #[arg(long = "name")]
        fullname: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },
    /// Publish an article
    Publish {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// Repeat for several tags; the first one becomes the category
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        excerpt: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// List articles, newest first
    Feed {
        /// Category or tag to filter by
        #[arg(long)]
        filter: Option<String>,
    },
    /// List the categories and tags the feed can be filtered by
    Tokens,
    /// Show one article and a few related ones
    Show { id: String },
}

/// Run one command and return what to print.
pub fn run(state: &AppState, command: Command) -> AppResult<String> {
    match command {
        Command::Register {
            fullname,
            email,
            password,
            confirm_password,
        } => account::register(state, fullname, email, password, confirm_password),
        Command::Login { email, password } => account::login(state, &email, &password),
        Command::Logout => account::logout(state),
        Command::Whoami => account::whoami(state),
        Command::Profile => account::profile(state),
        Command::EditProfile {
            fullname,
            bio,
            role,
            avatar,
        } => account::edit_profile(state, fullname, bio, role, avatar),
        Command::Publish {
            title,
            content,
            tags,
            category,
            excerpt,
            image,
        } => feed::publish(
            state,
            feed::Draft {
                title,
                content,
                tags,
                category,
                excerpt,
                image,
            },
        ),
        Command::Feed { filter } => feed::list(state, filter.as_deref()),
        Command::Tokens => feed::tokens(state),
        Command::Show { id } => feed::show(state, &id),
    }
}
