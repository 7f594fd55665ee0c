use crate::auth::registration::RegistrationForm;
use crate::commands::render;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::users::ProfileUpdate;

pub fn register(
    state: &AppState,
    fullname: String,
    email: String,
    password: String,
    confirm_password: String,
) -> AppResult<String> {
    let new_user = RegistrationForm {
        fullname,
        email,
        password,
        confirm_password,
    }
    .validate()?;

    let user = state.users.register_user(new_user)?;
    Ok(format!(
        "Account created successfully! Sign in as {} to continue.",
        user.email
    ))
}

pub fn login(state: &AppState, email: &str, password: &str) -> AppResult<String> {
    if email.is_empty() {
        return Err(AppError::MissingField("email"));
    }
    if password.is_empty() {
        return Err(AppError::MissingField("password"));
    }

    let user = state.users.login(email, password)?;
    Ok(format!(
        "Login successful! Welcome back, {}.",
        render::first_name(&user.fullname)
    ))
}

pub fn logout(state: &AppState) -> AppResult<String> {
    state.users.clear_session()?;
    Ok("Signed out.".to_string())
}

pub fn whoami(state: &AppState) -> AppResult<String> {
    Ok(match state.users.get_session()? {
        Some(user) => format!("Signed in as {} <{}>", user.fullname, user.email),
        None => "Not signed in.".to_string(),
    })
}

pub fn profile(state: &AppState) -> AppResult<String> {
    let user = state
        .users
        .get_session()?
        .ok_or(AppError::NoActiveSession)?;
    let posts = state.posts.list_posts_by_author(&user.fullname)?;
    Ok(render::profile(&user, &posts))
}

/// Omitted values are taken from the current profile, as a pre-filled form would.
pub fn edit_profile(
    state: &AppState,
    fullname: Option<String>,
    bio: Option<String>,
    role: Option<String>,
    avatar: Option<String>,
) -> AppResult<String> {
    let current = state
        .users
        .get_session()?
        .ok_or(AppError::NoActiveSession)?;

    state.users.update_profile(ProfileUpdate {
        fullname: fullname.unwrap_or(current.fullname),
        bio: bio.unwrap_or(current.bio),
        role: role.unwrap_or(current.role),
        avatar,
    })?;

    Ok("Profile updated successfully!".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::storage::Storage;

    fn state() -> AppState {
        AppState::new(Storage::in_memory(), Config::default()).unwrap()
    }

    fn sign_up(state: &AppState) {
        register(
            state,
            "Barbara Liskov".into(),
            "barbara@mit.edu".into(),
            "clu".into(),
            "clu".into(),
        )
        .unwrap();
    }

    #[test]
    fn register_then_login_greets_by_first_name() {
        let state = state();
        sign_up(&state);
        let msg = login(&state, "barbara@mit.edu", "clu").unwrap();
        assert_eq!(msg, "Login successful! Welcome back, Barbara.");
        assert_eq!(
            whoami(&state).unwrap(),
            "Signed in as Barbara Liskov <barbara@mit.edu>"
        );
    }

    #[test]
    fn register_twice_reports_duplicate() {
        let state = state();
        sign_up(&state);
        let err = register(
            &state,
            "Other".into(),
            "barbara@mit.edu".into(),
            "x".into(),
            "x".into(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail(_)));
    }

    #[test]
    fn login_requires_both_fields() {
        let state = state();
        assert!(matches!(
            login(&state, "", "pw").unwrap_err(),
            AppError::MissingField("email")
        ));
    }

    #[test]
    fn logout_returns_to_anonymous() {
        let state = state();
        sign_up(&state);
        login(&state, "barbara@mit.edu", "clu").unwrap();
        logout(&state).unwrap();
        assert_eq!(whoami(&state).unwrap(), "Not signed in.");
    }

    #[test]
    fn profile_needs_a_session() {
        let state = state();
        assert!(matches!(
            profile(&state).unwrap_err(),
            AppError::NoActiveSession
        ));
    }

    #[test]
    fn edit_profile_keeps_unsupplied_fields() {
        let state = state();
        sign_up(&state);
        login(&state, "barbara@mit.edu", "clu").unwrap();

        edit_profile(&state, None, Some("Turing Award 2008".into()), None, None).unwrap();

        let user = state.users.get_session().unwrap().unwrap();
        assert_eq!(user.fullname, "Barbara Liskov");
        assert_eq!(user.role, "Writer");
        assert_eq!(user.bio, "Turing Award 2008");
        assert!(profile(&state).unwrap().contains("Turing Award 2008"));
    }
}
