use contracts::shared::config::ApiConfig;
use contracts::system::session::SessionContext;
use leptos::prelude::*;

use super::api;

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(RwSignal::new(SessionContext::new()));
    children()
}

/// Hook to access the session
pub fn use_session() -> RwSignal<SessionContext> {
    use_context::<RwSignal<SessionContext>>().expect("SessionProvider not found in component tree")
}

/// Helper: Perform login
///
/// Takes the session signal up front: after the `await` there is no
/// reactive owner left to look the context up from.
pub async fn do_login(
    session: RwSignal<SessionContext>,
    config: ApiConfig,
    username: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(&config, username.clone(), password).await?;

    let mut next = session.get_untracked();
    next.login(&username, &response)?;
    log::info!("Logged in as {}", next.display_name());
    session.set(next);
    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(session: RwSignal<SessionContext>) {
    session.update(|s| s.logout());
    log::info!("Logged out");
}
