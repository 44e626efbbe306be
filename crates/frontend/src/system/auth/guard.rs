use leptos::prelude::*;

use super::context::use_session;

/// Renders `children` for a logged-in session, `fallback` otherwise
#[component]
pub fn RequireSession(#[prop(into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show when=move || session.with(|s| s.is_authenticated()) fallback=fallback>
            {children()}
        </Show>
    }
}
