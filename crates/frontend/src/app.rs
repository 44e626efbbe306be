use crate::routes::routes::AppRoutes;
use crate::shared::app_config::load_app_config;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(load_app_config());

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="error-message">
                    <p>"Something went wrong:"</p>
                    <ul>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect_view()
                        }}
                    </ul>
                </div>
            }
        }>
            <SessionProvider>
                <AppRoutes />
            </SessionProvider>
        </ErrorBoundary>
    }
}
