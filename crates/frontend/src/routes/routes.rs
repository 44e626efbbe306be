use crate::departments::ui::{DepartmentIndex, DepartmentPage};
use crate::layout::Shell;
use crate::system::auth::guard::RequireSession;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn MainLayout(children: ChildrenFn) -> impl IntoView {
    view! {
        <RequireSession fallback=|| view! { <Redirect path="/login" /> } clone:children>
            <Shell clone:children>{children()}</Shell>
        </RequireSession>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route path=path!("/login") view=LoginPage />
                <Route
                    path=path!("/")
                    view=|| view! { <MainLayout><DepartmentIndex /></MainLayout> }
                />
                <Route
                    path=path!("/departments/:code")
                    view=|| view! { <MainLayout><DepartmentPage /></MainLayout> }
                />
            </Routes>
        </Router>
    }
}
