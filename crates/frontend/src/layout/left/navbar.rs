use contracts::domain::departments;
use leptos::prelude::*;
use leptos_router::components::A;

/// One link per configured department
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                <li>
                    <A href="/">"Overview"</A>
                </li>
                {departments::all()
                    .iter()
                    .map(|spec| {
                        view! {
                            <li>
                                <A href=format!("/departments/{}", spec.code)>{spec.title}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
