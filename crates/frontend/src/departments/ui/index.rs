use contracts::domain::departments;
use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page listing every department.
#[component]
pub fn DepartmentIndex() -> impl IntoView {
    view! {
        <div class="department-index">
            <h1>"Departments"</h1>
            <ul class="department-index__list">
                {departments::all()
                    .iter()
                    .map(|spec| {
                        view! {
                            <li>
                                <A href=format!("/departments/{}", spec.code)>{spec.title}</A>
                                {spec.has_summary().then_some(view! { <span class="department-index__tag">"summary"</span> })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
