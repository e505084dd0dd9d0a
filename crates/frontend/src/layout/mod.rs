pub mod global_context;
pub mod left;

use leptos::prelude::*;

/// Main application shell
///
/// ```text
/// +-----------+------------------------------+
/// |  Navbar   |           Content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <aside class="app-sidebar">
                <div class="app-sidebar__brand">"Store Admin"</div>
                <left::Navbar />
            </aside>
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
