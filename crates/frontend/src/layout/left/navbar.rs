use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::shared::icons;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    view! {
        <nav class="main-nav-bar">
            <ul>
                {Screen::all().into_iter().map(|screen| {
                    view! {
                        <li
                            class:active=move || ctx.active.get() == screen
                            on:click=move |_| ctx.open(screen)
                        >
                            {icons::icon(screen.key())}
                            <span>{screen.title()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
