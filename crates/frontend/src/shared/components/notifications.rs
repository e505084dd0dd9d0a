use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

use crate::shared::collection_view::Notice;
use crate::shared::icons::icon;

/// Keeps `handle` alive for as long as the current owner and drops it on cleanup.
/// Dropping a gloo `Timeout` cancels it.
fn hold_until_cleanup<H: 'static>(handle: H) {
    let slot = StoredValue::new_local(Some(handle));
    on_cleanup(move || {
        drop(slot.try_update_value(Option::take));
    });
}

/// Error toasts of a list. Each one closes on click or after `dismiss_after_ms`.
#[component]
pub fn NoticeStack(
    #[prop(into)] notices: Signal<Vec<Notice>>,
    on_dismiss: Callback<Uuid>,
    dismiss_after_ms: u32,
) -> impl IntoView {
    view! {
        <div class="notice-stack" role="status">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    if dismiss_after_ms > 0 {
                        let timer = Timeout::new(dismiss_after_ms, move || on_dismiss.run(id));
                        hold_until_cleanup(timer);
                    }
                    view! {
                        <div class="notice notice--error">
                            <span class="notice__message">{notice.message}</span>
                            <button
                                class="notice__close"
                                title="Dismiss"
                                on:click=move |_| on_dismiss.run(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_handle_dropped_with_owner() {
        let dropped = Rc::new(Cell::new(false));
        let owner = Owner::new();
        owner.with(|| hold_until_cleanup(DropFlag(dropped.clone())));
        assert!(!dropped.get());
        owner.cleanup();
        assert!(dropped.get());
    }
}
