use leptos::prelude::*;

use super::storage;

/// Whether the operator currently holds a session
#[derive(Clone, Copy)]
pub struct SessionState {
    pub signed_in: RwSignal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            signed_in: RwSignal::new(storage::has_session()),
        }
    }

    /// Called when the backend rejects the token
    pub fn expire(&self) {
        storage::clear_session();
        self.signed_in.set(false);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> Option<SessionState> {
    use_context::<SessionState>()
}

/// Component that requires authentication
/// Shows fallback if not authenticated
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session().unwrap_or_default();

    view! {
        <Show
            when=move || session.signed_in.get()
            fallback=|| view! {
                <div class="auth-required">
                    <h2>"Sign-in required"</h2>
                    <p>"Your session has ended. Sign in again to continue."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
