/// UI helpers shared by the lists (search box, match highlighting, sort indicator)
use contracts::shared::SortDirection;
use leptos::prelude::*;
use std::ops::Range;
use wasm_bindgen::JsCast;

use crate::shared::config::app_config;

/// Splits `text` into consecutive byte ranges, flagging the ones that match
/// `query` case-insensitively. An empty query yields the whole text unflagged.
pub fn match_segments(text: &str, query: &str) -> Vec<(Range<usize>, bool)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() || text.is_empty() {
        return vec![(0..text.len(), false)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    while pos < text.len() {
        match match_len(&text[pos..], &needle) {
            Some(len) => {
                if pos > plain_start {
                    segments.push((plain_start..pos, false));
                }
                segments.push((pos..pos + len, true));
                pos += len;
                plain_start = pos;
            }
            None => {
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    if plain_start < text.len() {
        segments.push((plain_start..text.len(), false));
    }
    segments
}

/// Byte length of the prefix of `rest` whose lowercase form equals `needle`
fn match_len(rest: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, ch) in rest.char_indices() {
        for lower in ch.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}

/// Highlight matches in the text (case-insensitive)
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let parts: Vec<AnyView> = match_segments(text, query)
        .into_iter()
        .map(|(range, hit)| {
            let piece = text[range].to_string();
            if hit {
                view! { <mark class="search-hit">{piece}</mark> }.into_any()
            } else {
                view! { <span>{piece}</span> }.into_any()
            }
        })
        .collect();
    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and clear button
#[component]
pub fn SearchInput(
    /// Applied query (for the "active" highlight)
    #[prop(into)]
    value: Signal<String>,
    /// Receives the query once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let delay_ms = app_config().list.search_debounce_ms as i32;

    // Local input state (before debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let (Some(timeout_id), Some(window)) =
            (debounce_timeout.get_value(), web_sys::window())
        {
            window.clear_timeout_with_handle(timeout_id);
        }
        debounce_timeout.set_value(None);
    };

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let closure = wasm_bindgen::closure::Closure::once(move || {
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            delay_ms,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
        closure.forget();
    };

    let is_filter_active = move || !value.get().is_empty();

    let clear_filter = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                placeholder=placeholder
                class:search-input--active=is_filter_active
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator(active: bool, direction: SortDirection) -> &'static str {
    match (active, direction) {
        (false, _) => " ⇅",
        (true, SortDirection::Ascending) => " ▲",
        (true, SortDirection::Descending) => " ▼",
    }
}
