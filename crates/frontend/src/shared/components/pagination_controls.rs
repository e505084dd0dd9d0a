use crate::shared::icons::icon;
use leptos::prelude::*;

/// First and last row numbers shown on a 1-based page, `None` when empty
pub fn visible_range(page: usize, page_size: usize, total_count: usize) -> Option<(usize, usize)> {
    let first = page.checked_sub(1)?.checked_mul(page_size)? + 1;
    if total_count == 0 || first > total_count {
        return None;
    }
    Some((first, (first + page_size - 1).min(total_count)))
}

/// Pager under a list: previous/next, "rows a-b of n" and a page size picker
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages, at least 1
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Rows matching the search and filter
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    page_size_options: Vec<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get();
                    let count = total_count.get();
                    match visible_range(page, page_size.get(), count) {
                        Some((first, last)) => format!(
                            "Page {} of {} · {}-{} of {}",
                            page,
                            total_pages.get().max(1),
                            first,
                            last,
                            count
                        ),
                        None => "No rows".to_string(),
                    }
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range() {
        assert_eq!(visible_range(1, 10, 25), Some((1, 10)));
        assert_eq!(visible_range(3, 10, 25), Some((21, 25)));
        assert_eq!(visible_range(4, 10, 25), None);
        assert_eq!(visible_range(1, 10, 0), None);
        assert_eq!(visible_range(0, 10, 25), None);
    }
}
