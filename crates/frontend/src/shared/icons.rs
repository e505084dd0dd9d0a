use leptos::prelude::*;

/// Stroke paths of a 24x24 feather-style icon
fn paths(name: &str) -> &'static [&'static str] {
    match name {
        "orders" => &[
            "M21 15V5a2 2 0 0 0-2-2H7l-4 4v8a2 2 0 0 0 2 2h6",
            "M3 7h4V3",
            "M16 21l2-2 4 4",
        ],
        "customers" => &[
            "M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2",
            "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
            "M23 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        "abandoned_carts" => &[
            "M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6",
            "M10 21a1 1 0 1 1-2 0 1 1 0 0 1 2 0z",
            "M21 21a1 1 0 1 1-2 0 1 1 0 0 1 2 0z",
        ],
        "wishlist" => &[
            "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78L12 21.23l8.84-8.84a5.5 5.5 0 0 0 0-7.78z",
        ],
        "returns" => &["M1 4v6h6", "M3.51 15a9 9 0 1 0 2.13-9.36L1 10"],
        "distributors" => &[
            "M1 3h15v13H1z",
            "M16 8h4l3 3v5h-7V8z",
            "M8 18.5a2.5 2.5 0 1 1-5 0 2.5 2.5 0 0 1 5 0z",
            "M21 18.5a2.5 2.5 0 1 1-5 0 2.5 2.5 0 0 1 5 0z",
        ],
        "inquiries" => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
        "refresh" => &[
            "M23 4v6h-6",
            "M1 20v-6h6",
            "M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15",
        ],
        "download" => &[
            "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
            "M7 10l5 5 5-5",
            "M12 15V3",
        ],
        "trash" => &[
            "M3 6h18",
            "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
        ],
        "x" => &["M18 6 6 18", "M6 6l12 12"],
        "chevron-left" => &["M15 18l-6-6 6-6"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        _ => &[],
    }
}

pub fn icon(name: &str) -> AnyView {
    let paths = paths(name);
    if paths.is_empty() {
        return view! { <span></span> }.into_any();
    }
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
    .into_any()
}
