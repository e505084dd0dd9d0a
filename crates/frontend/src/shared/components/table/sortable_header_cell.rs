//! Clickable table header that drives a list's sort
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Total"
//!     active=Signal::derive(move || sort_field.get() == OrderField::Total)
//!     direction=sort_direction
//!     on_sort=Callback::new(move |_| request_sort(OrderField::Total))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::get_sort_indicator;
use contracts::shared::SortDirection;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,

    /// Whether the list is currently sorted by this column
    #[prop(into)]
    active: Signal<bool>,

    #[prop(into)] direction: Signal<SortDirection>,

    on_sort: Callback<()>,

    #[prop(optional, default = "left")] align: &'static str,
) -> impl IntoView {
    let header_class = if align == "right" {
        "table__sortable-header table__sortable-header--right"
    } else {
        "table__sortable-header"
    };

    let icon_class = move || {
        if active.get() {
            "table__sort-icon table__sort-icon--active"
        } else {
            "table__sort-icon"
        }
    };

    view! {
        <TableHeaderCell>
            <div class=header_class on:click=move |_| on_sort.run(())>
                {label}
                <span class=icon_class>
                    {move || get_sort_indicator(active.get(), direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
