//! Generic list screen: search box, discrete filter, sortable thaw table,
//! pager, notices, row actions and CSV/TSV export over one REST collection.
//!
//! ```ignore
//! let source: RestCollection<Order> = RestCollection::new("orders");
//! view! {
//!     <CollectionPage
//!         title="Orders"
//!         source=source
//!         columns=table_columns()
//!         sort_field=OrderField::CreatedAt
//!         sort_direction=SortDirection::Descending
//!         categories=status_options()
//!     />
//! }
//! ```

use std::fmt::Display;

use chrono::NaiveDate;
use contracts::shared::SortDirection;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thaw::*;

use crate::shared::api_client::RestCollection;
use crate::shared::collection_view::{
    mutate, refresh, transition, ControllerHandle, DiscreteFilter, ListController, ListError,
    ListEvent, ListRecord, ListState, LoadState, Patch, Settled,
};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Badge, Tone};
use crate::shared::components::{NoticeStack, PaginationControls};
use crate::shared::config::app_config;
use crate::shared::export::{
    build_export, BrowserDownload, ColumnSpec, DownloadSink, ExportError, ExportFormat,
};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::system::auth::guard::use_session;

impl<T> ControllerHandle<T> for RwSignal<ListController<T>>
where
    T: ListRecord + Send + Sync,
{
    fn with_controller<R>(&self, f: impl FnOnce(&mut ListController<T>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Table column: the export column plus how the cell is shown on screen
pub struct TableColumn<T: ListRecord> {
    pub spec: ColumnSpec<T>,
    pub sort: Option<T::Field>,
    pub align: Align,
    /// Highlight search hits inside the cell
    pub highlight: bool,
    pub tone: Option<fn(&T) -> Tone>,
}

impl<T: ListRecord> Clone for TableColumn<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ListRecord> Copy for TableColumn<T> {}

impl<T: ListRecord> TableColumn<T> {
    pub fn new(header: &'static str, accessor: fn(&T) -> String) -> Self {
        Self {
            spec: ColumnSpec::new(header, accessor),
            sort: None,
            align: Align::Left,
            highlight: false,
            tone: None,
        }
    }

    pub fn sortable(mut self, field: T::Field) -> Self {
        self.sort = Some(field);
        self
    }

    pub fn numeric(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    pub fn searchable(mut self) -> Self {
        self.highlight = true;
        self
    }

    pub fn badge(mut self, tone: fn(&T) -> Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    fn cell(&self, record: &T, query: &str) -> AnyView {
        let text = self.spec.value(record);
        match self.tone {
            Some(tone) => view! { <Badge tone=tone(record) label=text /> }.into_any(),
            None if self.highlight => highlight_matches(&text, query),
            None => view! { <span>{text}</span> }.into_any(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PageSnapshot<T> {
    rows: Vec<T>,
    page_index: usize,
    page_count: usize,
    total_count: usize,
}

/// Value of the discrete filter or of a row's status dropdown, with its label
pub type CategoryOption<C> = (C, &'static str);

fn category_index<C: PartialEq>(
    options: &[CategoryOption<C>],
    filter: DiscreteFilter<C>,
) -> String {
    match filter {
        DiscreteFilter::All => "all".to_string(),
        DiscreteFilter::Only(c) => options
            .iter()
            .position(|(value, _)| *value == c)
            .map(|i| i.to_string())
            .unwrap_or_else(|| "all".to_string()),
    }
}

/// Exports every filtered and sorted row. A refused download is raised as a
/// notice on the list.
fn export_rows<T: ListRecord>(
    controller: &mut ListController<T>,
    columns: &[ColumnSpec<T>],
    format: ExportFormat,
    today: NaiveDate,
    sink: &impl DownloadSink,
) -> Result<(), ExportError> {
    let file = build_export(
        controller.entity(),
        controller.view().rows().iter().copied(),
        columns,
        format,
        today,
    );
    sink.save(&file).inspect_err(|e| {
        log::error!("{}: {}", controller.entity(), e);
        controller.notify(e);
    })
}

#[component]
pub fn CollectionPage<T>(
    title: &'static str,
    source: RestCollection<T>,
    columns: Vec<TableColumn<T>>,
    sort_field: T::Field,
    #[prop(optional)] sort_direction: SortDirection,
    /// Values of the discrete filter; the filter is hidden when empty
    #[prop(optional)]
    categories: Vec<CategoryOption<T::Category>>,
    /// Row-level status changes; the dropdown is hidden when empty
    #[prop(optional)]
    transitions: Vec<CategoryOption<T::Category>>,
    #[prop(optional)] deletable: bool,
) -> impl IntoView
where
    T: ListRecord + Serialize + DeserializeOwned + Send + Sync,
    T::Id: Display,
{
    let config = app_config();
    let entity = source.entity();
    let session = use_session();
    let settings = config.list_settings();
    let page_size_options: Vec<usize> =
        settings.page_size_options.iter().map(|s| s.get()).collect();

    let controller = RwSignal::new(ListController::new(
        entity,
        ListState::new(sort_field, sort_direction, &settings),
    ));
    on_cleanup(move || {
        controller.try_update(|c| c.dispose());
    });

    let report = move |outcome: Result<Settled, ListError>| match outcome {
        Err(ListError::AuthExpired) => {
            if let Some(session) = session {
                session.expire();
            }
        }
        Err(e) => log::debug!("{}: {}", entity, e),
        Ok(_) => {}
    };

    let load = move || {
        spawn_local(async move {
            report(refresh::<T, _, _>(&controller, &source).await);
        });
    };
    let remove = move |id: T::Id| {
        spawn_local(async move {
            report(mutate::<T, _, _>(&controller, &source, Patch::Remove(id)).await);
        });
    };
    let change_status = move |id: T::Id, category: T::Category| {
        spawn_local(async move {
            report(transition::<T, _, _>(&controller, &source, &id, category).await);
        });
    };
    let dispatch = move |event: ListEvent<T>| controller.update(|c| c.apply(event));

    let has_filter = !categories.is_empty();
    let has_transitions = !transitions.is_empty();
    let has_actions = deletable || has_transitions;
    let filter_options = StoredValue::new(categories);
    let transition_options = StoredValue::new(transitions);
    let column_list = StoredValue::new(columns);

    let export = move |format: ExportFormat| {
        let today = chrono::Local::now().date_naive();
        let specs: Vec<ColumnSpec<T>> =
            column_list.with_value(|cols| cols.iter().map(|col| col.spec).collect());
        controller.update(|c| {
            let _ = export_rows(c, &specs, format, today, &BrowserDownload);
        });
    };

    let query = Signal::derive(move || controller.with(|c| c.state().query().to_string()));
    // one filter/sort pass per state change
    let snapshot = Memo::new(move |_| {
        controller.with(|c| {
            let view = c.view();
            PageSnapshot {
                rows: view.visible().iter().map(|r| (*r).clone()).collect(),
                page_index: view.page_index(),
                page_count: view.page_count(),
                total_count: view.total_count(),
            }
        })
    });
    let current_page = Signal::derive(move || snapshot.with(|s| s.page_index));
    let total_pages = Signal::derive(move || snapshot.with(|s| s.page_count));
    let total_count = Signal::derive(move || snapshot.with(|s| s.total_count));
    let page_size = Signal::derive(move || controller.with(|c| c.state().page_size().get()));
    let is_loading = Signal::derive(move || controller.with(|c| c.is_loading()));
    let load_error = Signal::derive(move || {
        controller.with(|c| match c.load_state() {
            LoadState::Failed(e) => Some(e.to_string()),
            _ => None,
        })
    });
    let notices = Signal::derive(move || controller.with(|c| c.notices().to_vec()));

    let filter_value = move || {
        let filter = controller.with(|c| c.state().filter());
        filter_options.with_value(|o| category_index(o, filter))
    };
    let on_filter_change = move |picked: String| {
        let filter = filter_options.with_value(|o| {
            picked
                .parse::<usize>()
                .ok()
                .and_then(|i| o.get(i))
                .map(|(c, _)| DiscreteFilter::Only(*c))
                .unwrap_or(DiscreteFilter::All)
        });
        dispatch(ListEvent::FilterChanged(filter));
    };
    let filter_items = filter_options.with_value(|o| {
        o.iter()
            .enumerate()
            .map(|(i, (_, label))| {
                let label = *label;
                view! { <option value=i.to_string()>{label}</option> }
            })
            .collect_view()
    });

    let header_cells = column_list.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let header = col.spec.header;
                let align = if col.align == Align::Right { "right" } else { "left" };
                match col.sort {
                    Some(field) => {
                        let active = Signal::derive(move || {
                            controller.with(|c| c.state().sort_field() == field)
                        });
                        let direction =
                            Signal::derive(move || controller.with(|c| c.state().sort_direction()));
                        let on_sort =
                            Callback::new(move |_| dispatch(ListEvent::SortRequested(field)));
                        view! {
                            <SortableHeaderCell
                                label=header
                                active=active
                                direction=direction
                                on_sort=on_sort
                                align=align
                            />
                        }
                        .into_any()
                    }
                    None => view! { <TableHeaderCell>{header}</TableHeaderCell> }.into_any(),
                }
            })
            .collect_view()
    });

    let row_actions = move |id: T::Id, current: Option<T::Category>| -> AnyView {
        let status_select = has_transitions.then(|| {
            let status_id = id.clone();
            let options = transition_options.with_value(|o| {
                o.iter()
                    .enumerate()
                    .map(|(i, (c, label))| {
                        let selected = current == Some(*c);
                        let label = *label;
                        view! { <option value=i.to_string() selected=selected>{label}</option> }
                    })
                    .collect_view()
            });
            let on_change = move |picked: String| {
                let target = transition_options.with_value(|o| {
                    picked.parse::<usize>().ok().and_then(|i| o.get(i)).map(|(c, _)| *c)
                });
                if let Some(category) = target {
                    change_status(status_id.clone(), category);
                }
            };
            view! {
                <select
                    class="status-select"
                    on:change=move |ev| on_change(event_target_value(&ev))
                >
                    {options}
                </select>
            }
        });
        let delete_button = deletable.then(|| {
            view! {
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| remove(id.clone())>
                    {icon("trash")}
                </Button>
            }
        });
        view! {
            <TableCell>
                <TableCellLayout>{status_select}{delete_button}</TableCellLayout>
            </TableCell>
        }
        .into_any()
    };

    let body_rows = move || {
        let q = query.get();
        let cols = column_list.get_value();
        snapshot
            .with(|s| s.rows.clone())
            .into_iter()
            .map(|record| {
                let cells = cols
                    .iter()
                    .map(|col| {
                        let class = match col.align {
                            Align::Right => "table__cell--right",
                            Align::Left => "",
                        };
                        let cell = col.cell(&record, &q);
                        view! {
                            <TableCell class=class>
                                <TableCellLayout>{cell}</TableCellLayout>
                            </TableCell>
                        }
                    })
                    .collect_view();
                let actions =
                    has_actions.then(|| row_actions(record.record_id(), record.category()));
                view! { <TableRow>{cells}{actions}</TableRow> }
            })
            .collect_view()
    };

    load();

    view! {
        <div class="page" id=format!("{}--list", entity)>
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
                <div class="page__actions">
                    <SearchInput
                        value=query
                        on_change=Callback::new(move |q: String| {
                            dispatch(ListEvent::QueryChanged(q))
                        })
                        placeholder=format!("Search {}...", title.to_lowercase())
                    />
                    {has_filter.then(move || view! {
                        <select
                            class="filter-select"
                            prop:value=filter_value
                            on:change=move |ev| on_filter_change(event_target_value(&ev))
                        >
                            <option value="all">"All"</option>
                            {filter_items}
                        </select>
                    })}
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| export(ExportFormat::Csv)
                    >
                        {icon("download")} "CSV"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| export(ExportFormat::Tsv)
                    >
                        {icon("download")} "TSV"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=is_loading
                        on_click=move |_| load()
                    >
                        {icon("refresh")}
                        {move || if is_loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <NoticeStack
                notices=notices
                on_dismiss=Callback::new(move |id| controller.update(|c| c.dismiss_notice(id)))
                dismiss_after_ms=config.notifications.dismiss_after_ms
            />
            {move || load_error.get().map(|e| view! {
                <div class="page__error">
                    <span>{e}</span>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| load()>
                        "Retry"
                    </Button>
                </div>
            })}

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {header_cells}
                            {has_actions.then(|| view! {
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {body_rows}
                    </TableBody>
                </Table>
                <Show when=move || total_count.get() == 0 && !is_loading.get()>
                    <div class="page__empty">"No records match the current search."</div>
                </Show>
            </div>

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=total_count
                page_size=page_size
                on_page_change=Callback::new(move |page| {
                    dispatch(ListEvent::PageRequested(page))
                })
                on_page_size_change=Callback::new(move |size| {
                    dispatch(ListEvent::PageSizeChanged(size))
                })
                page_size_options=page_size_options
            />
        </div>
    }
}
