//! Generic report table bound to a [`TableState`]
//!
//! Renders headers from the row schema, the current page of rows, filter chips,
//! pagination and the filter dialog. Commands from the toolbar arrive through
//! the [`TableBus`]; page state and dialog state are published back on it.

use crate::shared::components::filter_panel::{FilterModal, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::StatusBadge;
use crate::shared::config::config;
use crate::shared::error::TableError;
use crate::shared::event_bus::{ExportFormat, TableBus, TableEvent};
use crate::shared::export::{display_cell, download_csv, print_pdf};
use crate::shared::list_utils::highlight_matches;
use crate::shared::table_state::{TableRow as DataRow, TableState};
use contracts::shared::table::{FieldDef, FieldKind, FilterSpec, FilterValue};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

/// Exports the current page as displayed.
fn export_view<T: DataRow>(state: RwSignal<TableState<T>>, format: ExportFormat) -> Result<(), TableError> {
    let rows = state.with_untracked(|s| s.export_rows());
    log!("{}: export {} rows as {}", T::SCHEMA.id, rows.len(), format.label());
    match format {
        ExportFormat::Csv => download_csv(&rows),
        ExportFormat::Pdf => print_pdf(&rows, &config().export),
    }
}

fn cell_view<T: DataRow>(row: &T, field: &'static FieldDef, filters: &FilterSpec) -> AnyView {
    let value = row.field_value(field.id);
    match field.kind {
        FieldKind::Enum(_) => {
            let text = value.display_text();
            if text.is_empty() {
                view! { <span></span> }.into_any()
            } else {
                view! { <StatusBadge status=text /> }.into_any()
            }
        }
        FieldKind::Number | FieldKind::Money => view! {
            <span class="table__cell--number">{display_cell(field, &value)}</span>
        }
        .into_any(),
        _ => match filters.get(field.id) {
            Some(FilterValue::Contains { pattern }) => {
                highlight_matches(&display_cell(field, &value), pattern)
            }
            _ => view! { <span>{display_cell(field, &value)}</span> }.into_any(),
        },
    }
}

#[component]
pub fn DataTable<T>(
    state: RwSignal<TableState<T>>,

    /// Shared with the toolbar of the same page
    bus: TableBus,

    /// Checkbox column with persisted selection
    #[prop(optional)]
    selectable: bool,

    /// Replaces the default rendering of a cell when it returns `Some`
    #[prop(optional)]
    render_cell: Option<Callback<(T, &'static str), Option<AnyView>>>,

    /// Trailing action column, e.g. a details button
    #[prop(optional)]
    row_actions: Option<Callback<T, AnyView>>,

    #[prop(optional)]
    on_row_click: Option<Callback<T>>,

    /// CSS min-width of the table
    #[prop(optional, default = "900px")]
    min_width: &'static str,
) -> impl IntoView
where
    T: DataRow,
{
    let schema = T::SCHEMA;
    let filter_open = RwSignal::new(false);
    let export_error = RwSignal::new(None::<String>);

    let subscription = bus.subscribe(move |event| match event {
        TableEvent::OpenFilterModal => filter_open.set(true),
        TableEvent::ApplyFilters(spec) => {
            state.update(|s| s.apply_filters(spec.clone()));
            filter_open.set(false);
        }
        TableEvent::ClearFilters => state.update(|s| s.clear_filters()),
        TableEvent::ChangePage { page } => state.update(|s| {
            s.go_to_page(*page);
        }),
        TableEvent::DownloadTable { format } => {
            export_error.set(export_view(state, *format).err().map(|e| e.to_string()));
        }
        _ => {}
    });
    {
        let bus = bus.clone();
        on_cleanup(move || bus.unsubscribe(subscription));
    }

    {
        let bus = bus.clone();
        Effect::new(move |_| {
            let page = state.with(|s| s.page());
            bus.publish(TableEvent::PaginationUpdate(page));
        });
    }
    {
        let bus = bus.clone();
        Effect::new(move |prev: Option<bool>| {
            let is_open = filter_open.get();
            if prev.is_some_and(|p| p != is_open) {
                bus.publish(TableEvent::FilterModalStateChange { is_open });
            }
            is_open
        });
    }

    let sort_signal = Signal::derive(move || state.with(|s| s.sort().clone()));
    let on_sort = Callback::new(move |field: &'static str| state.update(|s| s.sort_by(field)));
    let select_all_state = Signal::derive(move || state.with(|s| s.select_all_state()));
    let toggle_all = Callback::new(move |_| {
        state.update(|s| {
            if let Err(e) = s.toggle_select_all_visible() {
                s.set_error(Some(e));
            }
        })
    });
    let toggle_one = Callback::new(move |id: String| {
        state.update(|s| {
            if let Err(e) = s.toggle_select(&id) {
                s.set_error(Some(e));
            }
        })
    });

    let page_signal = Signal::derive(move || state.with(|s| s.page()));
    let on_page_change = Callback::new(move |page: usize| state.update(|s| {
        s.go_to_page(page);
    }));
    let on_page_size_change =
        Callback::new(move |size: usize| state.update(|s| s.set_items_per_page(size)));

    let apply_bus = bus.clone();
    let clear_bus = bus.clone();
    let chips_bus = bus.clone();
    let retry_bus = bus.clone();

    view! {
        <div class="data-table">
            {move || {
                let active: Vec<(String, String)> = state.with(|s| {
                    s.filters()
                        .active()
                        .map(|(id, value)| {
                            let label = schema.field(id).map(|f| f.label).unwrap_or(id);
                            (id.to_string(), value.display_text(label))
                        })
                        .collect()
                });
                let chips_bus = chips_bus.clone();
                (!active.is_empty()).then(move || {
                    let clear_bus = chips_bus.clone();
                    view! {
                        <div class="filter-tags">
                            {active
                                .into_iter()
                                .map(|(id, label)| {
                                    let bus = chips_bus.clone();
                                    let on_remove = Callback::new(move |_| {
                                        let mut remaining = state.with_untracked(|s| s.filters().clone());
                                        remaining.remove(&id);
                                        bus.publish(TableEvent::ApplyFilters(remaining));
                                    });
                                    view! { <FilterTag label=label on_remove=on_remove /> }
                                })
                                .collect_view()}
                            <button
                                class="filter-tags__clear"
                                on:click=move |_| clear_bus.publish(TableEvent::ClearFilters)
                            >
                                "Clear all"
                            </button>
                        </div>
                    }
                })
            }}

            {move || {
                let retry_bus = retry_bus.clone();
                state.with(|s| s.error().map(|e| (e.to_string(), e.is_retryable()))).map(|(err, retryable)| view! {
                    <div class="alert alert--error">
                        {err}
                        {retryable.then(|| view! {
                            <button
                                class="alert__action"
                                on:click=move |_| retry_bus.publish(TableEvent::Refresh)
                            >
                                "Retry"
                            </button>
                        })}
                    </div>
                })
            }}
            {move || export_error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}
            {move || state.with(|s| s.is_fallback()).then(|| view! {
                <div class="alert alert--warning">"Showing sample data, the server could not be reached."</div>
            })}

            <div class="table-wrapper">
                <Table attr:id=schema.id attr:style=format!("width: 100%; min-width: {};", min_width)>
                    <TableHeader>
                        <TableRow>
                            {selectable.then(|| view! {
                                <TableHeaderCheckbox state=select_all_state on_toggle=toggle_all />
                            })}
                            {schema
                                .fields
                                .iter()
                                .map(|field| {
                                    let align = if field.kind.is_numeric() { "right" } else { "left" };
                                    if field.sortable {
                                        view! {
                                            <SortableHeaderCell
                                                label=field.label
                                                field=field.id
                                                sort=sort_signal
                                                on_sort=on_sort
                                                align=align
                                            />
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            <TableHeaderCell resizable=false>{field.label}</TableHeaderCell>
                                        }
                                        .into_any()
                                    }
                                })
                                .collect_view()}
                            {row_actions.is_some().then(|| view! {
                                <TableHeaderCell resizable=false>""</TableHeaderCell>
                            })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let (rows, filters, loading) = state.with(|s| {
                                (
                                    s.current_view().into_iter().cloned().collect::<Vec<T>>(),
                                    s.filters().clone(),
                                    s.is_loading(),
                                )
                            });
                            if rows.is_empty() {
                                let text = if loading { "Loading..." } else { "No data" };
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=(schema.fields.len() + 2).to_string()>
                                            <div class="table__empty">{text}</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|row| {
                                    let id = row.row_id();
                                    let checked_id = id.clone();
                                    let checked = Signal::derive(move || state.with(|s| s.is_selected(&checked_id)));
                                    let clicked = row.clone();
                                    let actions = row_actions.map(|render| render.run(row.clone()));
                                    let cells = schema
                                        .fields
                                        .iter()
                                        .map(|field| {
                                            let custom = render_cell.and_then(|render| render.run((row.clone(), field.id)));
                                            let content = custom.unwrap_or_else(|| cell_view(&row, field, &filters));
                                            view! {
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{content}</TableCellLayout>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view();
                                    view! {
                                        <TableRow
                                            class:table__row--selected=move || checked.get()
                                            on:click=move |_| {
                                                if let Some(cb) = on_row_click {
                                                    cb.run(clicked.clone());
                                                }
                                            }
                                        >
                                            {selectable.then(|| view! {
                                                <TableCellCheckbox item_id=id checked=checked on_toggle=toggle_one />
                                            })}
                                            {cells}
                                            {actions.map(|a| view! {
                                                <TableCell on:click=|e| e.stop_propagation()>{a}</TableCell>
                                            })}
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <PaginationControls
                page=page_signal
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
                page_size_options=config().tables.page_size_options.clone()
            />

            {move || {
                let apply_bus = apply_bus.clone();
                let clear_bus = clear_bus.clone();
                filter_open.get().then(move || {
                    let current = state.with_untracked(|s| s.filters().clone());
                    view! {
                        <FilterModal
                            schema=schema
                            current=current
                            on_apply=Callback::new(move |spec| apply_bus.publish(TableEvent::ApplyFilters(spec)))
                            on_clear=Callback::new(move |_| clear_bus.publish(TableEvent::ClearFilters))
                            on_close=Callback::new(move |_| filter_open.set(false))
                        />
                    }
                })
            }}
        </div>
    }
}
