use crate::shared::components::table::{
    format_grams, SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::components::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::table_view::TableController;
use chrono::FixedOffset;
use contracts::domain::departments::{Column, DepartmentSpec};
use contracts::shared::envelope::LoadStatus;
use contracts::shared::record::Record;
use leptos::prelude::*;
use thaw::*;

fn cell_text(record: &Record, column: &Column, date_field: &str, offset: FixedOffset) -> String {
    match record.get(column.field) {
        None => String::new(),
        Some(_) if column.numeric => format_grams(record.number_or_zero(column.field)),
        Some(value) if column.field == date_field => format_datetime(&value.to_string(), offset),
        Some(value) => value.to_string(),
    }
}

/// Searchable, sortable, paginated table of one department's records.
#[component]
pub fn DepartmentTable(
    spec: &'static DepartmentSpec,
    table: TableController,
    #[prop(into)]
    status: Signal<LoadStatus>,
    page_size_options: Vec<usize>,
    offset: FixedOffset,
    /// Called with the record id when a row's delete button is clicked
    #[prop(optional)]
    on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let date_field = spec.summary.date_field;
    let selected_count = table.selected_count();

    let colspan = (spec.columns.len() + 2).to_string();
    let status_row = move |message: String| {
        view! {
            <tr>
                <td class="table__status" colspan=colspan.clone()>{message}</td>
            </tr>
        }
    };

    let rows_view = move || {
        if let Some(message) = status.with(|s| s.message()) {
            return status_row(message).into_any();
        }
        if table.view.with(|v| v.total_count() == 0) {
            return status_row("No matching records".to_string()).into_any();
        }
        table
            .page_rows
            .get()
            .into_iter()
            .map(|(position, record)| {
                let id = record.id().unwrap_or_default();
                let cells = spec
                    .columns
                    .iter()
                    .map(|column| {
                        let text = cell_text(&record, column, date_field, offset);
                        let class = if column.numeric { "text-right" } else { "" };
                        view! { <TableCell class=class>{text}</TableCell> }
                    })
                    .collect_view();
                view! {
                    <TableRow>
                        <TableCellCheckbox
                            checked=table.is_selected(position)
                            on_toggle=Callback::new(move |_| table.toggle_row(position))
                        />
                        {cells}
                        <TableCell>
                            {on_delete.map(|on_delete| {
                                let id = id.clone();
                                view! {
                                    <button
                                        class="table__row-action"
                                        title="Delete"
                                        on:click=move |_| on_delete.run(id.clone())
                                    >
                                        {icon("trash")}
                                    </button>
                                }
                            })}
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="department-table">
            <div class="department-table__toolbar">
                <SearchInput
                    value=table.search_query()
                    on_change=Callback::new(move |text: String| table.set_search_query(text))
                    placeholder=format!("Search {}...", spec.title.to_lowercase())
                />
                <Show when=move || { selected_count.get() > 0 }>
                    <span class="department-table__selection">
                        {move || format!("{} selected", selected_count.get())}
                    </span>
                    {on_delete.map(|on_delete| {
                        view! {
                            <button
                                class="department-table__bulk-delete"
                                title="Delete selected"
                                on:click=move |_| {
                                    for id in table.selected_ids() {
                                        on_delete.run(id);
                                    }
                                }
                            >
                                {icon("trash")}
                                " Delete selected"
                            </button>
                        }
                    })}
                </Show>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCheckbox
                            state=table.check_state
                            on_change=Callback::new(move |checked| table.select_all_visible(checked))
                        />
                        {spec
                            .columns
                            .iter()
                            .map(|column| {
                                view! {
                                    <SortableHeaderCell
                                        label=column.label
                                        field=column.field
                                        order_by=table.order_by()
                                        order=table.order()
                                        on_sort=Callback::new(move |field: String| table.request_sort(field))
                                        numeric=column.numeric
                                    />
                                }
                            })
                            .collect_view()}
                        <TableHeaderCell min_width=48.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows_view}</TableBody>
            </Table>

            <PaginationControls
                current_page=Signal::derive(move || table.view.with(|v| v.page))
                total_pages=Signal::derive(move || table.view.with(|v| v.total_pages))
                total_count=Signal::derive(move || table.view.with(|v| v.total_count()))
                page_size=table.rows_per_page()
                on_page_change=Callback::new(move |page| table.change_page(page))
                on_page_size_change=Callback::new(move |size| table.change_rows_per_page(size))
                page_size_options=page_size_options
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::departments::CASTING;

    #[test]
    fn test_cell_text_formats_by_column_kind() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let record = Record::new()
            .with("id", "C-1")
            .with("issuedWeight", 1234.5)
            .with("issuedDate", "2025-04-15T08:30:00Z");
        let column = |field: &str| {
            *CASTING
                .columns
                .iter()
                .find(|c| c.field == field)
                .unwrap()
        };

        assert_eq!(cell_text(&record, &column("id"), "issuedDate", offset), "C-1");
        assert_eq!(cell_text(&record, &column("issuedWeight"), "issuedDate", offset), "1,234.500");
        assert_eq!(cell_text(&record, &column("issuedDate"), "issuedDate", offset), "15-04-2025 08:30");
        assert_eq!(cell_text(&record, &column("status"), "issuedDate", offset), "");
    }
}
