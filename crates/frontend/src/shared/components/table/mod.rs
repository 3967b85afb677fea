//! Generic data table.
//!
//! The first cell of every row is the record identifier; action links and the
//! delete trigger are built from it.

use leptos::prelude::*;

use crate::shared::icons::icon;

/// One table row. Only `Actions` rows get a trailing actions cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Data(Vec<String>),
    Actions(Vec<String>),
}

impl TableRow {
    pub fn cells(&self) -> &[String] {
        match self {
            TableRow::Data(cells) | TableRow::Actions(cells) => cells,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.cells().first().map(String::as_str)
    }

    pub fn has_actions(&self) -> bool {
        matches!(self, TableRow::Actions(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit(String),
    Delete(String),
    Details(String),
}

/// Actions rendered for `row`, in display order: edit, delete, details.
pub fn row_actions(
    row: &TableRow,
    edit: Option<&str>,
    details: Option<&str>,
    can_delete: bool,
) -> Vec<RowAction> {
    let id = match (row.has_actions(), row.id()) {
        (true, Some(id)) => id,
        _ => return Vec::new(),
    };

    let mut actions = Vec::with_capacity(3);
    if let Some(base) = edit {
        actions.push(RowAction::Edit(format!("{base}/{id}")));
    }
    if can_delete {
        actions.push(RowAction::Delete(id.to_string()));
    }
    if let Some(base) = details {
        actions.push(RowAction::Details(format!("{base}/{id}")));
    }
    actions
}

fn action_view(action: RowAction, on_delete: Option<Callback<String>>) -> AnyView {
    match action {
        RowAction::Edit(href) => view! {
            <a class="table__action" href=href title="Modifier">{icon("edit")}</a>
        }
        .into_any(),
        RowAction::Delete(id) => view! {
            <button
                type="button"
                class="table__action table__action--delete"
                title="Supprimer"
                on:click=move |_| {
                    if let Some(cb) = on_delete {
                        cb.run(id.clone());
                    }
                }
            >
                {icon("delete")}
            </button>
        }
        .into_any(),
        RowAction::Details(href) => view! {
            <a class="table__action" href=href title="Consulter les détails">{icon("details")}</a>
        }
        .into_any(),
    }
}

#[component]
pub fn DataTable(
    /// DOM id, e.g. `table-classes`
    #[prop(optional, into)]
    id: String,
    #[prop(optional)] header: Option<Vec<String>>,
    #[prop(into)] rows: Signal<Vec<TableRow>>,
    #[prop(optional)] foot: Option<Vec<String>>,
    /// Base of edit links
    #[prop(optional, into)]
    edit: Option<String>,
    /// Base of details links
    #[prop(optional, into)]
    details: Option<String>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let links = StoredValue::new((edit, details));

    view! {
        <div class="table">
            <table id=id class="table__data table--striped">
                {header.map(|cols| view! {
                    <thead class="table__head">
                        <tr>
                            {cols.into_iter()
                                .map(|c| view! { <th class="table__header-cell">{c}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                })}
                <tbody>
                    {move || rows.get().into_iter().map(|row| {
                        let (edit, details) = links.get_value();
                        let actions = row_actions(
                            &row,
                            edit.as_deref(),
                            details.as_deref(),
                            on_delete.is_some(),
                        );
                        let has_actions = row.has_actions();
                        let cells = row.cells().to_vec();
                        view! {
                            <tr class="table__row">
                                {cells.into_iter()
                                    .map(|c| view! { <td class="table__cell">{c}</td> })
                                    .collect_view()}
                                {has_actions.then(|| view! {
                                    <td class="table__cell table__cell--actions">
                                        {actions.into_iter()
                                            .map(|a| action_view(a, on_delete))
                                            .collect_view()}
                                    </td>
                                })}
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
                {foot.map(|cols| view! {
                    <tfoot>
                        <tr>
                            {cols.into_iter()
                                .map(|c| view! { <td class="table__cell">{c}</td> })
                                .collect_view()}
                        </tr>
                    </tfoot>
                })}
            </table>
        </div>
    }
}
