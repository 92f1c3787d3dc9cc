// ============================================================================
// DATA TABLE - Tabla paginada en cliente
// ============================================================================

use yew::prelude::*;

/// Fila ya formateada; `key` es la clave primaria del registro
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub key: i64,
    pub cells: Vec<String>,
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub columns: Vec<&'static str>,
    pub rows: Vec<TableRow>,
    #[prop_or_default]
    pub loading: bool,
    /// Página actual (base 0)
    pub page: usize,
    pub page_count: usize,
    /// Filas tras el filtro, en todas las páginas
    pub total: usize,
    pub on_page: Callback<usize>,
    /// Si está, cada fila muestra la acción de editar
    #[prop_or_default]
    pub on_edit: Option<Callback<i64>>,
}

#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    let span = props.columns.len() + usize::from(props.on_edit.is_some());

    let body = if props.loading {
        html! {
            <tr><td class="table-placeholder" colspan={span.to_string()}><div class="spinner"></div></td></tr>
        }
    } else if props.rows.is_empty() {
        html! {
            <tr><td class="table-placeholder" colspan={span.to_string()}>{"No rows"}</td></tr>
        }
    } else {
        props
            .rows
            .iter()
            .map(|row| {
                let edit = props.on_edit.as_ref().map(|on_edit| {
                    let on_edit = on_edit.clone();
                    let key = row.key;
                    html! {
                        <td class="cell-actions">
                            <button
                                type="button"
                                class="btn-icon"
                                title="Edit"
                                onclick={Callback::from(move |_: MouseEvent| on_edit.emit(key))}
                            >
                                {"✎"}
                            </button>
                        </td>
                    }
                });
                html! {
                    <tr key={row.key.to_string()}>
                        { for row.cells.iter().map(|cell| html! { <td>{cell}</td> }) }
                        { for edit }
                    </tr>
                }
            })
            .collect::<Html>()
    };

    let last_page = props.page_count.saturating_sub(1);
    let on_prev = {
        let on_page = props.on_page.clone();
        let page = props.page;
        Callback::from(move |_: MouseEvent| on_page.emit(page.saturating_sub(1)))
    };
    let on_next = {
        let on_page = props.on_page.clone();
        let page = props.page;
        Callback::from(move |_: MouseEvent| on_page.emit((page + 1).min(last_page)))
    };

    html! {
        <div class="data-table">
            <table>
                <thead>
                    <tr>
                        { for props.columns.iter().map(|column| html! { <th>{*column}</th> }) }
                        if props.on_edit.is_some() {
                            <th class="cell-actions">{"Actions"}</th>
                        }
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            <div class="table-footer">
                <span>{format!("{} rows", props.total)}</span>
                <button type="button" class="btn-page" disabled={props.page == 0} onclick={on_prev}>
                    {"‹"}
                </button>
                <span>{format!("Page {} of {}", props.page + 1, props.page_count.max(1))}</span>
                <button type="button" class="btn-page" disabled={props.page >= last_page} onclick={on_next}>
                    {"›"}
                </button>
            </div>
        </div>
    }
}
