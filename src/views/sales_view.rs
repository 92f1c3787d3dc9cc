// ============================================================================
// SALES VIEW - Listar y crear ventas
// ============================================================================

use yew::prelude::*;

use crate::components::{CrudDialog, DataTable, FormField, LoginPrompt, Navbar, Snackbar, TableRow};
use crate::hooks::{use_crud, use_session_context};
use crate::models::Sale;
use crate::stores::CrudAction;
use crate::utils::format::{format_amount, format_timestamp};
use crate::viewmodels::SaleResource;

const COLUMNS: [&str; 6] = [
    "Sales ID",
    "Invoice Number",
    "Business ID",
    "Amount",
    "Created Time",
    "Last Modified Time",
];

fn to_row(sale: &Sale) -> TableRow {
    TableRow {
        key: sale.sales_id,
        cells: vec![
            sale.sales_id.to_string(),
            sale.invoice_number.clone(),
            sale.business_id.to_string(),
            format_amount(sale.amount),
            format_timestamp(sale.created_time.as_deref()),
            format_timestamp(sale.last_modified_time.as_deref()),
        ],
    }
}

#[function_component(SalesView)]
pub fn sales_view() -> Html {
    let session = use_session_context();
    let crud = use_crud(SaleResource);
    let store = &*crud.store;

    if !session.is_authenticated() {
        return html! {
            <>
                <Navbar />
                <LoginPrompt />
            </>
        };
    }

    let on_create = crud.action(|_: MouseEvent| CrudAction::OpenCreate);
    let on_close = crud.action(|_: ()| CrudAction::CloseDialog);
    let on_page = crud.action(CrudAction::SetPage);
    let on_change = crud.action(|(name, value): (String, String)| CrudAction::SetField(name, value));
    let on_blur = crud.action(CrudAction::BlurField);
    let on_dismiss = crud.action(CrudAction::Dismiss);

    let form = &store.form;
    let field = |name: &'static str, label: &'static str, input_type: &'static str| {
        html! {
            <FormField
                {name}
                {label}
                {input_type}
                value={form.value(name).to_string()}
                error={form.visible_error(name)}
                on_change={on_change.clone()}
                on_blur={on_blur.clone()}
            />
        }
    };

    let rows: Vec<TableRow> = store.page_rows().iter().map(to_row).collect();

    html! {
        <>
            <Navbar />
            <main class="page">
                <h1 class="page-title">{"Manage Sales"}</h1>
                <button type="button" class="btn-primary" onclick={on_create}>
                    {"Create New Sale"}
                </button>
                <DataTable
                    columns={COLUMNS.to_vec()}
                    {rows}
                    loading={store.loading}
                    page={store.page}
                    page_count={store.page_count()}
                    total={store.filtered().len()}
                    {on_page}
                />
                <CrudDialog
                    open={store.dialog.is_open()}
                    title="Create New Sale"
                    submit_label="Create"
                    submitting={store.submitting}
                    {on_close}
                    on_submit={crud.submit.clone()}
                >
                    {field("invoice_number", "Invoice Number", "text")}
                    {field("business_id", "Business ID", "number")}
                    {field("amount", "Amount", "number")}
                </CrudDialog>
                <Snackbar notification={store.notifications.current().cloned()} {on_dismiss} />
            </main>
        </>
    }
}
