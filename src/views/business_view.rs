// ============================================================================
// BUSINESS VIEW - Buscar, listar, crear y editar businesses
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{CrudDialog, DataTable, FormField, LoginPrompt, Navbar, Snackbar, TableRow};
use crate::hooks::{use_crud, use_session_context};
use crate::models::Business;
use crate::stores::{CrudAction, DialogMode};
use crate::utils::format::format_timestamp;
use crate::viewmodels::BusinessResource;

const COLUMNS: [&str; 7] = [
    "Business ID",
    "Business Name",
    "Business Email",
    "Contact Number",
    "City",
    "Created Time",
    "Last Modified Time",
];

fn to_row(business: &Business) -> TableRow {
    TableRow {
        key: business.business_id,
        cells: vec![
            business.business_id.to_string(),
            business.business_name.clone(),
            business.business_email.clone(),
            business.contact_number.clone(),
            business.city.clone(),
            format_timestamp(business.created_time.as_deref()),
            format_timestamp(business.last_modified_time.as_deref()),
        ],
    }
}

#[function_component(BusinessView)]
pub fn business_view() -> Html {
    let session = use_session_context();
    let crud = use_crud(BusinessResource);
    let store = &*crud.store;

    if !session.is_authenticated() {
        return html! {
            <>
                <Navbar />
                <LoginPrompt />
            </>
        };
    }

    let on_search = crud.action(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        CrudAction::Search(input.value())
    });
    let on_create = crud.action(|_: MouseEvent| CrudAction::OpenCreate);
    let on_close = crud.action(|_: ()| CrudAction::CloseDialog);
    let on_page = crud.action(CrudAction::SetPage);
    let on_change = crud.action(|(name, value): (String, String)| CrudAction::SetField(name, value));
    let on_blur = crud.action(CrudAction::BlurField);
    let on_dismiss = crud.action(CrudAction::Dismiss);
    let on_edit = {
        let records = store.records.clone();
        crud.action(move |id: i64| {
            match records.iter().find(|business| business.business_id == id) {
                Some(business) => CrudAction::OpenEdit(business.clone()),
                None => CrudAction::CloseDialog,
            }
        })
    };

    let form = &store.form;
    let field = |name: &'static str, label: &'static str| {
        html! {
            <FormField
                {name}
                {label}
                value={form.value(name).to_string()}
                error={form.visible_error(name)}
                on_change={on_change.clone()}
                on_blur={on_blur.clone()}
            />
        }
    };

    let (title, submit_label) = match store.dialog {
        DialogMode::Edit(_) => ("Edit Business", "Update"),
        _ => ("Create New Business", "Create"),
    };
    let rows: Vec<TableRow> = store.page_rows().iter().map(to_row).collect();

    html! {
        <>
            <Navbar />
            <main class="page">
                <h1 class="page-title">{"Manage Businesses"}</h1>
                <input
                    class="search-box"
                    type="search"
                    placeholder="Search by Business Name, Email, Contact Number, or City"
                    value={store.query.clone()}
                    oninput={on_search}
                />
                <button type="button" class="btn-primary" onclick={on_create}>
                    {"Create New Business"}
                </button>
                <DataTable
                    columns={COLUMNS.to_vec()}
                    {rows}
                    loading={store.loading}
                    page={store.page}
                    page_count={store.page_count()}
                    total={store.filtered().len()}
                    {on_page}
                    on_edit={Some(on_edit)}
                />
                <CrudDialog
                    open={store.dialog.is_open()}
                    {title}
                    {submit_label}
                    submitting={store.submitting}
                    {on_close}
                    on_submit={crud.submit.clone()}
                >
                    {field("business_name", "Business Name")}
                    {field("business_email", "Business Email")}
                    {field("contact_number", "Contact Number")}
                    {field("city", "City")}
                </CrudDialog>
                <Snackbar notification={store.notifications.current().cloned()} {on_dismiss} />
            </main>
        </>
    }
}
