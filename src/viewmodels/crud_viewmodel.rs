// ============================================================================
// CRUD VIEWMODEL - Flujo lista / crear / editar de un recurso
// ============================================================================
// Solo lógica: devuelve resultados, los hooks actualizan el estado.
// Sin sesión no hay ninguna llamada al backend.
// ============================================================================

use std::fmt::Debug;
use std::rc::Rc;

use async_trait::async_trait;

use crate::config::CONFIG;
use crate::models::Notification;
use crate::services::{AdminApi, ApiError};
use crate::state::Session;
use crate::stores::form_store::FormState;
use crate::utils::search::Searchable;
use crate::utils::validation::{FormValues, Schema};

/// Textos de notificación de un recurso
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrudMessages {
    pub created: &'static str,
    pub updated: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub fetch_failed: &'static str,
}

/// Recurso del backend gestionado con el patrón tabla + diálogo
#[async_trait(?Send)]
pub trait CrudResource: Clone + PartialEq + 'static {
    type Record: Clone + PartialEq + Debug + Searchable + 'static;
    type Payload: Debug + 'static;

    fn schema(&self) -> &'static Schema;
    fn messages(&self) -> &'static CrudMessages;
    fn page_size(&self) -> usize;
    /// Hay endpoint de actualización (PUT)
    fn supports_edit(&self) -> bool;
    /// Clave primaria: también es la key de la fila
    fn record_id(&self, record: &Self::Record) -> i64;
    fn form_values(&self, record: &Self::Record) -> FormValues;
    /// `None` si los valores no convierten (no debería pasar tras validar)
    fn payload(&self, values: &FormValues) -> Option<Self::Payload>;

    async fn fetch_all(&self, api: &dyn AdminApi) -> Result<Vec<Self::Record>, ApiError>;
    async fn create(&self, api: &dyn AdminApi, payload: &Self::Payload) -> Result<(), ApiError>;
    async fn update(&self, api: &dyn AdminApi, id: i64, payload: &Self::Payload) -> Result<(), ApiError>;
}

/// Qué escribe el diálogo
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    Create,
    Edit(i64),
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome<T> {
    /// Sin token: la página muestra el aviso de login
    NotAuthenticated,
    Loaded(Vec<T>),
    /// Lista vacía + error persistente
    Failed(Notification),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome<T> {
    NotAuthenticated,
    /// Validación fallida: no se llamó al backend
    Invalid,
    /// Escritura OK y lista re-descargada una vez. Si el re-fetch falla,
    /// `records` queda vacío y la notificación es la de error de listado.
    Saved {
        records: Vec<T>,
        notification: Notification,
    },
    /// El diálogo sigue abierto
    Failed(Notification),
}

pub struct CrudViewModel<R: CrudResource> {
    api: Rc<dyn AdminApi>,
    session: Session,
    resource: R,
}

impl<R: CrudResource> CrudViewModel<R> {
    pub fn new(api: Rc<dyn AdminApi>, session: Session, resource: R) -> Self {
        Self { api, session, resource }
    }

    fn duration_ms() -> u32 {
        CONFIG.notifications.default_duration_ms
    }

    /// Lista completa (al montar y tras cada escritura)
    pub async fn load(&self) -> LoadOutcome<R::Record> {
        if !self.session.is_authenticated() {
            log::warn!("🔒 Sin sesión, no se pide la lista");
            return LoadOutcome::NotAuthenticated;
        }

        match self.resource.fetch_all(self.api.as_ref()).await {
            Ok(records) => LoadOutcome::Loaded(records),
            Err(e) => {
                log::error!("❌ Error obteniendo lista: {}", e);
                LoadOutcome::Failed(Notification::persistent_error(
                    self.resource.messages().fetch_failed,
                ))
            }
        }
    }

    /// Valida todo el formulario y, si pasa, crea o actualiza
    pub async fn submit(&self, mode: WriteMode, form: &FormState) -> SubmitOutcome<R::Record> {
        if !self.session.is_authenticated() {
            return SubmitOutcome::NotAuthenticated;
        }

        let values = form.values();
        if !self.resource.schema().validate(values).is_empty() {
            return SubmitOutcome::Invalid;
        }
        let Some(payload) = self.resource.payload(values) else {
            return SubmitOutcome::Invalid;
        };

        let messages = self.resource.messages();
        let (result, success, failure) = match mode {
            WriteMode::Create => (
                self.resource.create(self.api.as_ref(), &payload).await,
                messages.created,
                messages.create_failed,
            ),
            WriteMode::Edit(_) if !self.resource.supports_edit() => {
                log::warn!("⚠️ Edición no soportada para este recurso");
                return SubmitOutcome::Invalid;
            }
            WriteMode::Edit(id) => (
                self.resource.update(self.api.as_ref(), id, &payload).await,
                messages.updated,
                messages.update_failed,
            ),
        };

        if let Err(e) = result {
            log::error!("❌ Error guardando: {}", e);
            return SubmitOutcome::Failed(Notification::error(
                e.user_message(failure),
                Self::duration_ms(),
            ));
        }

        log::info!("✅ {}", success);
        match self.load().await {
            LoadOutcome::Loaded(records) => SubmitOutcome::Saved {
                records,
                notification: Notification::success(success, Self::duration_ms()),
            },
            LoadOutcome::Failed(notification) => SubmitOutcome::Saved {
                records: Vec::new(),
                notification,
            },
            LoadOutcome::NotAuthenticated => SubmitOutcome::NotAuthenticated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BusinessPayload, SalePayload, Severity};
    use crate::services::mock_api::{business, sale, Call, MockApi};
    use crate::viewmodels::resources::{BusinessResource, SaleResource};
    use futures::executor::block_on;

    fn business_vm(api: &Rc<MockApi>, session: Session) -> CrudViewModel<BusinessResource> {
        CrudViewModel::new(api.clone(), session, BusinessResource)
    }

    fn sale_vm(api: &Rc<MockApi>) -> CrudViewModel<SaleResource> {
        CrudViewModel::new(api.clone(), Session::with_token("tok"), SaleResource)
    }

    fn filled_business_form(name: &str) -> FormState {
        let mut form = FormState::new(BusinessResource.schema());
        form.set_value("business_name", name);
        form.set_value("business_email", "ops@acme.io");
        form.set_value("contact_number", "0123456789");
        form.set_value("city", "Pune");
        form
    }

    #[test]
    fn no_session_means_zero_fetches() {
        let api = Rc::new(MockApi::with_businesses(vec![business(1, "Acme", "Pune")]));
        let vm = business_vm(&api, Session::anonymous());

        assert_eq!(block_on(vm.load()), LoadOutcome::NotAuthenticated);
        assert_eq!(
            block_on(vm.submit(WriteMode::Create, &filled_business_form("Acme"))),
            SubmitOutcome::NotAuthenticated
        );
        assert_eq!(api.total_calls(), 0);
    }

    #[test]
    fn load_returns_server_order() {
        let api = Rc::new(MockApi::with_businesses(vec![
            business(3, "Zenith", "Delhi"),
            business(1, "Acme", "Pune"),
        ]));
        let vm = business_vm(&api, Session::with_token("tok"));

        let LoadOutcome::Loaded(records) = block_on(vm.load()) else {
            panic!("expected records");
        };
        assert_eq!(records.iter().map(|b| b.business_id).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(api.count(|c| *c == Call::ListBusinesses), 1);
    }

    #[test]
    fn fetch_failure_is_a_persistent_error() {
        let api = Rc::new(MockApi::default());
        *api.list_error.borrow_mut() = Some(ApiError::Network("offline".to_string()));
        let vm = business_vm(&api, Session::with_token("tok"));

        let LoadOutcome::Failed(notification) = block_on(vm.load()) else {
            panic!("expected failure");
        };
        assert_eq!(notification.message, "Failed to fetch businesses.");
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.auto_hide_ms, None);
    }

    #[test]
    fn empty_required_field_blocks_the_write() {
        let api = Rc::new(MockApi::default());
        let vm = business_vm(&api, Session::with_token("tok"));

        let mut form = filled_business_form("Acme");
        form.set_value("city", "");
        assert_eq!(block_on(vm.submit(WriteMode::Create, &form)), SubmitOutcome::Invalid);
        assert_eq!(api.total_calls(), 0);
    }

    #[test]
    fn create_refetches_exactly_once_and_returns_full_set() {
        let api = Rc::new(MockApi::with_businesses(vec![business(1, "Acme", "Pune")]));
        let vm = business_vm(&api, Session::with_token("tok"));

        let outcome = block_on(vm.submit(WriteMode::Create, &filled_business_form("Orbit")));
        let SubmitOutcome::Saved { records, notification } = outcome else {
            panic!("expected save");
        };
        assert_eq!(notification.message, "Business created successfully!");
        assert_eq!(notification.auto_hide_ms, Some(4000));
        assert_eq!(records, api.businesses.borrow().clone());
        assert_eq!(records.len(), 2);
        assert_eq!(api.count(|c| *c == Call::ListBusinesses), 1);
        assert_eq!(
            api.count(|c| matches!(c, Call::CreateBusiness(p) if p.business_name == "Orbit")),
            1
        );
    }

    #[test]
    fn edit_issues_put_for_the_selected_id() {
        let api = Rc::new(MockApi::with_businesses(vec![
            business(1, "Acme", "Pune"),
            business(2, "Orbit", "Chennai"),
        ]));
        let vm = business_vm(&api, Session::with_token("tok"));

        let form = FormState::with_values(
            BusinessResource.schema(),
            BusinessResource.form_values(&api.businesses.borrow()[1]),
        );
        let mut form = form;
        form.set_value("city", "Madurai");

        let outcome = block_on(vm.submit(WriteMode::Edit(2), &form));
        let SubmitOutcome::Saved { records, notification } = outcome else {
            panic!("expected save");
        };
        assert_eq!(notification.message, "Business updated successfully!");
        assert_eq!(records[1].city, "Madurai");

        let expected = BusinessPayload {
            business_name: "Orbit".to_string(),
            business_email: "orbit@example.com".to_string(),
            contact_number: "9876543202".to_string(),
            city: "Madurai".to_string(),
        };
        assert_eq!(api.count(|c| *c == Call::UpdateBusiness(2, expected.clone())), 1);
        assert_eq!(api.count(|c| *c == Call::ListBusinesses), 1);
    }

    #[test]
    fn write_failure_prefers_server_message_and_skips_refetch() {
        let api = Rc::new(MockApi::default());
        *api.write_error.borrow_mut() = Some(ApiError::Http {
            status: 409,
            message: Some("Business email already exists".to_string()),
        });
        let vm = business_vm(&api, Session::with_token("tok"));

        let outcome = block_on(vm.submit(WriteMode::Create, &filled_business_form("Acme")));
        let SubmitOutcome::Failed(notification) = outcome else {
            panic!("expected failure");
        };
        assert_eq!(notification.message, "Business email already exists");
        assert_eq!(api.count(|c| *c == Call::ListBusinesses), 0);

        *api.write_error.borrow_mut() = Some(ApiError::Network("offline".to_string()));
        let outcome = block_on(vm.submit(WriteMode::Edit(9), &filled_business_form("Acme")));
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(Notification::error("Failed to update business.", 4000))
        );
    }

    #[test]
    fn refetch_failure_after_write_empties_the_list() {
        let api = Rc::new(MockApi::default());
        *api.list_error.borrow_mut() = Some(ApiError::Network("offline".to_string()));
        let vm = business_vm(&api, Session::with_token("tok"));

        let outcome = block_on(vm.submit(WriteMode::Create, &filled_business_form("Acme")));
        assert_eq!(
            outcome,
            SubmitOutcome::Saved {
                records: Vec::new(),
                notification: Notification::persistent_error("Failed to fetch businesses."),
            }
        );
    }

    #[test]
    fn sale_create_sends_numbers() {
        let api = Rc::new(MockApi::with_sales(vec![sale(1, "INV-1", 4, 10.0)]));
        let vm = sale_vm(&api);

        let mut form = FormState::new(SaleResource.schema());
        form.set_value("invoice_number", "INV-2");
        form.set_value("business_id", " 7 ");
        form.set_value("amount", "1520.50");

        let SubmitOutcome::Saved { records, notification } =
            block_on(vm.submit(WriteMode::Create, &form))
        else {
            panic!("expected save");
        };
        assert_eq!(notification.message, "Sale created successfully!");
        assert_eq!(records.len(), 2);

        let expected = SalePayload {
            invoice_number: "INV-2".to_string(),
            business_id: 7,
            amount: 1520.5,
        };
        assert_eq!(api.count(|c| *c == Call::CreateSale(expected.clone())), 1);
        assert_eq!(api.count(|c| *c == Call::ListSales), 1);
    }

    #[test]
    fn sale_rejects_non_numeric_values_and_edits() {
        let api = Rc::new(MockApi::default());
        let vm = sale_vm(&api);

        let mut form = FormState::new(SaleResource.schema());
        form.set_value("invoice_number", "INV-2");
        form.set_value("business_id", "abc");
        form.set_value("amount", "12");
        assert_eq!(block_on(vm.submit(WriteMode::Create, &form)), SubmitOutcome::Invalid);

        form.set_value("business_id", "3");
        assert_eq!(block_on(vm.submit(WriteMode::Edit(1), &form)), SubmitOutcome::Invalid);
        assert_eq!(api.total_calls(), 0);
    }
}
