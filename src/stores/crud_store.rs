// ============================================================================
// CRUD STORE - Estado de una página tabla + diálogo (use_reducer)
// ============================================================================
// Lista completa descargada, búsqueda local, página actual, diálogo
// crear/editar con su formulario y el snackbar de la página.
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use super::form_store::FormState;
use super::notification_store::NotificationSlot;
use crate::utils::pagination::{clamp_page, page_count, page_slice};
use crate::utils::search::filter_records;
use crate::viewmodels::crud_viewmodel::{CrudResource, LoadOutcome, SubmitOutcome, WriteMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogMode {
    Closed,
    Create,
    Edit(i64),
}

impl DialogMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogMode::Closed)
    }

    pub fn write_mode(&self) -> Option<WriteMode> {
        match self {
            DialogMode::Closed => None,
            DialogMode::Create => Some(WriteMode::Create),
            DialogMode::Edit(id) => Some(WriteMode::Edit(*id)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CrudStore<R: CrudResource> {
    pub resource: R,
    pub records: Vec<R::Record>,
    pub loading: bool,
    pub query: String,
    pub page: usize,
    pub dialog: DialogMode,
    pub form: FormState,
    pub submitting: bool,
    pub notifications: NotificationSlot,
    /// Secuencia de la lista vigente; respuestas con un número menor se descartan
    pub fetch_seq: u32,
}

#[derive(Debug)]
pub enum CrudAction<R: CrudResource> {
    FetchStarted(u32),
    Fetched(u32, LoadOutcome<R::Record>),
    OpenCreate,
    OpenEdit(R::Record),
    CloseDialog,
    SetField(String, String),
    BlurField(String),
    /// Intento de envío inválido: muestra todos los errores
    RevealErrors,
    SubmitStarted,
    /// Resultado del envío; `u32` es la secuencia tomada al enviar
    Submitted(u32, SubmitOutcome<R::Record>),
    Search(String),
    SetPage(usize),
    Dismiss(u32),
}

impl<R: CrudResource> CrudStore<R> {
    pub fn new(resource: R) -> Self {
        let form = FormState::new(resource.schema());
        Self {
            resource,
            records: Vec::new(),
            loading: false,
            query: String::new(),
            page: 0,
            dialog: DialogMode::Closed,
            form,
            submitting: false,
            notifications: NotificationSlot::default(),
            fetch_seq: 0,
        }
    }

    /// Registros que pasan el buscador, en el orden del servidor
    pub fn filtered(&self) -> Vec<&R::Record> {
        filter_records(&self.records, &self.query)
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered().len(), self.resource.page_size())
    }

    /// Filas de la página actual
    pub fn page_rows(&self) -> Vec<R::Record> {
        let filtered = self.filtered();
        page_slice(&filtered, self.page, self.resource.page_size())
            .iter()
            .map(|record| (*record).clone())
            .collect()
    }

    fn clamp(&mut self) {
        let total = self.filtered().len();
        self.page = clamp_page(self.page, total, self.resource.page_size());
    }

    fn close_dialog(&mut self) {
        self.dialog = DialogMode::Closed;
        self.form.reset();
        self.submitting = false;
    }
}

impl<R: CrudResource> Reducible for CrudStore<R> {
    type Action = CrudAction<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            CrudAction::FetchStarted(seq) => {
                next.fetch_seq = next.fetch_seq.max(seq);
                next.loading = true;
            }
            CrudAction::Fetched(seq, outcome) => {
                if seq < self.fetch_seq {
                    log::debug!("⏭️ Lista #{} descartada (vigente #{})", seq, self.fetch_seq);
                    return self;
                }
                next.loading = false;
                match outcome {
                    LoadOutcome::Loaded(records) => next.records = records,
                    LoadOutcome::NotAuthenticated => next.records.clear(),
                    LoadOutcome::Failed(notification) => {
                        next.records.clear();
                        next.notifications.show(notification);
                    }
                }
                next.clamp();
            }
            CrudAction::OpenCreate => {
                next.dialog = DialogMode::Create;
                next.form = FormState::new(next.resource.schema());
            }
            CrudAction::OpenEdit(record) => {
                if !next.resource.supports_edit() {
                    return self;
                }
                next.dialog = DialogMode::Edit(next.resource.record_id(&record));
                next.form = FormState::with_values(
                    next.resource.schema(),
                    next.resource.form_values(&record),
                );
            }
            CrudAction::CloseDialog => next.close_dialog(),
            CrudAction::SetField(name, value) => next.form.set_value(&name, value),
            CrudAction::BlurField(name) => next.form.touch(&name),
            CrudAction::RevealErrors => {
                next.form.validate_all();
            }
            CrudAction::SubmitStarted => {
                if self.submitting || !self.dialog.is_open() {
                    return self;
                }
                next.submitting = true;
            }
            CrudAction::Submitted(seq, outcome) => {
                next.submitting = false;
                match outcome {
                    SubmitOutcome::Saved { records, notification } => {
                        // La lista re-descargada invalida cualquier carga anterior aún en vuelo
                        next.fetch_seq = next.fetch_seq.max(seq);
                        next.loading = false;
                        next.records = records;
                        next.close_dialog();
                        next.notifications.show(notification);
                        next.clamp();
                    }
                    SubmitOutcome::Failed(notification) => {
                        next.notifications.show(notification);
                    }
                    SubmitOutcome::Invalid => {
                        next.form.validate_all();
                    }
                    SubmitOutcome::NotAuthenticated => next.close_dialog(),
                }
            }
            CrudAction::Search(query) => {
                next.query = query;
                next.page = 0;
            }
            CrudAction::SetPage(page) => {
                next.page = page;
                next.clamp();
            }
            CrudAction::Dismiss(id) => {
                if !next.notifications.dismiss(id) {
                    return self;
                }
            }
        }

        Rc::new(next)
    }
}
