// ============================================================================
// FORM STORE - Valores, touched y errores de un formulario
// ============================================================================
// Los errores se recalculan en cada cambio; solo se muestran en campos
// tocados (blur) o tras intentar enviar.
// ============================================================================

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use yew::Reducible;

use crate::utils::validation::{FormValues, Schema};

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    schema: &'static Schema,
    values: FormValues,
    touched: BTreeSet<&'static str>,
    errors: BTreeMap<&'static str, &'static str>,
}

impl FormState {
    /// Formulario vacío: todos los campos del esquema a ""
    pub fn new(schema: &'static Schema) -> Self {
        let values = schema.field_names().map(|name| (name, String::new())).collect();
        Self::from_values(schema, values)
    }

    /// Formulario pre-rellenado (modo edición)
    pub fn with_values(schema: &'static Schema, initial: FormValues) -> Self {
        let mut values: FormValues = schema.field_names().map(|name| (name, String::new())).collect();
        for (name, value) in initial {
            if let Some(slot) = values.get_mut(name) {
                *slot = value;
            }
        }
        Self::from_values(schema, values)
    }

    fn from_values(schema: &'static Schema, values: FormValues) -> Self {
        let errors = schema.validate(&values);
        Self {
            schema,
            values,
            touched: BTreeSet::new(),
            errors,
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Cambia un campo y revalida todo (hay reglas que cruzan campos)
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        match self.values.get_mut(name) {
            Some(slot) => *slot = value.into(),
            None => {
                log::warn!("⚠️ Campo desconocido en formulario: {}", name);
                return;
            }
        }
        self.errors = self.schema.validate(&self.values);
    }

    pub fn touch(&mut self, name: &str) {
        if let Some(field) = self.schema.field_names().find(|field| *field == name) {
            self.touched.insert(field);
        }
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// Intento de envío: marca todo como tocado. Devuelve si es válido.
    pub fn validate_all(&mut self) -> bool {
        self.touched = self.schema.field_names().collect();
        self.errors = self.schema.validate(&self.values);
        self.errors.is_empty()
    }

    pub fn error(&self, name: &str) -> Option<&'static str> {
        self.errors.get(name).copied()
    }

    /// Error a pintar bajo el campo
    pub fn visible_error(&self, name: &str) -> Option<&'static str> {
        if self.is_touched(name) {
            self.error(name)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.schema);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    SetField(String, String),
    Blur(String),
    /// Intento de envío: marca todo como tocado
    TouchAll,
    Reset,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::SetField(name, value) => next.set_value(&name, value),
            FormAction::Blur(name) => next.touch(&name),
            FormAction::TouchAll => {
                next.validate_all();
            }
            FormAction::Reset => next.reset(),
        }
        Rc::new(next)
    }
}
