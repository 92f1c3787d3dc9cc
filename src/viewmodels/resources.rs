// ============================================================================
// RESOURCES - Business y Sales sobre el patrón CRUD
// ============================================================================

use async_trait::async_trait;

use super::crud_viewmodel::{CrudMessages, CrudResource};
use crate::config::CONFIG;
use crate::models::{Business, BusinessPayload, Sale, SalePayload};
use crate::services::{AdminApi, ApiError};
use crate::utils::format::format_amount;
use crate::utils::validation::{FieldSpec, FormValues, Rule, Schema, PHONE_10_RE};

lazy_static::lazy_static! {
    pub static ref BUSINESS_SCHEMA: Schema = Schema::new(vec![
        FieldSpec::new("business_name", vec![Rule::Required("Business Name is required")]),
        FieldSpec::new(
            "business_email",
            vec![
                Rule::Required("Business Email is required"),
                Rule::Email("Invalid email address"),
            ],
        ),
        FieldSpec::new(
            "contact_number",
            vec![
                Rule::Required("Contact Number is required"),
                Rule::matches(&PHONE_10_RE, "Contact Number must be 10 digits"),
            ],
        ),
        FieldSpec::new("city", vec![Rule::Required("City is required")]),
    ]);

    pub static ref SALE_SCHEMA: Schema = Schema::new(vec![
        FieldSpec::new("invoice_number", vec![Rule::Required("Invoice Number is required")]),
        FieldSpec::new(
            "business_id",
            vec![
                Rule::Required("Business ID is required"),
                Rule::Integer("Business ID must be a number"),
            ],
        ),
        FieldSpec::new(
            "amount",
            vec![
                Rule::Required("Amount is required"),
                Rule::Number("Amount must be a valid number"),
            ],
        ),
    ]);
}

static BUSINESS_MESSAGES: CrudMessages = CrudMessages {
    created: "Business created successfully!",
    updated: "Business updated successfully!",
    create_failed: "Failed to create business.",
    update_failed: "Failed to update business.",
    fetch_failed: "Failed to fetch businesses.",
};

static SALE_MESSAGES: CrudMessages = CrudMessages {
    created: "Sale created successfully!",
    updated: "Sale updated successfully!",
    create_failed: "Failed to create sale.",
    update_failed: "Failed to update sale.",
    fetch_failed: "Failed to fetch sales.",
};

fn field(values: &FormValues, name: &str) -> String {
    values.get(name).map(|v| v.trim().to_string()).unwrap_or_default()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusinessResource;

#[async_trait(?Send)]
impl CrudResource for BusinessResource {
    type Record = Business;
    type Payload = BusinessPayload;

    fn schema(&self) -> &'static Schema {
        &BUSINESS_SCHEMA
    }

    fn messages(&self) -> &'static CrudMessages {
        &BUSINESS_MESSAGES
    }

    fn page_size(&self) -> usize {
        CONFIG.tables.business_page_size
    }

    fn supports_edit(&self) -> bool {
        true
    }

    fn record_id(&self, record: &Business) -> i64 {
        record.business_id
    }

    fn form_values(&self, record: &Business) -> FormValues {
        [
            ("business_name", record.business_name.clone()),
            ("business_email", record.business_email.clone()),
            ("contact_number", record.contact_number.clone()),
            ("city", record.city.clone()),
        ]
        .into_iter()
        .collect()
    }

    fn payload(&self, values: &FormValues) -> Option<BusinessPayload> {
        Some(BusinessPayload {
            business_name: field(values, "business_name"),
            business_email: field(values, "business_email"),
            contact_number: field(values, "contact_number"),
            city: field(values, "city"),
        })
    }

    async fn fetch_all(&self, api: &dyn AdminApi) -> Result<Vec<Business>, ApiError> {
        api.list_businesses().await
    }

    async fn create(&self, api: &dyn AdminApi, payload: &BusinessPayload) -> Result<(), ApiError> {
        api.create_business(payload).await
    }

    async fn update(&self, api: &dyn AdminApi, id: i64, payload: &BusinessPayload) -> Result<(), ApiError> {
        api.update_business(id, payload).await
    }
}

/// Ventas: solo alta, el backend no expone PUT /sales/{id}
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaleResource;

#[async_trait(?Send)]
impl CrudResource for SaleResource {
    type Record = Sale;
    type Payload = SalePayload;

    fn schema(&self) -> &'static Schema {
        &SALE_SCHEMA
    }

    fn messages(&self) -> &'static CrudMessages {
        &SALE_MESSAGES
    }

    fn page_size(&self) -> usize {
        CONFIG.tables.sales_page_size
    }

    fn supports_edit(&self) -> bool {
        false
    }

    fn record_id(&self, record: &Sale) -> i64 {
        record.sales_id
    }

    fn form_values(&self, record: &Sale) -> FormValues {
        [
            ("invoice_number", record.invoice_number.clone()),
            ("business_id", record.business_id.to_string()),
            ("amount", format_amount(record.amount)),
        ]
        .into_iter()
        .collect()
    }

    fn payload(&self, values: &FormValues) -> Option<SalePayload> {
        Some(SalePayload {
            invoice_number: field(values, "invoice_number"),
            business_id: field(values, "business_id").parse().ok()?,
            amount: field(values, "amount").parse().ok()?,
        })
    }

    async fn fetch_all(&self, api: &dyn AdminApi) -> Result<Vec<Sale>, ApiError> {
        api.list_sales().await
    }

    async fn create(&self, api: &dyn AdminApi, payload: &SalePayload) -> Result<(), ApiError> {
        api.create_sale(payload).await
    }

    async fn update(&self, _api: &dyn AdminApi, id: i64, _payload: &SalePayload) -> Result<(), ApiError> {
        log::warn!("⚠️ PUT /sales/{} no existe en el backend", id);
        Err(ApiError::Http {
            status: 405,
            message: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_api::{business, sale};

    fn values(pairs: &[(&'static str, &str)]) -> FormValues {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn business_messages_per_field() {
        let errors = BUSINESS_SCHEMA.validate(&FormValues::new());
        assert_eq!(errors.get("business_name"), Some(&"Business Name is required"));
        assert_eq!(errors.get("business_email"), Some(&"Business Email is required"));
        assert_eq!(errors.get("contact_number"), Some(&"Contact Number is required"));
        assert_eq!(errors.get("city"), Some(&"City is required"));

        let errors = BUSINESS_SCHEMA.validate(&values(&[
            ("business_name", "Acme"),
            ("business_email", "acme"),
            ("contact_number", "98765"),
            ("city", "Pune"),
        ]));
        assert_eq!(errors.get("business_email"), Some(&"Invalid email address"));
        assert_eq!(errors.get("contact_number"), Some(&"Contact Number must be 10 digits"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn sale_messages_per_field() {
        let errors = SALE_SCHEMA.validate(&values(&[
            ("invoice_number", ""),
            ("business_id", "x1"),
            ("amount", "12,5"),
        ]));
        assert_eq!(errors.get("invoice_number"), Some(&"Invoice Number is required"));
        assert_eq!(errors.get("business_id"), Some(&"Business ID must be a number"));
        assert_eq!(errors.get("amount"), Some(&"Amount must be a valid number"));
    }

    #[test]
    fn edit_prefill_round_trips_into_payload() {
        let record = business(5, "Blue Ocean", "Mumbai");
        let prefill = BusinessResource.form_values(&record);
        assert!(BUSINESS_SCHEMA.validate(&prefill).is_empty());

        let payload = BusinessResource.payload(&prefill).unwrap();
        assert_eq!(payload.business_name, "Blue Ocean");
        assert_eq!(payload.city, "Mumbai");
        assert_eq!(BusinessResource.record_id(&record), 5);
    }

    #[test]
    fn sale_row_key_and_form_values() {
        let record = sale(8, "INV-8", 3, 99.5);
        assert_eq!(SaleResource.record_id(&record), 8);
        let prefill = SaleResource.form_values(&record);
        assert_eq!(prefill.get("amount").map(String::as_str), Some("99.50"));
        assert!(!SaleResource.supports_edit());
        assert!(BusinessResource.supports_edit());
    }
}
