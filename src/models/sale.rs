use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::api::lenient;
use crate::utils::format::format_amount;
use crate::utils::search::Searchable;

/// Registro de `GET /sales`. `business_id` no se valida contra /business.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(deserialize_with = "lenient::int")]
    pub sales_id: i64,
    pub invoice_number: String,
    #[serde(deserialize_with = "lenient::int")]
    pub business_id: i64,
    #[serde(deserialize_with = "lenient::float")]
    pub amount: f64,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub last_modified_time: Option<String>,
}

/// Cuerpo de `POST /sales`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalePayload {
    pub invoice_number: String,
    pub business_id: i64,
    pub amount: f64,
}

impl Searchable for Sale {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.invoice_number.as_str()),
            Cow::Owned(self.business_id.to_string()),
            Cow::Owned(format_amount(self.amount)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_columns_accept_strings() {
        let raw = r#"{
            "sales_id": 3,
            "invoice_number": "INV-0003",
            "business_id": "12",
            "amount": "1520.50",
            "created_time": "2024-05-02T10:15:00Z",
            "last_modified_time": null
        }"#;
        let sale: Sale = serde_json::from_str(raw).unwrap();
        assert_eq!(sale.business_id, 12);
        assert!((sale.amount - 1520.5).abs() < f64::EPSILON);
        assert!(sale.last_modified_time.is_none());
    }

    #[test]
    fn garbage_amount_is_rejected() {
        let raw = r#"{"sales_id":1,"invoice_number":"A","business_id":1,"amount":"abc"}"#;
        assert!(serde_json::from_str::<Sale>(raw).is_err());
    }
}
