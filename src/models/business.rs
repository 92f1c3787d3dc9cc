use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::api::lenient;
use crate::utils::search::Searchable;

/// Registro de `GET /business`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Business {
    #[serde(deserialize_with = "lenient::int")]
    pub business_id: i64,
    pub business_name: String,
    pub business_email: String,
    pub contact_number: String,
    pub city: String,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub last_modified_time: Option<String>,
}

/// Cuerpo de `POST /business` y `PUT /business/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusinessPayload {
    pub business_name: String,
    pub business_email: String,
    pub contact_number: String,
    pub city: String,
}

/// Buscador de la tabla: nombre, email, teléfono y ciudad
impl Searchable for Business {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.business_name.as_str()),
            Cow::Borrowed(self.business_email.as_str()),
            Cow::Borrowed(self.contact_number.as_str()),
            Cow::Borrowed(self.city.as_str()),
        ]
    }
}
