use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Respuesta de `POST /user/login`.
/// El backend no fija dónde viaja el token: se aceptan `token`,
/// `access_token` o `data.token`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl LoginResponse {
    /// Credencial emitida por el servidor, si viene alguna no vacía
    pub fn session_token(&self) -> Option<String> {
        let nested = self
            .data
            .as_ref()
            .and_then(|data| data.get("token"))
            .and_then(Value::as_str);

        self.token
            .as_deref()
            .or(self.access_token.as_deref())
            .or(nested)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Valor del radio en el formulario
    pub fn form_value(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn from_form_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.form_value() == value)
    }
}

/// Rol tal como lo espera `POST /user/`: `{ "roleId": 1, "name": "ADMIN" }`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Role {
    #[serde(rename = "roleId")]
    pub role_id: u8,
    pub name: String,
}

/// Tabla fija de roles (id, nombre)
pub const ROLES: [(u8, &str); 3] = [(1, "ADMIN"), (2, "STAFF"), (3, "SYSTEM_ADMIN")];

impl Role {
    pub fn from_name(name: &str) -> Option<Self> {
        ROLES
            .iter()
            .find(|(_, role_name)| *role_name == name)
            .map(|(role_id, role_name)| Role {
                role_id: *role_id,
                name: role_name.to_string(),
            })
    }
}

/// Cuerpo de `POST /user/` (sin `confirm_password`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub email: String,
    pub contact_number: String,
    pub password: String,
    pub role: Role,
}
