// ============================================================================
// AUTH VIEWMODEL - Login, logout y sign-up
// ============================================================================
// Lógica de autenticación sin UI. El token persistido es el que emite el
// servidor; si el login falla el token guardado no se toca.
// ============================================================================

use std::rc::Rc;

use crate::models::{Gender, LoginRequest, Role, SignupRequest};
use crate::services::{AdminApi, ApiError, TokenStore};
use crate::state::Session;
use crate::stores::form_store::FormState;
use crate::utils::validation::{
    FieldSpec, FormValues, Rule, Schema, DIGIT_RE, FIRST_NAME_RE, LAST_NAME_RE, MOBILE_RE,
    SPECIAL_CHAR_RE, UPPERCASE_RE,
};

pub const LOGIN_SUCCESS: &str = "Login Successful";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const MISSING_TOKEN: &str = "Login response did not include a session token";
pub const SIGNUP_SUCCESS: &str = "Successfully signed up!";
pub const SIGNUP_FAILED: &str = "An error occurred. Please try again.";

const GENDERS: &[&str] = &["male", "female", "other"];
const ROLE_NAMES: &[&str] = &["ADMIN", "STAFF", "SYSTEM_ADMIN"];

lazy_static::lazy_static! {
    pub static ref LOGIN_SCHEMA: Schema = Schema::new(vec![
        FieldSpec::new(
            "email",
            vec![Rule::Required("Email is required"), Rule::Email("Invalid email format")],
        ),
        FieldSpec::new("password", vec![Rule::Required("Password is required")]),
    ]);

    pub static ref SIGNUP_SCHEMA: Schema = Schema::new(vec![
        FieldSpec::new(
            "first_name",
            vec![
                Rule::Required("First name is required"),
                Rule::matches(&FIRST_NAME_RE, "First name must have at least 3 letters and only alphabets"),
            ],
        ),
        FieldSpec::new(
            "last_name",
            vec![
                Rule::Required("Last name is required"),
                Rule::matches(&LAST_NAME_RE, "Last name should contain only letters"),
            ],
        ),
        FieldSpec::new(
            "gender",
            vec![
                Rule::Required("Gender is required"),
                Rule::OneOf(GENDERS, "Please select a valid gender"),
            ],
        ),
        FieldSpec::new(
            "email",
            vec![Rule::Required("Email is required"), Rule::Email("Enter a valid email address")],
        ),
        FieldSpec::new(
            "contact_number",
            vec![
                Rule::Required("Contact number is required"),
                Rule::matches(
                    &MOBILE_RE,
                    "Contact number must be exactly 10 digits starting with 6, 7, 8, or 9",
                ),
            ],
        ),
        FieldSpec::new(
            "password",
            vec![
                Rule::Required("Password is required"),
                Rule::MinLength(6, "Password must be at least 6 characters"),
                Rule::matches(&UPPERCASE_RE, "Password must contain at least one uppercase letter"),
                Rule::matches(&DIGIT_RE, "Password must contain at least one number"),
                Rule::matches(&SPECIAL_CHAR_RE, "Password must contain at least one special character"),
            ],
        ),
        FieldSpec::new(
            "confirm_password",
            vec![
                Rule::Required("Confirm password is required"),
                Rule::EqualsField("password", "Passwords must match"),
            ],
        ),
        FieldSpec::new(
            "role",
            vec![
                Rule::Required("Role is required"),
                Rule::OneOf(ROLE_NAMES, "Please select a valid role"),
            ],
        ),
    ]);
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// Errores de validación ya visibles en el formulario
    #[error("Form has invalid fields")]
    Invalid,
    /// Texto listo para el snackbar
    #[error("{0}")]
    Rejected(String),
}

fn value(values: &FormValues, name: &str) -> String {
    values.get(name).cloned().unwrap_or_default()
}

/// Cuerpo de sign-up desde el formulario (sin `confirm_password`)
pub fn signup_request(values: &FormValues) -> Option<SignupRequest> {
    Some(SignupRequest {
        first_name: value(values, "first_name").trim().to_string(),
        last_name: value(values, "last_name").trim().to_string(),
        gender: Gender::from_form_value(&value(values, "gender"))?,
        email: value(values, "email").trim().to_string(),
        contact_number: value(values, "contact_number"),
        password: value(values, "password"),
        role: Role::from_name(&value(values, "role"))?,
    })
}

pub struct AuthViewModel {
    api: Rc<dyn AdminApi>,
    store: Rc<dyn TokenStore>,
}

impl AuthViewModel {
    pub fn new(api: Rc<dyn AdminApi>, store: Rc<dyn TokenStore>) -> Self {
        Self { api, store }
    }

    /// Login: valida, llama al backend y persiste el token del servidor
    pub async fn login(&self, form: &FormState) -> Result<Session, AuthError> {
        let values = form.values();
        if !LOGIN_SCHEMA.validate(values).is_empty() {
            return Err(AuthError::Invalid);
        }

        let request = LoginRequest {
            email: value(values, "email").trim().to_string(),
            password: value(values, "password"),
        };

        log::info!("🔐 Iniciando login...");
        let response = self
            .api
            .login(&request)
            .await
            .map_err(|e: ApiError| {
                log::error!("❌ Login fallido: {}", e);
                AuthError::Rejected(e.user_message(LOGIN_FAILED))
            })?;

        let token = response.session_token().ok_or_else(|| {
            log::error!("❌ {}", MISSING_TOKEN);
            AuthError::Rejected(MISSING_TOKEN.to_string())
        })?;

        self.store.save(&token).map_err(|e| {
            log::error!("❌ {}", e);
            AuthError::Rejected(LOGIN_FAILED.to_string())
        })?;

        log::info!("✅ Login exitoso");
        Ok(Session::with_token(token))
    }

    /// Logout: borra el token. Devuelve la sesión anónima.
    pub fn logout(&self) -> Session {
        self.store.clear();
        log::info!("👋 Sesión cerrada");
        Session::anonymous()
    }

    pub async fn signup(&self, form: &FormState) -> Result<(), AuthError> {
        let values = form.values();
        if !SIGNUP_SCHEMA.validate(values).is_empty() {
            return Err(AuthError::Invalid);
        }
        let request = signup_request(values).ok_or(AuthError::Invalid)?;

        log::info!("📝 Registrando usuario {}", request.email);
        self.api.signup(&request).await.map_err(|e| {
            log::error!("❌ Sign-up fallido: {}", e);
            AuthError::Rejected(e.user_message(SIGNUP_FAILED))
        })?;

        log::info!("✅ Usuario registrado");
        Ok(())
    }
}
