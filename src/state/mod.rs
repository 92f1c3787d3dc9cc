// ============================================================================
// STATE MODULE - Sesión y fase de autenticación
// ============================================================================

pub mod auth_state;
pub mod session_state;

pub use auth_state::AuthState;
pub use session_state::Session;
