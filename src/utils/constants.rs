/// Clave de sessionStorage donde vive el token de sesión
pub const AUTH_TOKEN_KEY: &str = "authToken";

// Rutas del backend (relativas a `CONFIG.backend_url()`)
pub const LOGIN_PATH: &str = "/user/login";
pub const SIGNUP_PATH: &str = "/user/";
pub const BUSINESS_PATH: &str = "/business";
pub const SALES_PATH: &str = "/sales";
