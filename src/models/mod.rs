pub mod api;
pub mod auth;
pub mod business;
pub mod sale;
pub mod notification;

pub use api::{ErrorBody, ListResponse};
pub use auth::{Gender, LoginRequest, LoginResponse, Role, SignupRequest};
pub use business::{Business, BusinessPayload};
pub use sale::{Sale, SalePayload};
pub use notification::{Notification, Severity};
