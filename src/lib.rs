// ============================================================================
// ADMIN DASHBOARD - FRONTEND MVVM (RUST + YEW)
// ============================================================================
// Arquitectura por capas:
// - Views: páginas Yew (sin lógica de negocio)
// - Hooks: conectan views con stores y viewmodels
// - ViewModels: lógica de login/sign-up y CRUD
// - Stores: estado reducible de formularios, tablas y notificaciones
// - Services: SOLO comunicación API y storage del token
// - State: sesión y fase de autenticación
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;

use crate::app::App;
use crate::config::CONFIG;

/// Arranque en navegador: panic hook, logging y render de la app
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Admin Dashboard - Rust + Yew ({})", CONFIG.environment);
    log::info!("🌐 Backend: {}", CONFIG.backend_url());

    yew::Renderer::<App>::new().render();
}
