// Utils compartidos

pub mod constants;
pub mod format;
pub mod pagination;
pub mod search;
pub mod validation;

pub use constants::*;
