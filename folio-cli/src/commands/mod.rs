//! Command implementations

mod export;
mod import;
mod info;
mod validate;

pub use export::export;
pub use import::import;
pub use info::info;
pub use validate::validate;
