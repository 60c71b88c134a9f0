//! Sorzi Engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Number sampling and game generation bound to entropy
//! - `infrastructure/` - Entropy port and adapters, environment settings
//! - `api/` - Command-line parsing and output rendering
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
