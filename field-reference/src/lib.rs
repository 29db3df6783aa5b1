//! Read-only field reference data for the EMT assistant
//!
//! - [`ProcedureCatalog`]: emergency protocols and checklists, searchable by
//!   id, category, urgency or spoken keyword
//! - [`Phrasebook`]: patient-interview questions and their translations
//!
//! # Example
//!
//! ```rust
//! use field_reference::{ProcedureCatalog, Phrasebook};
//!
//! let catalog = ProcedureCatalog::new();
//! let procedure = catalog.find_by_keyword("cardiac arrest").unwrap();
//! assert_eq!(procedure.id.0, "cardiac-arrest");
//!
//! let phrasebook = Phrasebook::new();
//! assert_eq!(phrasebook.translate("where does it hurt", "es"), Some("¿Dónde te duele?"));
//! ```

pub mod procedures;
pub mod phrasebook;

pub use procedures::*;
pub use phrasebook::*;
