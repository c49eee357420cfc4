//! Storage layer - JSON export document
//!
//! The export document is the only on-disk artifact. The CLI also reads it
//! back as its working set.
//!
//! # Usage
//!
//! ```no_run
//! use projectsuite_core::clock;
//! use projectsuite_core::domain::projects::ProjectService;
//! use projectsuite_core::storage::ExportDocument;
//!
//! let mut service = ProjectService::seeded(clock::system());
//! let document = service.export_document();
//! let path = document.export_to_dir(std::path::Path::new("."))?;
//! let back = ExportDocument::read_from(&path)?;
//! # Ok::<(), projectsuite_core::Error>(())
//! ```

pub mod export;

// Re-export commonly used types
pub use export::{EXPORT_VERSION, ExportDocument, default_file_name};
