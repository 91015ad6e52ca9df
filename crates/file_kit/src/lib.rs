//! Host-backed file utilities: URL name parsing, extension-based type
//! classification, and a thin async facade over the host file-service.
//!
//! String parsing and classification are pure and synchronous. Everything
//! else resolves the URL to a session-local temporary path through a
//! [`file_host::FileHostService`] and suspends only on host calls; no path or
//! digest is cached across calls.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod error;
pub mod facade;
pub mod name;

pub use catalog::TypeCatalog;
pub use error::FileAccessError;
pub use facade::FileFacade;
pub use name::{ext_name, file_name, main_name, path_name};
