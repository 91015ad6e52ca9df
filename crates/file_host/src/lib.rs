//! Typed host file-service contracts shared between the file utility layer
//! and concrete host adapters.
//!
//! This crate is the API boundary for the host's file capabilities: download
//! a (possibly remote) URL to a session-local temporary file, preview images,
//! open documents, and inspect size/digest. Concrete transports live with the
//! host integration; this crate carries the trait, the shared payload types,
//! a no-op adapter for unsupported targets, and an in-memory recording
//! adapter for tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod service;
pub mod types;

pub use service::{
    FileHostFuture, FileHostService, MemoryFileHostService, NoopFileHostService, StubFile,
};
pub use types::{
    DigestAlgorithm, DownloadedFile, FileInfo, FileInfoRequest, OpenDocumentRequest,
    PreviewImagesRequest,
};
