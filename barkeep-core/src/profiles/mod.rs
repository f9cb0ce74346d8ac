//! Profiles Module
//!
//! - **book**: stored profiles, focus, menu edits (cross-profile id uniqueness)
//! - **validation**: structural checks for import documents
//! - **import**: all-or-nothing merge of an imported profile
//! - **storage**: JSON file store, export and import file reading

pub mod book;
pub mod import;
pub mod storage;
pub mod validation;

// Re-exports
pub use book::ProfileBook;
pub use import::{ImportError, import_profile, merge_profile, parse_profile_document};
pub use storage::{ProfileStore, StorageError, export_profile, read_import_file};
pub use validation::MAX_IMPORT_BYTES;
