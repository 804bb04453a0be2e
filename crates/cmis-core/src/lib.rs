#![forbid(unsafe_code)]

//! `cmis-core` holds the page logic behind the CMIS web pages.
//!
//! Everything here is host-independent: no JS types, no DOM handles. The
//! `cmis-web` crate reads values out of the page, calls into this crate, and
//! writes the results back.
//!
//! - [`row_filter`]: case-insensitive substring filter for the marks table.
//! - [`delete_dialog`]: contents of the delete-confirmation dialog.
//! - [`password`]: registration / reset password checks.
//! - [`config`]: DOM hooks (ids, selectors, event names) the handlers bind to.

pub mod config;
pub mod delete_dialog;
pub mod error;
pub mod password;
pub mod row_filter;

pub use config::PageConfig;
pub use delete_dialog::{DialogContents, TriggerAttributes};
pub use error::PageError;
pub use password::{MIN_PASSWORD_LEN, PasswordError, validate_password_pair};
pub use row_filter::{FilterOutcome, RowFilter, RowVisibility};
