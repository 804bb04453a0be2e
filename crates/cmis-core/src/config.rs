#![forbid(unsafe_code)]

//! DOM hooks the page handlers bind to.
//!
//! Defaults match the markup rendered by the CMIS templates. Hosts may pass a
//! JSON object to override individual fields; unspecified fields keep their
//! defaults.

use serde::{Deserialize, Serialize};

use crate::error::PageError;

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Selectors, ids and event names used by the page scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Id of the marks search input.
    pub search_input_id: String,
    /// Selector for the rows the search input filters.
    pub row_selector: String,
    /// Id of the delete-confirmation dialog root.
    pub delete_modal_id: String,
    /// Event fired on the dialog root just before it opens.
    pub modal_open_event: String,
    /// Selector (scoped to the dialog) for the visible student name.
    pub name_target_selector: String,
    /// Selector (scoped to the dialog) for the hidden student id field.
    pub id_target_selector: String,
    /// Data attribute on the triggering control carrying the student id.
    pub student_id_attr: String,
    /// Data attribute on the triggering control carrying the student name.
    pub student_name_attr: String,
    /// Id of the primary password input.
    pub password_id: String,
    /// Id of the confirmation password input.
    pub confirm_password_id: String,
    /// Console log level: one of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            search_input_id: "searchMarks".to_owned(),
            row_selector: "#marksTable tbody tr".to_owned(),
            delete_modal_id: "deleteModal".to_owned(),
            modal_open_event: "show.bs.modal".to_owned(),
            name_target_selector: "#studentName".to_owned(),
            id_target_selector: "#studentId".to_owned(),
            student_id_attr: "data-student-id".to_owned(),
            student_name_attr: "data-student-name".to_owned(),
            password_id: "password".to_owned(),
            confirm_password_id: "confirm_password".to_owned(),
            log_level: "warn".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override object and validate the result.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty hooks and unknown log levels.
    pub fn validate(&self) -> Result<(), PageError> {
        let fields = [
            ("search_input_id", &self.search_input_id),
            ("row_selector", &self.row_selector),
            ("delete_modal_id", &self.delete_modal_id),
            ("modal_open_event", &self.modal_open_event),
            ("name_target_selector", &self.name_target_selector),
            ("id_target_selector", &self.id_target_selector),
            ("student_id_attr", &self.student_id_attr),
            ("student_name_attr", &self.student_name_attr),
            ("password_id", &self.password_id),
            ("confirm_password_id", &self.confirm_password_id),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(PageError::InvalidConfig(format!("{name} must not be empty")));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(PageError::InvalidConfig(format!(
                "unknown log_level {:?}",
                self.log_level
            )));
        }
        Ok(())
    }
}

/// `#`-prefixed selector for an element id, as used in error messages.
#[must_use]
pub fn id_selector(id: &str) -> String {
    format!("#{id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_rendered_markup() {
        let config = PageConfig::default();
        assert_eq!(id_selector(&config.search_input_id), "#searchMarks");
        assert_eq!(config.row_selector, "#marksTable tbody tr");
        assert_eq!(id_selector(&config.delete_modal_id), "#deleteModal");
        assert_eq!(config.modal_open_event, "show.bs.modal");
        assert_eq!(config.password_id, "password");
        assert_eq!(config.confirm_password_id, "confirm_password");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PageConfig::from_json(r#"{"search_input_id":"searchFees"}"#).unwrap();
        assert_eq!(
            config,
            PageConfig {
                search_input_id: "searchFees".to_owned(),
                ..PageConfig::default()
            }
        );
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn unknown_fields_rejected() {
        let err = PageConfig::from_json(r#"{"searchInput":"x"}"#).unwrap_err();
        assert!(matches!(err, PageError::InvalidConfig(_)));
    }

    #[test]
    fn empty_hook_rejected() {
        let err = PageConfig::from_json(r#"{"password_id":"  "}"#).unwrap_err();
        assert_eq!(
            err,
            PageError::InvalidConfig("password_id must not be empty".to_owned())
        );
    }

    #[test]
    fn unknown_log_level_rejected() {
        let err = PageConfig::from_json(r#"{"log_level":"verbose"}"#).unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }
}
