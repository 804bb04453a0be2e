#![forbid(unsafe_code)]

//! Contents of the delete-confirmation dialog.
//!
//! The dialog is opened by a per-row control carrying the student's id and
//! name as data attributes. The name goes to a visible text node; the id goes
//! to a hidden field so the dialog's form posts the right student.

/// Attributes read from the control that opened the dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerAttributes {
    pub student_id: Option<String>,
    pub student_name: Option<String>,
}

impl TriggerAttributes {
    pub fn new(student_id: impl Into<String>, student_name: impl Into<String>) -> Self {
        Self {
            student_id: Some(student_id.into()),
            student_name: Some(student_name.into()),
        }
    }
}

/// Values written into the dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogContents {
    /// Text for the visible name node.
    pub student_name: String,
    /// Value for the hidden id field.
    pub student_id: String,
}

impl DialogContents {
    /// Missing attributes become empty strings; nothing is validated.
    #[must_use]
    pub fn from_trigger(attrs: &TriggerAttributes) -> Self {
        Self {
            student_name: attrs.student_name.clone().unwrap_or_default(),
            student_id: attrs.student_id.clone().unwrap_or_default(),
        }
    }

    /// Dialog opened without a triggering control.
    #[must_use]
    pub fn without_trigger() -> Self {
        Self::default()
    }
}
