#![forbid(unsafe_code)]

//! Host-independent handler bodies.
//!
//! Each handler is stateless: it reads what it needs from its arguments and
//! rewrites its targets from scratch. The `wasm` module implements the traits
//! below over DOM elements; tests implement them over plain structs.

use cmis_core::{
    DialogContents, FilterOutcome, PageConfig, RowFilter, RowVisibility, TriggerAttributes,
    validate_password_pair,
};
use tracing::{debug, info};

/// A table row the search input can show or hide.
pub trait FilterableRow {
    /// Full rendered text of the row.
    fn text(&self) -> String;
    fn set_visibility(&mut self, visibility: RowVisibility);
}

/// The two writable fields inside the delete dialog.
pub trait DialogTargets {
    fn set_student_name(&mut self, name: &str);
    fn set_student_id(&mut self, id: &str);
}

/// Blocking user-facing message.
pub trait AlertSink {
    fn alert(&mut self, message: &str);
}

/// The three page handlers, bound to one [`PageConfig`].
#[derive(Debug, Clone, Default)]
pub struct PageHandlers {
    config: PageConfig,
}

impl PageHandlers {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Re-filter every row against the current search text.
    pub fn on_search_input<R: FilterableRow>(&self, value: &str, rows: &mut [R]) -> FilterOutcome {
        let filter = RowFilter::new(value);
        let outcome = filter.apply(rows.iter().map(FilterableRow::text));
        for (row, &visibility) in rows.iter_mut().zip(&outcome.rows) {
            row.set_visibility(visibility);
        }
        debug!(
            target: "cmis_web::filter",
            rows = outcome.total(),
            shown = outcome.shown,
            hidden = outcome.hidden,
            "search input applied"
        );
        outcome
    }

    /// Copy the trigger's attributes into the dialog. `None` means the dialog
    /// was opened without a control (programmatically).
    pub fn on_dialog_open<T: DialogTargets>(
        &self,
        trigger: Option<&TriggerAttributes>,
        targets: &mut T,
    ) -> DialogContents {
        let contents = trigger.map_or_else(DialogContents::without_trigger, |attrs| {
            DialogContents::from_trigger(attrs)
        });
        targets.set_student_name(&contents.student_name);
        targets.set_student_id(&contents.student_id);
        debug!(
            target: "cmis_web::dialog",
            student_id = %contents.student_id,
            has_trigger = trigger.is_some(),
            "delete dialog populated"
        );
        contents
    }

    /// Returns whether the form may submit. A rejected pair raises exactly one
    /// alert.
    pub fn on_register_submit<A: AlertSink>(
        &self,
        password: &str,
        confirm: &str,
        alerts: &mut A,
    ) -> bool {
        match validate_password_pair(password, confirm) {
            Ok(()) => true,
            Err(err) => {
                info!(target: "cmis_web::validate", reason = %err, "submission blocked");
                alerts.alert(err.alert_message());
                false
            }
        }
    }
}
