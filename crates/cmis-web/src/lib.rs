#![forbid(unsafe_code)]

//! WASM page scripts for the CMIS web pages.
//!
//! The crate exports, via `wasm-bindgen`:
//! - `installPageScripts(options?)`: registers the marks-table filter and the
//!   delete-dialog populator against the current document.
//! - `validateRegisterForm()`: submit-time gate for the registration and
//!   password-reset forms.
//!
//! Handler bodies live in [`page_core`] behind small traits so they run
//! natively in tests; the `wasm` module only moves values between the DOM and
//! those traits.

pub mod page_core;

#[cfg(target_arch = "wasm32")]
mod logging;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{PageScripts, install_page_scripts, validate_register_form};

pub use page_core::{AlertSink, DialogTargets, FilterableRow, PageHandlers};

#[cfg(test)]
mod tests {
    use crate::page_core::{AlertSink, DialogTargets, FilterableRow, PageHandlers};
    use cmis_core::{PageConfig, RowVisibility, TriggerAttributes};
    use pretty_assertions::assert_eq;

    struct FakeRow {
        text: String,
        display: &'static str,
    }

    impl FakeRow {
        fn new(text: &str) -> Self {
            Self {
                text: text.to_owned(),
                display: "",
            }
        }
    }

    impl FilterableRow for FakeRow {
        fn text(&self) -> String {
            self.text.clone()
        }

        fn set_visibility(&mut self, visibility: RowVisibility) {
            self.display = visibility.display_value();
        }
    }

    #[derive(Default)]
    struct FakeDialog {
        name: Option<String>,
        id: Option<String>,
    }

    impl DialogTargets for FakeDialog {
        fn set_student_name(&mut self, name: &str) {
            self.name = Some(name.to_owned());
        }

        fn set_student_id(&mut self, id: &str) {
            self.id = Some(id.to_owned());
        }
    }

    #[derive(Default)]
    struct RecordedAlerts(Vec<String>);

    impl AlertSink for RecordedAlerts {
        fn alert(&mut self, message: &str) {
            self.0.push(message.to_owned());
        }
    }

    fn marks_rows() -> Vec<FakeRow> {
        vec![
            FakeRow::new("1 John Doe 1 90 85 88"),
            FakeRow::new("2 Jane Doe 2 70 92 81"),
            FakeRow::new("3 Ali Khan 1 55 60 58"),
        ]
    }

    fn displays(rows: &[FakeRow]) -> Vec<&'static str> {
        rows.iter().map(|row| row.display).collect()
    }

    #[test]
    fn search_input_hides_non_matching_rows() {
        let handlers = PageHandlers::default();
        let mut rows = marks_rows();
        let outcome = handlers.on_search_input("JANE", rows.as_mut_slice());
        assert_eq!(displays(&rows), vec!["none", "", "none"]);
        assert_eq!((outcome.shown, outcome.hidden), (1, 2));
    }

    #[test]
    fn outcome_rows_match_applied_visibility() {
        let handlers = PageHandlers::default();
        let mut rows = marks_rows();
        let outcome = handlers.on_search_input("Doe", rows.as_mut_slice());
        let applied: Vec<&'static str> = outcome
            .rows
            .iter()
            .map(|visibility| visibility.display_value())
            .collect();
        assert_eq!(applied, displays(&rows));
        assert_eq!(outcome.total(), rows.len());
    }

    #[test]
    fn clearing_search_restores_rows() {
        let handlers = PageHandlers::default();
        let mut rows = marks_rows();
        handlers.on_search_input("khan", rows.as_mut_slice());
        assert_eq!(displays(&rows), vec!["none", "none", ""]);
        handlers.on_search_input("", rows.as_mut_slice());
        assert_eq!(displays(&rows), vec!["", "", ""]);
    }

    #[test]
    fn each_keystroke_refilters_from_scratch() {
        let handlers = PageHandlers::default();
        let mut rows = marks_rows();
        for typed in ["d", "do", "doe", "doe!"] {
            handlers.on_search_input(typed, rows.as_mut_slice());
        }
        assert_eq!(displays(&rows), vec!["none", "none", "none"]);
        handlers.on_search_input("doe", rows.as_mut_slice());
        assert_eq!(displays(&rows), vec!["", "", "none"]);
    }

    #[test]
    fn dialog_gets_id_and_name_from_trigger() {
        let handlers = PageHandlers::default();
        let mut dialog = FakeDialog::default();
        handlers.on_dialog_open(Some(&TriggerAttributes::new("7", "Jane Doe")), &mut dialog);
        assert_eq!(dialog.id.as_deref(), Some("7"));
        assert_eq!(dialog.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn dialog_overwritten_on_each_open() {
        let handlers = PageHandlers::default();
        let mut dialog = FakeDialog::default();
        handlers.on_dialog_open(Some(&TriggerAttributes::new("7", "Jane Doe")), &mut dialog);
        handlers.on_dialog_open(Some(&TriggerAttributes::new("3", "Ali Khan")), &mut dialog);
        assert_eq!(dialog.id.as_deref(), Some("3"));
        assert_eq!(dialog.name.as_deref(), Some("Ali Khan"));

        handlers.on_dialog_open(None, &mut dialog);
        assert_eq!(dialog.id.as_deref(), Some(""));
        assert_eq!(dialog.name.as_deref(), Some(""));
    }

    #[test]
    fn valid_submission_raises_no_alert() {
        let handlers = PageHandlers::default();
        let mut alerts = RecordedAlerts::default();
        assert!(handlers.on_register_submit("abcdefgh", "abcdefgh", &mut alerts));
        assert!(alerts.0.is_empty());
    }

    #[test]
    fn invalid_submissions_raise_exactly_one_alert() {
        let handlers = PageHandlers::default();
        let cases = [
            ("short", "short", "Password must be at least 8 characters long!"),
            ("abcdefgh", "different", "Passwords do not match!"),
            ("", "", "Password must be at least 8 characters long!"),
            ("abc", "xyz", "Passwords do not match!"),
        ];
        for (password, confirm, expected) in cases {
            let mut alerts = RecordedAlerts::default();
            assert!(!handlers.on_register_submit(password, confirm, &mut alerts));
            assert_eq!(alerts.0, vec![expected.to_owned()]);
        }
    }

    #[test]
    fn handlers_carry_their_config() {
        let config = PageConfig::from_json(r#"{"search_input_id":"searchFees"}"#).unwrap();
        let handlers = PageHandlers::new(config.clone());
        assert_eq!(handlers.config(), &config);
    }
}
