#![forbid(unsafe_code)]

//! Live text filter for table rows.
//!
//! A row is shown iff its rendered text, lower-cased, contains the filter
//! text, lower-cased. The empty filter is a substring of everything, so it
//! shows every row.

use tracing::trace;

/// Visibility to apply to one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowVisibility {
    Shown,
    Hidden,
}

impl RowVisibility {
    #[must_use]
    pub const fn from_match(matched: bool) -> Self {
        if matched { Self::Shown } else { Self::Hidden }
    }

    /// Inline CSS `display` value: empty restores the stylesheet default.
    #[must_use]
    pub const fn display_value(self) -> &'static str {
        match self {
            Self::Shown => "",
            Self::Hidden => "none",
        }
    }
}

/// Result of filtering a row set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub shown: usize,
    pub hidden: usize,
    pub rows: Vec<RowVisibility>,
}

impl FilterOutcome {
    fn record(&mut self, visibility: RowVisibility) {
        match visibility {
            RowVisibility::Shown => self.shown += 1,
            RowVisibility::Hidden => self.hidden += 1,
        }
        self.rows.push(visibility);
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.shown + self.hidden
    }
}

/// Case-insensitive substring filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFilter {
    needle: String,
}

impl RowFilter {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    #[must_use]
    pub fn matches(&self, row_text: &str) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        row_text.to_lowercase().contains(&self.needle)
    }

    #[must_use]
    pub fn visibility(&self, row_text: &str) -> RowVisibility {
        RowVisibility::from_match(self.matches(row_text))
    }

    /// Classify every row, in order.
    pub fn apply<I, S>(&self, rows: I) -> FilterOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = FilterOutcome::default();
        for row in rows {
            outcome.record(self.visibility(row.as_ref()));
        }
        trace!(
            target: "cmis_core::row_filter",
            needle = %self.needle,
            shown = outcome.shown,
            hidden = outcome.hidden,
            "filtered rows"
        );
        outcome
    }
}
