use shared::{
    domain::{CaseId, StatusVocabulary, STATUS_VOCABULARY},
    protocol::{Case, CaseUpdateEntry},
};

use crate::board::display_or_placeholder;

/// Separator between history entries in the last column.
pub const HISTORY_SEPARATOR: &str = ",";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRow {
    pub id: CaseId,
    pub document_name: String,
    pub delivery_target: String,
    pub given_location: String,
    pub given_to_staff_time: String,
    pub status: String,
    pub note: String,
    pub history: String,
}

impl CaseRow {
    pub fn render(case: &Case, vocabulary: &StatusVocabulary) -> Self {
        Self {
            id: case.id,
            document_name: display_or_placeholder(case.document_name.as_deref()),
            delivery_target: display_or_placeholder(case.delivery_target.as_deref()),
            given_location: display_or_placeholder(case.given_location.as_deref()),
            given_to_staff_time: display_or_placeholder(case.given_to_staff_time.as_deref()),
            status: vocabulary.label(&case.status).to_string(),
            note: display_or_placeholder(case.note.as_deref()),
            history: format_history(&case.updates, vocabulary),
        }
    }

    pub fn cells(&self) -> [String; 8] {
        [
            self.id.to_string(),
            self.document_name.clone(),
            self.delivery_target.clone(),
            self.given_location.clone(),
            self.given_to_staff_time.clone(),
            self.status.clone(),
            self.note.clone(),
            self.history.clone(),
        ]
    }
}

pub fn format_history_entry(entry: &CaseUpdateEntry, vocabulary: &StatusVocabulary) -> String {
    format!(
        "{} {} ({})",
        entry.time,
        vocabulary.label(&entry.status),
        entry.note.as_deref().unwrap_or_default()
    )
}

pub fn format_history(updates: &[CaseUpdateEntry], vocabulary: &StatusVocabulary) -> String {
    updates
        .iter()
        .map(|entry| format_history_entry(entry, vocabulary))
        .collect::<Vec<_>>()
        .join(HISTORY_SEPARATOR)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseTable {
    rows: Vec<CaseRow>,
}

impl CaseTable {
    pub fn populate(&mut self, cases: &[Case]) {
        self.rows = cases
            .iter()
            .map(|case| CaseRow::render(case, &STATUS_VOCABULARY))
            .collect();
    }

    pub fn rows(&self) -> &[CaseRow] {
        &self.rows
    }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
