//! Case cards, the regions that hold them and the registry that finds them.

use std::{collections::HashMap, fmt};

use shared::{
    domain::{CaseId, CaseStatus, StatusVocabulary, STATUS_VOCABULARY},
    protocol::Case,
};

use crate::table::CaseTable;

pub const PLACEHOLDER: &str = "none";

pub fn display_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Pending,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Pending,
    Taken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Positive,
    Warning,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Accept,
    OpenUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    label: &'static str,
    style: ButtonStyle,
    disabled: bool,
    binding: Option<CardAction>,
}

impl ActionButton {
    pub fn accept() -> Self {
        Self {
            label: "accept",
            style: ButtonStyle::Positive,
            disabled: false,
            binding: Some(CardAction::Accept),
        }
    }

    pub fn update() -> Self {
        Self {
            label: "update",
            style: ButtonStyle::Warning,
            disabled: false,
            binding: Some(CardAction::OpenUpdate),
        }
    }

    pub fn completed() -> Self {
        Self {
            label: "completed",
            style: ButtonStyle::Neutral,
            disabled: true,
            binding: None,
        }
    }

    /// Pending mode ignores the status; anything else is locked once done.
    pub fn for_mode(mode: RenderMode, status: Option<CaseStatus>) -> Self {
        match mode {
            RenderMode::Pending => Self::accept(),
            RenderMode::Other if status.is_some_and(CaseStatus::is_done) => Self::completed(),
            RenderMode::Other => Self::update(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn binding(&self) -> Option<CardAction> {
        if self.disabled {
            None
        } else {
            self.binding
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseCard {
    case_id: CaseId,
    pub document_name: String,
    pub delivery_target: String,
    pub given_location: String,
    pub given_to_staff_time: String,
    pub note: String,
    status_text: String,
    button: ActionButton,
    region: Region,
}

impl CaseCard {
    pub fn render(
        case: &Case,
        mode: RenderMode,
        region: Region,
        vocabulary: &StatusVocabulary,
    ) -> Self {
        Self {
            case_id: case.id,
            document_name: display_or_placeholder(case.document_name.as_deref()),
            delivery_target: display_or_placeholder(case.delivery_target.as_deref()),
            given_location: display_or_placeholder(case.given_location.as_deref()),
            given_to_staff_time: display_or_placeholder(case.given_to_staff_time.as_deref()),
            note: display_or_placeholder(case.note.as_deref()),
            status_text: vocabulary.label(&case.status).to_string(),
            button: ActionButton::for_mode(mode, case.status()),
            region,
        }
    }

    pub fn case_id(&self) -> CaseId {
        self.case_id
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn set_status_text(&mut self, text: impl Into<String>) {
        self.status_text = text.into();
    }

    pub fn button(&self) -> &ActionButton {
        &self.button
    }

    pub fn replace_button(&mut self, button: ActionButton) {
        self.button = button;
    }

    pub fn region(&self) -> Region {
        self.region
    }
}

impl fmt::Display for CaseCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#{} {}", self.case_id, self.document_name)?;
        writeln!(f, "  Delivery target: {}", self.delivery_target)?;
        writeln!(f, "  Given location:  {}", self.given_location)?;
        writeln!(f, "  Handed over at:  {}", self.given_to_staff_time)?;
        writeln!(f, "  Status:          {}", self.status_text)?;
        writeln!(f, "  Note:            {}", self.note)?;
        let state = if self.button.is_disabled() {
            " (disabled)"
        } else {
            ""
        };
        write!(f, "  [{}]{state}", self.button.label)
    }
}

/// The view tree: two card regions, the card registry and the history table.
#[derive(Debug, Default)]
pub struct CaseBoard {
    cards: HashMap<CaseId, CaseCard>,
    pending: Vec<CaseId>,
    taken: Vec<CaseId>,
    table: CaseTable,
}

impl CaseBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `case` and appends it to `region`. A card already registered
    /// under the same id is replaced.
    pub fn render_card(&mut self, case: &Case, mode: RenderMode, region: Region) -> &CaseCard {
        self.detach(case.id);
        let card = CaseCard::render(case, mode, region, &STATUS_VOCABULARY);
        self.region_ids_mut(region).push(case.id);
        self.cards.entry(case.id).or_insert(card)
    }

    pub fn card(&self, case_id: CaseId) -> Option<&CaseCard> {
        self.cards.get(&case_id)
    }

    pub fn card_mut(&mut self, case_id: CaseId) -> Option<&mut CaseCard> {
        self.cards.get_mut(&case_id)
    }

    // false for unknown ids
    pub fn move_to(&mut self, case_id: CaseId, region: Region) -> bool {
        let Some(current) = self.cards.get(&case_id).map(CaseCard::region) else {
            return false;
        };
        self.region_ids_mut(current).retain(|id| *id != case_id);
        self.region_ids_mut(region).push(case_id);
        if let Some(card) = self.cards.get_mut(&case_id) {
            card.region = region;
        }
        true
    }

    pub fn cards_in(&self, region: Region) -> impl Iterator<Item = &CaseCard> + '_ {
        let ids = match region {
            Region::Pending => &self.pending,
            Region::Taken => &self.taken,
        };
        ids.iter().filter_map(|id| self.cards.get(id))
    }

    pub fn click(&self, case_id: CaseId) -> Option<CardAction> {
        self.cards.get(&case_id).and_then(|card| card.button.binding())
    }

    pub fn table(&self) -> &CaseTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut CaseTable {
        &mut self.table
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn detach(&mut self, case_id: CaseId) {
        if let Some(card) = self.cards.remove(&case_id) {
            self.region_ids_mut(card.region).retain(|id| *id != case_id);
        }
    }

    fn region_ids_mut(&mut self, region: Region) -> &mut Vec<CaseId> {
        match region {
            Region::Pending => &mut self.pending,
            Region::Taken => &mut self.taken,
        }
    }
}

#[cfg(test)]
#[path = "tests/board_tests.rs"]
mod tests;
