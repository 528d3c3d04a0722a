use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownStatus;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

id_newtype!(CaseId);
id_newtype!(UserId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Pending,
    Accepted,
    InProgress,
    Delivered,
    Done,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 5] = [
        CaseStatus::Pending,
        CaseStatus::Accepted,
        CaseStatus::InProgress,
        CaseStatus::Delivered,
        CaseStatus::Done,
    ];

    pub fn code(self) -> &'static str {
        match self {
            CaseStatus::Pending => "pending",
            CaseStatus::Accepted => "accepted",
            CaseStatus::InProgress => "in_progress",
            CaseStatus::Delivered => "delivered",
            CaseStatus::Done => "done",
        }
    }

    pub fn is_done(self) -> bool {
        self == CaseStatus::Done
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CaseStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStatus::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Closed mapping from status codes to the labels shown on cards and tables.
///
/// Lookups never fail: a code outside the vocabulary is displayed as-is.
#[derive(Debug)]
pub struct StatusVocabulary {
    labels: [(CaseStatus, &'static str); 5],
}

pub const STATUS_VOCABULARY: StatusVocabulary = StatusVocabulary {
    labels: [
        (CaseStatus::Pending, "Pending"),
        (CaseStatus::Accepted, "Accepted"),
        (CaseStatus::InProgress, "In progress"),
        (CaseStatus::Delivered, "Delivered"),
        (CaseStatus::Done, "Completed"),
    ],
};

impl StatusVocabulary {
    pub fn label_of(&self, status: CaseStatus) -> &'static str {
        self.labels
            .iter()
            .find(|(candidate, _)| *candidate == status)
            .map(|(_, label)| *label)
            .unwrap_or_else(|| status.code())
    }

    pub fn label<'a>(&self, code: &'a str) -> &'a str {
        match code.parse::<CaseStatus>() {
            Ok(status) => self.label_of(status),
            Err(_) => code,
        }
    }

    /// Resolves either a status code or one of its display labels.
    ///
    /// The list endpoints send labels rather than codes, and a card only keeps
    /// the text it displays, so both spellings have to map back to a status.
    pub fn resolve(&self, text: &str) -> Option<CaseStatus> {
        let text = text.trim();
        text.parse::<CaseStatus>().ok().or_else(|| {
            self.labels
                .iter()
                .find(|(_, label)| *label == text)
                .map(|(status, _)| *status)
        })
    }

    pub fn completed_label(&self) -> &'static str {
        self.label_of(CaseStatus::Done)
    }
}
