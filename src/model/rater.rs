use serde::{Deserialize, Serialize};

use crate::model::table::ObservationTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RaterGroup {
    SelfRating,
    Observer,
    Peer,
    Student,
}

impl RaterGroup {
    /// Chart and legend order.
    pub const ALL: [RaterGroup; 4] = [
        RaterGroup::SelfRating,
        RaterGroup::Observer,
        RaterGroup::Peer,
        RaterGroup::Student,
    ];

    pub fn index(self) -> usize {
        match self {
            RaterGroup::SelfRating => 0,
            RaterGroup::Observer => 1,
            RaterGroup::Peer => 2,
            RaterGroup::Student => 3,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            RaterGroup::SelfRating => "self",
            RaterGroup::Observer => "observer",
            RaterGroup::Peer => "peer",
            RaterGroup::Student => "student",
        }
    }
}

impl std::fmt::Display for RaterGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Column naming of the observation sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaterColumns {
    pub item: String,
    pub scale_name: String,
    pub scale_short: String,
    pub self_rating: String,
    pub observer: String,
    pub peer_prefix: String,
    pub student_prefix: String,
}

impl Default for RaterColumns {
    fn default() -> Self {
        Self {
            item: "item".to_string(),
            scale_name: "scale_name".to_string(),
            scale_short: "scale_short".to_string(),
            self_rating: "self".to_string(),
            observer: "blk".to_string(),
            peer_prefix: "pk".to_string(),
            student_prefix: "sus".to_string(),
        }
    }
}

impl RaterColumns {
    pub fn composite_name(prefix: &str) -> String {
        format!("{prefix}_mean")
    }

    pub fn peer_mean(&self) -> String {
        Self::composite_name(&self.peer_prefix)
    }

    pub fn student_mean(&self) -> String {
        Self::composite_name(&self.student_prefix)
    }

    /// Column holding the per-row series for a rater group (composites for peer/student).
    pub fn series_column(&self, group: RaterGroup) -> String {
        match group {
            RaterGroup::SelfRating => self.self_rating.clone(),
            RaterGroup::Observer => self.observer.clone(),
            RaterGroup::Peer => self.peer_mean(),
            RaterGroup::Student => self.student_mean(),
        }
    }

    /// Raw columns of a prefixed group; the derived `<prefix>_mean` never counts.
    pub fn group_columns(&self, table: &ObservationTable, prefix: &str) -> Vec<usize> {
        let derived = Self::composite_name(prefix);
        table
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.name.starts_with(prefix) && c.name != derived)
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn peer_columns(&self, table: &ObservationTable) -> Vec<usize> {
        self.group_columns(table, &self.peer_prefix)
    }

    pub fn student_columns(&self, table: &ObservationTable) -> Vec<usize> {
        self.group_columns(table, &self.student_prefix)
    }

    /// Every raw rating column: self, observer, all peer and all student columns.
    pub fn rating_columns(&self, table: &ObservationTable) -> Vec<usize> {
        let mut out = Vec::new();
        out.extend(table.column_index(&self.self_rating));
        out.extend(table.column_index(&self.observer));
        out.extend(self.peer_columns(table));
        out.extend(self.student_columns(table));
        out
    }
}
