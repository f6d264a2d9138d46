use crate::model::rater::RaterGroup;

/// A scale and the table rows that belong to it, in original row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    pub name: String,
    pub short: String,
    pub rows: Vec<usize>,
}

/// Per-item chart series of one scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSeries {
    pub name: String,
    pub items: Vec<String>,
    pub self_rating: Vec<Option<f64>>,
    pub observer: Vec<Option<f64>>,
    pub peer: Vec<Option<f64>>,
    pub student: Vec<Option<f64>>,
}

impl ScaleSeries {
    pub fn values(&self, group: RaterGroup) -> &[Option<f64>] {
        match group {
            RaterGroup::SelfRating => &self.self_rating,
            RaterGroup::Observer => &self.observer,
            RaterGroup::Peer => &self.peer,
            RaterGroup::Student => &self.student,
        }
    }

    /// `(x, y)` points of a series, x being the item position; gaps are skipped.
    pub fn points(&self, group: RaterGroup) -> Vec<(f64, f64)> {
        self.values(group)
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i as f64, v)))
            .collect()
    }
}
