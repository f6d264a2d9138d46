use serde::Serialize;

use crate::model::rater::RaterGroup;

/// Mean and spread of one rater group within one scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupStat {
    pub mean: f64,
    pub sd: f64,
    pub se: f64,
    pub n: usize,
}

impl GroupStat {
    /// Sample statistics; `None` when there is nothing to aggregate.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let n = values.len();
        let mean = mean(values)?;
        let sd = sample_sd(values, mean);
        Some(Self {
            mean,
            sd,
            se: sd / (n as f64).sqrt(),
            n,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleAggregate {
    pub name: String,
    pub short: String,
    pub items: usize,
    #[serde(rename = "self")]
    pub self_rating: GroupStat,
    pub observer: GroupStat,
    pub peer: GroupStat,
    pub student: GroupStat,
}

impl ScaleAggregate {
    pub fn stat(&self, group: RaterGroup) -> &GroupStat {
        match group {
            RaterGroup::SelfRating => &self.self_rating,
            RaterGroup::Observer => &self.observer,
            RaterGroup::Peer => &self.peer,
            RaterGroup::Student => &self.student,
        }
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Standard deviation with the n - 1 denominator; 0 for fewer than two values.
pub fn sample_sd(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/aggregate.rs"]
mod tests;
