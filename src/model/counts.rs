use crate::model::category::{GenderCategory, category_order};

/// Per-category tallies in canonical order. Categories never seen in the data
/// keep a zero count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: [u64; 3],
}

impl CategoryCounts {
    pub fn from_counts(masculine: u64, neutral: u64, feminine: u64) -> Self {
        Self {
            counts: [masculine, neutral, feminine],
        }
    }

    pub fn increment(&mut self, category: GenderCategory) {
        self.counts[category.index()] += 1;
    }

    pub fn get(&self, category: GenderCategory) -> u64 {
        self.counts[category.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GenderCategory, u64)> + '_ {
        category_order().iter().map(|&c| (c, self.get(c)))
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn percentage(&self, category: GenderCategory) -> f64 {
        percentage_of(self.get(category), self.total())
    }

    pub fn rounded_percentage(&self, category: GenderCategory) -> f64 {
        round1(self.percentage(category))
    }
}

/// Share of `total` in percent. An empty total yields 0.0 for every category.
pub fn percentage_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/counts.rs"]
mod tests;
