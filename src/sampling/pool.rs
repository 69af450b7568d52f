//! Candidate pool

use rand::Rng;

/// Ordered pool of filter values to sample from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    values: Vec<String>,
}

impl CandidatePool {
    /// Create a pool from `values`
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remaining values, in original order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Pick one value uniformly at random without removing it
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.values.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.values.len());
        Some(self.values[index].as_str())
    }

    /// Remove the first occurrence of `value`; false if it was not present
    pub fn remove(&mut self, value: &str) -> bool {
        match self.values.iter().position(|v| v == value) {
            Some(index) => {
                self.values.remove(index);
                true
            }
            None => false,
        }
    }

    /// Keep only values matching `keep`
    pub fn retain(&mut self, keep: impl FnMut(&String) -> bool) {
        self.values.retain(keep);
    }
}

impl From<Vec<String>> for CandidatePool {
    fn from(values: Vec<String>) -> Self {
        Self::new(values)
    }
}

impl<S: Into<String>> FromIterator<S> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
