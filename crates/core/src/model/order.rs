use serde::{Deserialize, Serialize};

/// Order in which raw questions are shown, as 1-based indices into the raw list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresentationOrder(Vec<u32>);

impl PresentationOrder {
    #[must_use]
    pub fn new(indices: Vec<u32>) -> Self {
        Self(indices)
    }

    /// Identity order `1..=len`.
    #[must_use]
    pub fn sequential(len: usize) -> Self {
        Self((1..=len).filter_map(|i| u32::try_from(i).ok()).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    /// Map each 1-based index onto `raw`, returning the picked items and the
    /// indices that fell outside the list.
    #[must_use]
    pub fn apply<T: Clone>(&self, raw: &[T]) -> (Vec<T>, Vec<u32>) {
        let mut picked = Vec::with_capacity(self.0.len());
        let mut skipped = Vec::new();
        for &index in &self.0 {
            let position = usize::try_from(index).ok().and_then(|i| i.checked_sub(1));
            match position.and_then(|i| raw.get(i)) {
                Some(item) => picked.push(item.clone()),
                None => skipped.push(index),
            }
        }
        (picked, skipped)
    }
}

impl From<Vec<u32>> for PresentationOrder {
    fn from(indices: Vec<u32>) -> Self {
        Self::new(indices)
    }
}
