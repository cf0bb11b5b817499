use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::math::{matrix::Matrix, stats};

/// Dimensions of a generated classification dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub samples: usize,
    pub features: usize,
    pub num_classes: u32,
}

/// Random features with random integer labels. Nothing is learnable here;
/// it only exercises the RNG and the shape bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticDataset {
    pub features: Matrix,
    pub labels: Vec<u32>,
}

impl SyntheticDataset {
    /// Draws the feature matrix first, then one label per sample in
    /// `[0, num_classes)`.
    pub fn generate<R: Rng + ?Sized>(spec: DatasetSpec, rng: &mut R) -> SyntheticDataset {
        let features = Matrix::randn(spec.samples, spec.features, rng);
        let labels = (0..spec.samples)
            .map(|_| rng.gen_range(0..spec.num_classes))
            .collect();
        SyntheticDataset { features, labels }
    }

    pub fn features_shape(&self) -> (usize, usize) {
        self.features.shape()
    }

    pub fn labels_shape(&self) -> (usize,) {
        (self.labels.len(),)
    }

    pub fn classes(&self) -> Vec<u32> {
        stats::unique(&self.labels)
    }
}
