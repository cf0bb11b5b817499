pub mod synthetic;

pub use synthetic::{DatasetSpec, SyntheticDataset};
