use crate::error::{Error, Result};

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyInput { op: "mean" });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation: sqrt(sum((x - mean)^2) / n).
pub fn std_dev(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyInput { op: "std" });
    }
    let m = mean(values)?;
    let var = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    Ok(var.sqrt())
}

/// Sorted copy with duplicates removed.
pub fn unique<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut out = values.to_vec();
    out.sort();
    out.dedup();
    out
}
