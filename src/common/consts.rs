//! Static constants.

use crate::defs::{F64_EXP_MAX, F64_EXP_MIN};
use lazy_static::lazy_static;

lazy_static! {
    /// Correctly rounded powers of ten from `1e-323` to `1e308`.
    pub static ref POWERS_OF_TEN: Vec<f64> = (F64_EXP_MIN..=F64_EXP_MAX)
        .map(|i| format!("1e{i}").parse::<f64>().unwrap_or_else(|_| 10f64.powi(i)))
        .collect();
}
