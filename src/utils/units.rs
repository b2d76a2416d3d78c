//! Unit conversion utilities

/// Convert centimeters to meters
#[inline]
pub fn cm_to_m(cm: f64) -> f64 {
    cm / 100.0
}

/// Convert meters to centimeters
#[inline]
pub fn m_to_cm(m: f64) -> f64 {
    m * 100.0
}
