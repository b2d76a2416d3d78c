pub mod input;
pub mod units;

pub use input::{evaluate_text, parse_numeric_input};
pub use units::{cm_to_m, m_to_cm};
