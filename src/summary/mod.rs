//! Group-by-sum-percentage tables for the non-income sections.

pub mod age_sex;
pub mod categorical;

pub use age_sex::summarize_age_sex;
pub use categorical::summarize;
