pub mod chart;
pub mod elements;
pub mod pillars;

pub use crate::domain::model::{BirthInput, Chart, Element, ElementTally, Pillar, Pillars};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
