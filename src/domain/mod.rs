// Domain layer: chart types, symbol tables and the config port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
