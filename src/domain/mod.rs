// Domain layer: site data model, page identifiers and ports.

pub mod model;
pub mod page;
pub mod ports;
