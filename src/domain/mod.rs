// Domain layer: projection model and the document / reassemble ports.

pub mod model;
pub mod ports;
