// Domain layer: package names, repo locations and the source port.

pub mod model;
pub mod ports;
