// Domain layer: check definitions, response shapes and the ports the runner talks through.

pub mod model;
pub mod ports;
