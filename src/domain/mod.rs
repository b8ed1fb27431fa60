// Domain layer: wire models and ports. No transport code here.

pub mod model;
pub mod ports;
