// Domain layer: recipe data model and the ports the loader depends on.

pub mod model;
pub mod ports;
