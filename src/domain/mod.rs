// Domain layer: vendor-facing data model, no I/O.

pub mod model;
