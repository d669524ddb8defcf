// Domain layer: command metadata, argument model and the actor/handler
// seams. No dependencies on the runtime pieces in `core`.

pub mod model;
pub mod ports;
