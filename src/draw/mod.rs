pub mod bounds;
pub mod controller;
pub mod state;

pub use controller::{sample_in_bound, DrawController, DrawTiming};
pub use state::{DrawKind, DrawOutcome, DrawState};
