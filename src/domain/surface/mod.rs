//! Selection surface state and focus tracking

mod focus;
mod session;

pub use focus::FocusTarget;
pub use session::{InvalidStateTransition, SurfaceSession, SurfaceState};
