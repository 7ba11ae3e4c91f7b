pub mod gesture;
pub mod press;
pub mod touch;

pub use gesture::{GestureEngine, Transform};
pub use press::{PressKind, PressTracker};
pub use touch::{TouchPhase, TouchPoint, touches_from_event};
