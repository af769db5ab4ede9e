pub mod controller;
pub mod drag;
pub mod edit_mode;
pub mod input;

pub use controller::GridController;
pub use drag::{DragReorderEngine, DropOutcome, Placement};
pub use edit_mode::{EditAffordances, EditMode, EditModeController, EditTransition};
pub use input::GestureEvent;
