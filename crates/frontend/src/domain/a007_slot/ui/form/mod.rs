//! Slot create / edit form. Time slot, teacher, discipline, room and day are
//! picked from lists loaded when the page mounts.

mod state;
mod view;

pub use state::SlotFormState;
pub use view::SlotForm;
