mod state;
mod view;

pub use state::TimeSlotFormState;
pub use view::TimeSlotForm;
