mod state;
mod view;

pub use state::PlanningFormState;
pub use view::PlanningForm;
