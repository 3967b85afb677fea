mod state;
mod view;

pub use state::DisciplineFormState;
pub use view::DisciplineForm;
