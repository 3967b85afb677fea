mod state;
mod view;

pub use state::TeacherFormState;
pub use view::TeacherForm;
