mod state;
mod view;

pub use state::RoomFormState;
pub use view::RoomForm;
