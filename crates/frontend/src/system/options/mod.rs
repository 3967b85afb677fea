//! Application options page (`/options`).
//!
//! - state.rs: edited values and their mapping to the `Options` body
//! - view.rs: loads options and split values, saves with `PUT`

mod state;
mod view;

pub use state::OptionsFormState;
pub use view::OptionsPage;
