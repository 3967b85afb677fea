//! Classe create / edit form
//!
//! - state.rs: editable fields and their mapping to the DTO
//! - view.rs: field descriptors handed to the generic form page

mod state;
mod view;

pub use state::ClasseFormState;
pub use view::ClasseForm;
