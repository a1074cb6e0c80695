pub mod attendee_fields;
pub mod day_tabs;
pub mod delete_modal;
pub mod error;
pub mod signup_modal;
pub mod slot_grid;

// Re-export commonly used types
pub use attendee_fields::AttendeeFields;
pub use day_tabs::DayTabs;
pub use delete_modal::{DeleteModal, DeleteTarget};
pub use error::ErrorView;
pub use signup_modal::{SelectedSlot, SignupModal};
pub use slot_grid::SlotGrid;
