pub mod not_found;
pub mod schedule;

pub use not_found::NotFound;
pub use schedule::SchedulePage;
