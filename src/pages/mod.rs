//! Page components for Sanctuary.

mod home;

pub use home::Home;
