//! Page components following the markup contract.

mod carousel_button;
mod devotion_panel;
mod nav_menu;
mod release_card;

pub use carousel_button::*;
pub use devotion_panel::*;
pub use nav_menu::*;
pub use release_card::*;
