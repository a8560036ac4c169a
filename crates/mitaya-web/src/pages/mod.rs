//! Page components

mod home;
mod menu;
mod reservation;

pub use home::HomePage;
pub use menu::MenuPage;
pub use reservation::ReservationPage;
