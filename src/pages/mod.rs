//! Page components for the birthday greeting.

mod card;
mod countdown;
mod waiting;

pub use card::BirthdayCard;
pub use countdown::CountdownPage;
pub use waiting::WaitingScreen;
