//! Application pages module
//!
//! - Landing page (home)
//! - Waitlist page
//! - Thank-you page
//! - Not found page

mod landing;
mod not_found;
mod thank_you;
mod waitlist;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use thank_you::ThankYouPage;
pub use waitlist::{WaitlistCard, WaitlistPage};

/// Beta seats offered in total
pub const BETA_SEATS: u32 = 50;
/// Beta seats still open, as advertised
pub const SEATS_LEFT: u32 = 13;
