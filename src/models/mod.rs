pub mod booking;
pub mod enquiry;

pub use booking::{Booking, BookingStatus, SessionMode};
pub use enquiry::{ContactMessage, CorporateEnquiry};
