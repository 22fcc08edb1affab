pub mod booking;
pub mod enquiry;
pub mod slots;
