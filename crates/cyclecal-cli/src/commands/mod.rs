pub mod calendar;
pub mod preview;
