mod booking;
mod service;
mod staff;

pub use booking::*;
pub use service::*;
pub use staff::*;
