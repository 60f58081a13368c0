mod booking_repository;
mod service_repository;
mod staff_repository;

pub use booking_repository::BookingRepository;
pub use service_repository::ServiceRepository;
pub use staff_repository::StaffRepository;
