pub mod cutting_days;
pub mod not_found;
pub mod orders;

pub use cutting_days::CuttingDaysPage;
pub use not_found::NotFoundPage;
pub use orders::OrdersPage;
