mod model;
mod page;
mod tabs;
mod view_model;

pub use page::BookingFormPage;
pub use view_model::BookingFormVm;
