mod payment_method;
mod plan;

pub use payment_method::PaymentMethod;
pub use plan::Plan;
