pub mod aggregate;
pub mod order_id;

pub use aggregate::{number_as_text, CanonicalField, RugRecord};
pub use order_id::{resolve_order_id, OrderIdRule, ResolvedOrderId, NO_VALUE};
