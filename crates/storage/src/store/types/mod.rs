#![forbid(unsafe_code)]

mod dropdowns;
mod listing;
mod lookups;
mod move_ins;
mod move_outs;
mod payment_plans;
mod vendor_tasks;

pub use dropdowns::*;
pub use listing::*;
pub use lookups::*;
pub use move_ins::*;
pub use move_outs::*;
pub use payment_plans::*;
pub use vendor_tasks::*;
