mod buyback_receipt;
mod emission_schedule;
mod external_yield_ref;
mod harvest_report;
mod pool;
mod reward_per_share;
mod settlement;
mod treasury;
mod user_position;

pub use buyback_receipt::*;
pub use emission_schedule::*;
pub use external_yield_ref::*;
pub use harvest_report::*;
pub use pool::*;
pub use reward_per_share::*;
pub use settlement::*;
pub use treasury::*;
pub use user_position::*;
