mod buyback;
mod collaborators;
mod pool_registry;
mod reward_pool;
mod reward_pool_owner;

pub use buyback::*;
pub use collaborators::*;
pub use pool_registry::*;
pub use reward_pool::*;
pub use reward_pool_owner::*;
