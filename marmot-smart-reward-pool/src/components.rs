pub mod buyback;
pub mod reward_pool;
