mod contract_owner;

pub use contract_owner::*;
