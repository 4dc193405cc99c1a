mod contract_ownership;
mod pause_gate;

pub use contract_ownership::*;
pub use pause_gate::*;
