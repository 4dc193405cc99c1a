pub mod contract_ownership;
pub mod pause_gate;
