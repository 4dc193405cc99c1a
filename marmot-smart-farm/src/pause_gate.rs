use crate::*;
use marmot_smart_contract::PauseGate;

#[near_bindgen]
impl PauseGate for Contract {
    fn ops_paused(&self) -> bool {
        PauseGateComponent::new().ops_paused()
    }

    fn ops_pause_toggle(&mut self) -> bool {
        PauseGateComponent::new().ops_pause_toggle()
    }
}
