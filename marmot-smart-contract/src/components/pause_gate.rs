use crate::{ContractOwner, PauseGate, ERR_PAUSED, LOG_EVENT_PAUSED, LOG_EVENT_UNPAUSED};
use marmot_smart_near::component::{Component, ComponentState, Deploy};

/// Holds the global pause flag
pub struct PauseGateComponent {
    state: ComponentState<bool>,
}

impl Component for PauseGateComponent {
    type State = bool;

    const STATE_KEY: u128 = 1953914480219856208743115126380853513;
}

impl Deploy for PauseGateComponent {
    /// initial pause flag
    type Config = bool;

    fn deploy(paused: Self::Config) {
        Self::new_state(paused).save();
    }
}

impl PauseGateComponent {
    pub fn new() -> Self {
        Self {
            state: Self::state_or_default(),
        }
    }

    pub fn is_paused(&self) -> bool {
        *self.state
    }

    /// ## Panics
    /// with `[ERR] [PAUSED]` if the contract is paused
    pub fn assert_not_paused(&self) {
        ERR_PAUSED.assert(|| !self.is_paused());
    }
}

impl Default for PauseGateComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PauseGate for PauseGateComponent {
    fn ops_paused(&self) -> bool {
        self.is_paused()
    }

    fn ops_pause_toggle(&mut self) -> bool {
        ContractOwner::assert_owner();

        *self.state = !*self.state;
        self.state.save();
        if *self.state {
            LOG_EVENT_PAUSED.log("");
        } else {
            LOG_EVENT_UNPAUSED.log("");
        }
        *self.state
    }
}
