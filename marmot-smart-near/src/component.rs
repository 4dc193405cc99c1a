//! Stateful contract components
//!
//! A component owns a single state record stored under its own u128 key (a ULID, which keeps keys
//! from colliding across components). Components save their own state after changing it.
//! [`Deploy`] initializes component state when the contract is deployed.

mod deploy;

pub use deploy::*;

use crate::data::Object;
use crate::ErrorConst;
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use std::fmt::Debug;

pub trait Component {
    type State: BorshSerialize + BorshDeserialize + Clone + Debug + PartialEq;

    const STATE_KEY: u128;

    fn load_state() -> Option<ComponentState<Self::State>> {
        ComponentState::<Self::State>::load(&Self::STATE_KEY)
    }

    /// in memory until saved
    fn new_state(state: Self::State) -> ComponentState<Self::State> {
        ComponentState::<Self::State>::new(Self::STATE_KEY, state)
    }

    /// ## Panics
    /// with `not_deployed` if the state was never saved
    fn deployed_state(not_deployed: ErrorConst) -> ComponentState<Self::State> {
        Self::load_state().unwrap_or_else(|| not_deployed.panic())
    }

    /// for components whose state has a sensible initial value, e.g., an empty balance table
    fn state_or_default() -> ComponentState<Self::State>
    where
        Self::State: Default,
    {
        Self::load_state().unwrap_or_else(|| Self::new_state(Default::default()))
    }
}

pub type ComponentState<T> = Object<u128, T>;
