use marmot_smart_near::asserts::ERR_INVALID;
use marmot_smart_near::domain::{BlockHeight, TokenAmount};
use marmot_smart_near::near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Two phase step function emission rate, in reward token units per block.
///
/// - no rewards are emitted before `genesis`
/// - `rate_phase1` applies while `block < phase_boundary`
/// - `rate_phase2` applies from `phase_boundary` onwards
///
/// The schedule is fixed when the contract is deployed.
#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Copy, Debug, PartialEq,
)]
#[serde(crate = "marmot_smart_near::near_sdk::serde")]
pub struct EmissionSchedule {
    pub genesis: BlockHeight,
    pub phase_boundary: BlockHeight,
    pub rate_phase1: TokenAmount,
    pub rate_phase2: TokenAmount,
}

impl EmissionSchedule {
    pub fn assert_valid(&self) {
        ERR_INVALID.assert(
            || self.phase_boundary >= self.genesis,
            || "`phase_boundary` must not be before `genesis`",
        );
    }

    pub fn rate_at(&self, block: BlockHeight) -> TokenAmount {
        if block < self.genesis {
            TokenAmount::ZERO
        } else if block < self.phase_boundary {
            self.rate_phase1
        } else {
            self.rate_phase2
        }
    }

    /// Total rewards emitted over the block range `[from, to)`
    ///
    /// The range is split at `phase_boundary` so that each block is emitted at the rate of the phase
    /// it falls in. Zero when `to <= from`.
    pub fn accrued(&self, from: BlockHeight, to: BlockHeight) -> TokenAmount {
        let from = from.max(self.genesis);
        if to <= from {
            return TokenAmount::ZERO;
        }
        let phase1_end = to.min(self.phase_boundary);
        let phase1_blocks = from.blocks_until(phase1_end);
        let phase2_blocks = from.max(self.phase_boundary).blocks_until(to);
        TokenAmount(
            *self.rate_phase1 * phase1_blocks as u128 + *self.rate_phase2 * phase2_blocks as u128,
        )
    }
}
