use crate::{
    ERR_CONTRACT_OWNER_TRANSFER_NOT_INITIATED, ERR_OWNER_ACCESS_REQUIRED,
    ERR_PROSPECTIVE_OWNER_ACCESS_REQUIRED,
};
use marmot_smart_near::near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
    json_types::ValidAccountId,
    AccountId,
};
use marmot_smart_near::{data::Object, ErrCode, ErrorConst};

pub const ERR_CONTRACT_OWNER_ALREADY_INITIALIZED: ErrorConst = ErrorConst(
    ErrCode("CONTRACT_OWNER_ALREADY_INITIALIZED"),
    "contract owner is already initialized with a different owner",
);

pub const ERR_CONTRACT_OWNER_NOT_INITIALIZED: ErrorConst = ErrorConst(
    ErrCode("CONTRACT_OWNER_NOT_INITIALIZED"),
    "contract owner has not been initialized",
);

const CONTRACT_OWNER_KEY: u128 = 1952995667402400813184690843862547707;

type OwnerObject = Object<u128, ContractOwner>;

/// The farm owner, i.e., the account that administers pools and the emission schedule.
///
/// Ownership moves in two steps: the owner names a prospective owner, who must then accept. A
/// typo in the new owner's account ID therefore cannot lock the farm.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq)]
pub struct ContractOwner {
    pub account_id: AccountId,
    pub prospective_owner: Option<AccountId>,
}

impl ContractOwner {
    /// ## Panics
    /// if the contract was initialized with a different owner
    pub fn initialize(account_id: ValidAccountId) {
        let account_id: AccountId = account_id.into();
        match OwnerObject::load(&CONTRACT_OWNER_KEY) {
            Some(owner) => {
                ERR_CONTRACT_OWNER_ALREADY_INITIALIZED.assert(|| owner.account_id == account_id)
            }
            None => OwnerObject::new(
                CONTRACT_OWNER_KEY,
                ContractOwner {
                    account_id,
                    prospective_owner: None,
                },
            )
            .save(),
        }
    }

    pub fn load() -> Self {
        OwnerObject::load(&CONTRACT_OWNER_KEY)
            .map(OwnerObject::into_value)
            .unwrap_or_else(|| ERR_CONTRACT_OWNER_NOT_INITIALIZED.panic())
    }

    fn save(&self) {
        OwnerObject::new(CONTRACT_OWNER_KEY, self.clone()).save();
    }

    /// ## Panics
    /// with `[ERR] [UNAUTHORIZED]` if the predecessor is not the owner
    pub fn assert_owner() -> Self {
        let owner = Self::load();
        ERR_OWNER_ACCESS_REQUIRED.assert(|| owner.account_id == env::predecessor_account_id());
        owner
    }

    /// Returns false if `new_owner` was already the prospective owner
    pub fn begin_transfer(&mut self, new_owner: AccountId) -> bool {
        if self.prospective_owner.as_ref() == Some(&new_owner) {
            return false;
        }
        self.prospective_owner = Some(new_owner);
        self.save();
        true
    }

    /// Returns the prospective owner that was dropped
    pub fn cancel_transfer(&mut self) -> Option<AccountId> {
        let prospective_owner = self.prospective_owner.take();
        if prospective_owner.is_some() {
            self.save();
        }
        prospective_owner
    }

    /// The predecessor must be the prospective owner. Returns the previous owner.
    pub fn finalize_transfer(&mut self) -> AccountId {
        let new_owner = self
            .prospective_owner
            .take()
            .unwrap_or_else(|| ERR_CONTRACT_OWNER_TRANSFER_NOT_INITIATED.panic());
        ERR_PROSPECTIVE_OWNER_ACCESS_REQUIRED.assert(|| new_owner == env::predecessor_account_id());
        let previous_owner = std::mem::replace(&mut self.account_id, new_owner);
        self.save();
        previous_owner
    }
}
