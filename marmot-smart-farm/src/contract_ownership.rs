use crate::*;
use marmot_smart_contract::ContractOwnership;
use marmot_smart_near::near_sdk::AccountId;

#[near_bindgen]
impl ContractOwnership for Contract {
    fn ops_owner(&self) -> AccountId {
        ContractOwnershipComponent.ops_owner()
    }

    #[payable]
    fn ops_owner_transfer(&mut self, new_owner: ValidAccountId) {
        ContractOwnershipComponent.ops_owner_transfer(new_owner)
    }

    #[payable]
    fn ops_owner_cancel_transfer(&mut self) {
        ContractOwnershipComponent.ops_owner_cancel_transfer()
    }

    #[payable]
    fn ops_owner_finalize_transfer(&mut self) {
        ContractOwnershipComponent.ops_owner_finalize_transfer()
    }

    fn ops_owner_prospective(&self) -> Option<AccountId> {
        ContractOwnershipComponent.ops_owner_prospective()
    }
}
