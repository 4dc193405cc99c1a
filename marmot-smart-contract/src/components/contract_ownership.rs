use crate::{
    ContractOwner, ContractOwnership, LOG_EVENT_CONTRACT_TRANSFER_CANCELLED,
    LOG_EVENT_CONTRACT_TRANSFER_FINALIZED, LOG_EVENT_CONTRACT_TRANSFER_INITIATED,
};
use marmot_smart_near::asserts::assert_yocto_near_attached;
use marmot_smart_near::component::Deploy;
use marmot_smart_near::near_sdk::{json_types::ValidAccountId, AccountId};

pub struct ContractOwnershipComponent;

impl Deploy for ContractOwnershipComponent {
    type Config = ValidAccountId;

    fn deploy(owner: Self::Config) {
        ContractOwner::initialize(owner);
    }
}

impl ContractOwnership for ContractOwnershipComponent {
    fn ops_owner(&self) -> AccountId {
        ContractOwner::load().account_id
    }

    fn ops_owner_transfer(&mut self, new_owner: ValidAccountId) {
        assert_yocto_near_attached();

        let new_owner: AccountId = new_owner.into();
        if ContractOwner::assert_owner().begin_transfer(new_owner.clone()) {
            LOG_EVENT_CONTRACT_TRANSFER_INITIATED.log(new_owner);
        }
    }

    fn ops_owner_cancel_transfer(&mut self) {
        assert_yocto_near_attached();

        if let Some(prospective_owner) = ContractOwner::assert_owner().cancel_transfer() {
            LOG_EVENT_CONTRACT_TRANSFER_CANCELLED.log(prospective_owner);
        }
    }

    fn ops_owner_finalize_transfer(&mut self) {
        assert_yocto_near_attached();

        let mut owner = ContractOwner::load();
        let previous_owner = owner.finalize_transfer();
        LOG_EVENT_CONTRACT_TRANSFER_FINALIZED
            .log(format!("from={} to={}", previous_owner, owner.account_id));
    }

    fn ops_owner_prospective(&self) -> Option<AccountId> {
        ContractOwner::load().prospective_owner
    }
}
