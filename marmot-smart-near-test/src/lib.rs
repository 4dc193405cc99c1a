//! Unit test harness for Marmot SMART NEAR contracts
//!
//! - [`call_at`] simulates a call from an account at a given block height
//! - promise results can be injected to unit test callbacks
//! - receipts created by the contract can be inspected via [`function_calls_to`]

use marmot_smart_near::YOCTO;
use near_sdk::{
    env,
    serde::{Deserialize, Serialize},
    serde_json,
    test_utils::{get_created_receipts, VMContextBuilder},
    Balance, BlockHeight, Gas, PromiseResult,
};
use near_vm_logic::{types::AccountId, VMContext};

pub use marmot_smart_near::to_valid_account_id;
pub use near_sdk::{self, testing_env, MockedBlockchain};
pub use near_vm_logic;

/// the contract under test is deployed to this account
pub const DEFAULT_CONTRACT_ACCOUNT_ID: &str = "contract.near";

pub const DEFAULT_CONTRACT_ACCOUNT_BALANCE: u128 = 10000 * YOCTO;

/// Creates a new NEAR test context where `predecessor_account_id` is also the signer
pub fn new_context(predecessor_account_id: &str) -> VMContext {
    VMContextBuilder::new()
        .current_account_id(to_valid_account_id(DEFAULT_CONTRACT_ACCOUNT_ID))
        .signer_account_id(to_valid_account_id(predecessor_account_id))
        .predecessor_account_id(to_valid_account_id(predecessor_account_id))
        .account_balance(DEFAULT_CONTRACT_ACCOUNT_BALANCE)
        .build()
}

/// Context for a call at the specified block height with 1 yoctoNEAR attached, which satisfies
/// the yoctoNEAR guard on state changing calls that move funds
pub fn context_at(predecessor_account_id: &str, block: BlockHeight) -> VMContext {
    let mut ctx = new_context(predecessor_account_id);
    ctx.block_index = block;
    ctx.attached_deposit = 1;
    ctx
}

/// Switches the test environment to a call from `predecessor_account_id` at `block`.
///
/// Contract storage is carried over.
pub fn call_at(predecessor_account_id: &str, block: BlockHeight) {
    testing_env!(context_at(predecessor_account_id, block));
}

/// Injects `PromiseResult`s into the test environment, which enables callbacks to be unit tested.
///
/// Contract storage is carried over.
///
/// ## Panics
/// if the test environment has not been set up
pub fn testing_env_with_promise_results(context: VMContext, promise_results: Vec<PromiseResult>) {
    assert!(
        !promise_results.is_empty(),
        "promise_results must not be empty"
    );
    let storage = env::take_blockchain_interface()
        .expect("test environment is not set up")
        .as_mut_mocked_blockchain()
        .expect("test environment is not a MockedBlockchain")
        .take_storage();

    env::set_blockchain_interface(Box::new(MockedBlockchain::new(
        context,
        Default::default(),
        Default::default(),
        promise_results,
        storage,
        Default::default(),
        Default::default(),
    )));
}

pub fn testing_env_with_promise_result_success(context: VMContext) {
    testing_env_with_promise_results(context, vec![PromiseResult::Successful(vec![])]);
}

pub fn testing_env_with_promise_result_failure(context: VMContext) {
    testing_env_with_promise_results(context, vec![PromiseResult::Failed]);
}

/// Receipt created by the contract.
///
/// Only the action kinds that Marmot contracts create are decoded.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(crate = "near_sdk::serde")]
pub struct Receipt {
    pub receiver_id: AccountId,
    pub receipt_indices: Vec<usize>,
    pub actions: Vec<Action>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub enum Action {
    FunctionCall(FunctionCallAction),
    Transfer(TransferAction),
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct TransferAction {
    pub deposit: Balance,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct FunctionCallAction {
    pub method_name: String,
    pub args: String,
    pub gas: Gas,
    pub deposit: Balance,
}

impl FunctionCallAction {
    pub fn json_args<T>(&self) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        serde_json::from_str(&self.args).expect("function call args are not valid JSON")
    }
}

/// Receipts created so far in the current test environment
pub fn receipts() -> Vec<Receipt> {
    get_created_receipts()
        .iter()
        .map(|receipt| {
            let json = serde_json::to_value(receipt).expect("receipt serialization failed");
            serde_json::from_value(json).expect("receipt contains an unsupported action")
        })
        .collect()
}

/// Function calls, in creation order, sent to `receiver_id`
pub fn function_calls_to(receiver_id: &str) -> Vec<FunctionCallAction> {
    receipts()
        .into_iter()
        .filter(|receipt| receipt.receiver_id == receiver_id)
        .flat_map(|receipt| receipt.actions)
        .filter_map(|action| match action {
            Action::FunctionCall(action) => Some(action),
            Action::Transfer(_) => None,
        })
        .collect()
}
