use near_sdk::json_types::ValidAccountId;
use std::convert::TryFrom;

/// converts a string into a [`ValidAccountId`]
///
/// ## Panics
/// if the account ID is invalid
pub fn to_valid_account_id(account_id: &str) -> ValidAccountId {
    ValidAccountId::try_from(account_id)
        .unwrap_or_else(|_| panic!("invalid account ID: {}", account_id))
}
