use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
};
use std::convert::TryInto;

/// sha256 digest used inside storage keys.
///
/// Keys built from account IDs have a constant size no matter how long the account IDs are.
#[derive(BorshDeserialize, BorshSerialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Hash([u8; 32]);

impl Hash {
    /// parts are separated by `:`, which is not a valid account ID character, so that
    /// `("ab", "c")` and `("a", "bc")` do not collide
    fn digest(parts: &[&[u8]]) -> Self {
        let bytes = parts.join(&b':');
        match env::sha256(&bytes).try_into() {
            Ok(digest) => Self(digest),
            Err(_) => env::panic(b"sha256 digest must be 32 bytes"),
        }
    }
}

impl From<&str> for Hash {
    fn from(account_id: &str) -> Self {
        assert!(!account_id.is_empty(), "hashed key must not be empty");
        Self::digest(&[account_id.as_bytes()])
    }
}

/// e.g., (vault account ID, vault pool ID)
impl From<(&str, u128)> for Hash {
    fn from((account_id, id): (&str, u128)) -> Self {
        assert!(!account_id.is_empty(), "hashed key must not be empty");
        Self::digest(&[account_id.as_bytes(), &id.to_be_bytes()])
    }
}

/// e.g., (token account ID, owner account ID)
impl From<(&str, &str)> for Hash {
    fn from((k1, k2): (&str, &str)) -> Self {
        assert!(
            !k1.is_empty() && !k2.is_empty(),
            "hashed key must not be empty"
        );
        Self::digest(&[k1.as_bytes(), k2.as_bytes()])
    }
}
