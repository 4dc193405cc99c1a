//! Keyed object storage on the NEAR blockchain

use near_sdk::{
    borsh::{BorshDeserialize, BorshSerialize},
    env,
};
use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

/// Value stored on the contract Trie under a hashed key.
///
/// The key is Borsh serialized and then hashed with sha256, which keeps the Trie key size constant
/// for composite keys such as `(namespace, pool, account_hash)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Object<K, V>
where
    K: BorshSerialize + Clone + Debug + PartialEq,
    V: BorshSerialize + BorshDeserialize + Clone + Debug + PartialEq,
{
    key: K,
    value: V,
}

impl<K, V> Object<K, V>
where
    K: BorshSerialize + Clone + Debug + PartialEq,
    V: BorshSerialize + BorshDeserialize + Clone + Debug + PartialEq,
{
    /// in memory only until [`Object::save`] is called
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_value(self) -> V {
        self.value
    }

    /// ## Panics
    /// if the stored bytes do not deserialize into `V`, i.e., another type was stored under the key
    pub fn load(key: &K) -> Option<Self> {
        env::storage_read(&storage_key(key)).map(|bytes| {
            let value = V::try_from_slice(&bytes).unwrap_or_else(|err| {
                env::panic(format!("object deserialization failed: {}", err).as_bytes())
            });
            Self::new(key.clone(), value)
        })
    }

    /// Removes the object from storage and returns its value
    pub fn take(key: &K) -> Option<V> {
        Self::load(key).map(|object| {
            env::storage_remove(&storage_key(&object.key));
            object.value
        })
    }

    pub fn save(&self) {
        env::storage_write(&storage_key(&self.key), &borsh_bytes(&self.value));
    }

    /// Saves the object, or removes it from storage if its value is empty.
    ///
    /// Zero balances are not worth the storage they occupy.
    pub fn save_unless(self, is_empty: impl FnOnce(&V) -> bool) {
        if is_empty(&self.value) {
            self.delete();
        } else {
            self.save();
        }
    }

    /// Returns true if the object was stored
    pub fn delete(self) -> bool {
        env::storage_remove(&storage_key(&self.key))
    }
}

impl<K, V> Deref for Object<K, V>
where
    K: BorshSerialize + Clone + Debug + PartialEq,
    V: BorshSerialize + BorshDeserialize + Clone + Debug + PartialEq,
{
    type Target = V;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<K, V> DerefMut for Object<K, V>
where
    K: BorshSerialize + Clone + Debug + PartialEq,
    V: BorshSerialize + BorshDeserialize + Clone + Debug + PartialEq,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

fn storage_key<K: BorshSerialize>(key: &K) -> Vec<u8> {
    env::sha256(&borsh_bytes(key))
}

fn borsh_bytes<T: BorshSerialize>(value: &T) -> Vec<u8> {
    value.try_to_vec().unwrap_or_else(|err| {
        env::panic(format!("borsh serialization failed: {}", err).as_bytes())
    })
}
