//! Typesafe domain model shared by Marmot SMART components
//! - all domain objects support Borsh and JSON serialization
//! - numeric values are JSON serialized as strings because JavaScript clients lose precision above 2^53

/// JSON (de)serializes the type as a string via its `Display` and `FromStr` impls
macro_rules! json_as_string {
    ($type:ty) => {
        impl near_sdk::serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: near_sdk::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> near_sdk::serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: near_sdk::serde::Deserializer<'de>,
            {
                let value = <String as near_sdk::serde::Deserialize>::deserialize(deserializer)?;
                value.parse().map_err(near_sdk::serde::de::Error::custom)
            }
        }
    };
}

/// Wraps an unsigned integer: conversion from the integer, deref to it, and decimal text form
macro_rules! unsigned_newtype {
    ($type:ident, $uint:ty) => {
        impl From<$uint> for $type {
            fn from(value: $uint) -> Self {
                Self(value)
            }
        }

        impl std::ops::Deref for $type {
            type Target = $uint;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $type {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        json_as_string!($type);
    };
}

mod account_id_hash;
mod basis_points;
mod block_height;
mod decimal;
mod token_amount;

pub use account_id_hash::*;
pub use basis_points::*;
pub use block_height::*;
pub use decimal::*;
pub use token_amount::*;
