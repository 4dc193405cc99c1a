use marmot_smart_near::asserts::ERR_CODE_BAD_REQUEST;
use marmot_smart_near::near_sdk::{
    serde::{Deserialize, Serialize},
    serde_json, AccountId,
};
use marmot_smart_near::ErrMsg;
use marmot_smart_reward_pool::{ExternalYieldRef, PoolIndex};

/// Instructs the farm what to do with tokens received via `ft_transfer_call`
///
/// ```json
/// "deposit"
/// {"stake": {"pool": 0}}
/// {"harvest": {"vault": "ibbusd.near", "pid": 3}}
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "marmot_smart_near::near_sdk::serde", rename_all = "snake_case")]
pub enum FarmMessage {
    /// credit the sender's wallet
    Deposit,
    /// credit the sender's wallet and stake the tokens into the pool
    Stake { pool: PoolIndex },
    /// yield delivered by a vault operator for the referenced vault pool
    Harvest { vault: AccountId, pid: u64 },
}

impl FarmMessage {
    pub fn parse(msg: &str) -> Result<Self, ErrMsg> {
        serde_json::from_str(msg).map_err(|err| {
            ERR_CODE_BAD_REQUEST.err(format!("invalid transfer message: {}", err))
        })
    }
}

impl From<&ExternalYieldRef> for FarmMessage {
    fn from(yield_ref: &ExternalYieldRef) -> Self {
        FarmMessage::Harvest {
            vault: yield_ref.vault.clone(),
            pid: yield_ref.pid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(FarmMessage::parse(r#""deposit""#).unwrap(), FarmMessage::Deposit);
        assert_eq!(
            FarmMessage::parse(r#"{"stake":{"pool":2}}"#).unwrap(),
            FarmMessage::Stake { pool: 2 }
        );
        assert_eq!(
            FarmMessage::parse(r#"{"harvest":{"vault":"ibbusd.near","pid":3}}"#).unwrap(),
            FarmMessage::from(&ExternalYieldRef {
                vault: "ibbusd.near".to_string(),
                pid: 3
            })
        );
    }

    #[test]
    fn parse_invalid() {
        let err = FarmMessage::parse("stake").unwrap_err();
        assert!(err.is(ERR_CODE_BAD_REQUEST));
        assert!(FarmMessage::parse(r#"{"stake":{}}"#).is_err());
    }
}
