use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
    serde::{Deserialize, Serialize},
};
use std::fmt::{self, Display, Formatter};

/// Error codes are rendered as `[ERR] [CODE]` so that clients can match on them in the panic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrCode(pub &'static str);

impl Display for ErrCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[ERR] [{}]", self.0)
    }
}

impl ErrCode {
    pub fn err<Msg: Display>(&self, msg: Msg) -> ErrMsg {
        ErrMsg {
            code: self.0.to_string(),
            msg: msg.to_string(),
        }
    }

    pub fn panic<Msg: Display>(&self, msg: Msg) -> ! {
        self.err(msg).panic()
    }

    /// the message is only rendered when the check fails
    pub fn assert<F, Msg, MsgF>(&self, check: F, msg: MsgF)
    where
        F: FnOnce() -> bool,
        Msg: Display,
        MsgF: FnOnce() -> Msg,
    {
        if !check() {
            self.panic(msg());
        }
    }
}

/// Error with a fixed message
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorConst(pub ErrCode, pub &'static str);

impl Display for ErrorConst {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

impl ErrorConst {
    pub fn panic(&self) -> ! {
        self.0.panic(self.1)
    }

    pub fn assert<F>(&self, check: F)
    where
        F: FnOnce() -> bool,
    {
        if !check() {
            self.panic();
        }
    }
}

/// Error value returned by collaborators that report failures instead of panicking.
///
/// The ledger decides whether an [`ErrMsg`] is fatal. When it is, [`ErrMsg::panic`] rethrows it with the
/// original code, which aborts the call and rolls back all state changes.
#[derive(BorshSerialize, BorshDeserialize, Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct ErrMsg {
    pub code: String,
    pub msg: String,
}

impl ErrMsg {
    pub fn is(&self, code: ErrCode) -> bool {
        self.code == code.0
    }

    pub fn panic(&self) -> ! {
        env::panic(self.to_string().as_bytes())
    }
}

impl Display for ErrMsg {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[ERR] [{}] {}", self.code, self.msg)
    }
}

/// unwraps the result or panics with the error code carried by [`ErrMsg`]
pub trait OrPanic<T> {
    fn or_panic(self) -> T;
}

impl<T> OrPanic<T> for Result<T, ErrMsg> {
    fn or_panic(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => err.panic(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marmot_smart_near_test::*;
    use regex::Regex;

    const ERR_CODE_STALE: ErrCode = ErrCode("STALE_OR_UNAVAILABLE");

    #[test]
    fn rendered_err_can_be_matched_by_clients() {
        let err_fmt_regex = Regex::new(r"^\[ERR] \[(\w+)] (.+)$").unwrap();

        let rendered = ERR_CODE_STALE.err("usdc.near price is 10 blocks old").to_string();
        let captures = err_fmt_regex.captures(&rendered).unwrap();
        assert_eq!(&captures[1], "STALE_OR_UNAVAILABLE");
        assert_eq!(&captures[2], "usdc.near price is 10 blocks old");

        let rendered = ErrorConst(ERR_CODE_STALE, "no price").to_string();
        assert_eq!(rendered, "[ERR] [STALE_OR_UNAVAILABLE] no price");
    }

    #[test]
    #[should_panic(expected = "[ERR] [STALE_OR_UNAVAILABLE] no price")]
    fn error_const_assert() {
        testing_env!(new_context("bob.near"));
        const ERR: ErrorConst = ErrorConst(ERR_CODE_STALE, "no price");
        ERR.assert(|| true);
        ERR.assert(|| false);
    }

    #[test]
    #[should_panic(expected = "[ERR] [STALE_OR_UNAVAILABLE] pool=3")]
    fn err_code_assert_renders_message_on_failure() {
        testing_env!(new_context("bob.near"));
        ERR_CODE_STALE.assert(|| true, || -> String { panic!("message must be lazy") });
        ERR_CODE_STALE.assert(|| false, || format!("pool={}", 3));
    }

    #[test]
    fn err_code_is_preserved() {
        let err = ERR_CODE_STALE.err("oracle has not reported");
        assert!(err.is(ERR_CODE_STALE));
        assert!(!err.is(ErrCode("INVALID")));
        assert_eq!(err.msg, "oracle has not reported");
    }

    #[test]
    #[should_panic(expected = "[ERR] [STALE_OR_UNAVAILABLE] oracle has not reported")]
    fn or_panic_rethrows_err_code() {
        testing_env!(new_context("bob.near"));
        let result: Result<u128, ErrMsg> = Err(ERR_CODE_STALE.err("oracle has not reported"));
        result.or_panic();
    }

    #[test]
    fn or_panic_passes_value_through() {
        let result: Result<u128, ErrMsg> = Ok(10);
        assert_eq!(result.or_panic(), 10);
    }
}
