use near_sdk::{env, serde::Serialize, serde_json, Balance, Gas, Promise};

/// Creates a function call promise with JSON serialized args
///
/// ## Panics
/// if the args fail to serialize to JSON
pub fn json_function_call<Args>(
    account_id: &str,
    method: &str,
    args: Option<Args>,
    deposit: Balance,
    gas: Gas,
) -> Promise
where
    Args: Serialize,
{
    Promise::new(account_id.to_string()).function_call(
        method.as_bytes().to_vec(),
        args.map_or_else(Vec::new, |args| {
            serde_json::to_vec(&args).unwrap_or_else(|err| {
                env::panic(format!("failed to serialize args: {}", err).as_bytes())
            })
        }),
        deposit,
        gas,
    )
}

/// Creates a function call promise back on the current contract, i.e., used to schedule callbacks
pub fn json_function_callback<Args>(
    method: &str,
    args: Option<Args>,
    deposit: Balance,
    gas: Gas,
) -> Promise
where
    Args: Serialize,
{
    json_function_call(&env::current_account_id(), method, args, deposit, gas)
}
