use marmot_smart_near::domain::TokenAmount;

/// Provides basic functions to operate the fungible token.
///
/// These are contract internal operations, i.e., they are not exposed on the contract interface.
pub trait TokenService {
    /// Mints new tokens and credits them to the specified account ID, which increases the total supply.
    ///
    /// **Use Case:** MARMOT tokens are minted when depositors claim rewards.
    ///
    /// ## Panics
    /// - if amount is zero
    fn ft_mint(&mut self, account_id: &str, amount: TokenAmount);

    /// Debits tokens from the specified account ID and burns them, which decreases the total supply.
    ///
    /// **Use Case:** MARMOT tokens bought back with harvested yield are burned.
    ///
    /// ## Panics
    /// - if amount is zero
    /// - if the account has insufficient funds
    fn ft_burn(&mut self, account_id: &str, amount: TokenAmount);

    /// moves tokens between accounts without any checks on the predecessor
    ///
    /// ## Panics
    /// - if the sender account has insufficient funds
    fn ft_move(&mut self, sender_id: &str, receiver_id: &str, amount: TokenAmount);
}
