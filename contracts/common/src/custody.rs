use soroban_sdk::{token, Address, Env};

/// Raised when the token contract refuses a transfer (missing allowance,
/// short balance, negative amount). The token's own state is left as it was.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CustodyError {
    TransferRejected,
}

/// The calling contract's holdings of one token.
///
/// Every movement goes through the token's `try_` entry points so a
/// rejection surfaces as [`CustodyError`] instead of trapping the host.
/// The caller turns that into its own error and returns it, which makes
/// the host discard every write of the invocation.
pub struct TokenCustody<'a> {
    token: token::Client<'a>,
    holder: Address,
}

impl<'a> TokenCustody<'a> {
    /// Custody of `token` held by the currently executing contract.
    pub fn new(env: &Env, token: &Address) -> Self {
        Self {
            token: token::Client::new(env, token),
            holder: env.current_contract_address(),
        }
    }

    /// Pulls `amount` from `from` into custody, spending the allowance
    /// `from` granted to the holder.
    pub fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), CustodyError> {
        self.transfer_on_behalf(from, &self.holder, amount)
    }

    /// Pays `amount` out of custody to `to`.
    pub fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), CustodyError> {
        match self.token.try_transfer(&self.holder, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(CustodyError::TransferRejected),
        }
    }

    /// Moves `amount` from `from` to `to` using the allowance `from`
    /// granted to the holder. Custody itself is not touched.
    pub fn transfer_on_behalf(
        &self,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), CustodyError> {
        match self
            .token
            .try_transfer_from(&self.holder, from, to, &amount)
        {
            Ok(Ok(())) => Ok(()),
            _ => Err(CustodyError::TransferRejected),
        }
    }

    /// Token balance currently held by the contract.
    pub fn balance(&self) -> i128 {
        self.token.balance(&self.holder)
    }
}
