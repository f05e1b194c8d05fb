use crate::keypair::{Keypair, KeypairBehavior};
use crate::operation::{is_valid_amount, to_xdr_amount};
use crate::xdr;

/// Creates and funds a new account with the specified starting balance.
pub fn create_account(
    destination: String,
    starting_balance: String,
) -> Result<xdr::Operation, String> {
    if !is_valid_amount(&starting_balance, true) {
        return Err("startingBalance must be of type String, represent a non-negative number and have at most 7 digits after the decimal".to_string());
    }

    let destination = Keypair::from_public_key(&destination)
        .map_err(|_| "destination is invalid".to_string())?
        .xdr_account_id();
    let starting_balance =
        to_xdr_amount(&starting_balance).map_err(|_| "invalid startingBalance".to_string())?;

    let body = xdr::OperationBody::CreateAccount(xdr::CreateAccountOp {
        destination,
        starting_balance,
    });

    Ok(xdr::Operation {
        source_account: None,
        body,
    })
}
