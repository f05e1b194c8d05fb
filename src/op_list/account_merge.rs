use crate::{
    operation::Operation,
    utils::decode_encode_muxed_account::decode_address_to_muxed_account_fix_for_g_address, xdr,
};

impl Operation {
    /// Transfers the XLM balance of an account to another account and removes the source account
    /// from the ledger
    ///
    /// Threshold: High
    pub fn account_merge(
        destination: &str,
        source: Option<&str>,
    ) -> Result<xdr::Operation, String> {
        //

        let muxed = match decode_address_to_muxed_account_fix_for_g_address(destination) {
            account => account,
            _ => return Err("destination is invalid".to_string()),
        };
        let body = xdr::OperationBody::AccountMerge(muxed);
        let source_account = source.map(decode_address_to_muxed_account_fix_for_g_address);
        Ok(xdr::Operation {
            source_account,
            body,
        })
    }
}
