use crate::{
    asset::AssetBehavior,
    operation::{is_valid_amount, to_xdr_amount, Operation, PaymentOpts},
    utils::decode_encode_muxed_account::decode_address_to_muxed_account_fix_for_g_address,
    xdr,
};

impl Operation {
    /// Sends an amount in a specific asset to a destination account.
    ///
    /// Threshold: Medium
    pub fn payment(opts: PaymentOpts) -> Result<xdr::Operation, String> {
        if !is_valid_amount(&opts.amount, false) {
            return Err("amount must be of type String, represent a positive number and have at most 7 digits after the decimal".to_string());
        }

        let destination =
            decode_address_to_muxed_account_fix_for_g_address(&opts.destination);
        let amount = to_xdr_amount(&opts.amount).map_err(|_| "invalid amount".to_string())?;
        let asset = opts.asset.to_xdr_object();

        let body = xdr::OperationBody::Payment(xdr::PaymentOp {
            asset,
            amount,
            destination,
        });

        let source_account = opts
            .source
            .as_deref()
            .map(decode_address_to_muxed_account_fix_for_g_address);

        Ok(xdr::Operation {
            source_account,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Asset;

    #[test]
    fn test_payment() {
        let op = Operation::payment(PaymentOpts {
            destination: "GDJJRRMBK4IWLEPJGIE6SXD2LP7REGZODU7WDC3I2D6MR37F4XSHBKX2"
                .to_string(),
            asset: Asset::native(),
            amount: "1000".to_string(),
            source: None,
        })
        .unwrap();

        match op.body {
            xdr::OperationBody::Payment(inner) => {
                assert_eq!(inner.amount, 1000 * 10_000_000);
            }
            _ => panic!("expected Payment body"),
        }
    }

    #[test]
    fn test_payment_rejects_zero_amount() {
        let result = Operation::payment(PaymentOpts {
            destination: "GDJJRRMBK4IWLEPJGIE6SXD2LP7REGZODU7WDC3I2D6MR37F4XSHBKX2"
                .to_string(),
            asset: Asset::native(),
            amount: "0".to_string(),
            source: None,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_payment_with_source() {
        let op = Operation::payment(PaymentOpts {
            destination: "GDJJRRMBK4IWLEPJGIE6SXD2LP7REGZODU7WDC3I2D6MR37F4XSHBKX2"
                .to_string(),
            asset: Asset::native(),
            amount: "1000".to_string(),
            source: Some(
                "GBZXN7PIRZGNMHGA7MUUUF4GWPY5AYPV6LY4UV2GL6VJGIQRXFDNMADI".to_string(),
            ),
        })
        .unwrap();

        assert!(op.source_account.is_some());
    }
}
