use crate::{
    operation::{self, Operation},
    xdr,
};

impl Operation {
    /// Creates, updates, or deletes a trustline
    ///
    /// The `asset` can be an [Asset](crate::asset::Asset) or a
    /// [LiquidityPoolAsset](crate::liquidity_pool_asset::LiquidityPoolAsset).
    ///
    /// The `limit` will default to MAX i64 if None. A value of 0 (zero) will remove the trustline.
    ///
    /// Threshold: Medium
    pub fn change_trust(
        &self,
        asset: impl Into<xdr::ChangeTrustAsset>,
        limit: impl Into<Option<i64>>,
    ) -> Result<xdr::Operation, operation::Error> {
        //
        let limit = limit.into().unwrap_or(i64::MAX);
        if limit < 0 {
            return Err(operation::Error::InvalidField("limit".into()));
        }

        let body = xdr::OperationBody::ChangeTrust(xdr::ChangeTrustOp {
            line: asset.into(),
            limit,
        });
        Ok(xdr::Operation {
            source_account: self.source.clone(),
            body,
        })
    }
}
