use std::{ops::BitOr, str::FromStr};

use crate::{
    asset::{Asset, AssetBehavior},
    operation::{self, Operation},
    xdr,
};

#[derive(Debug, Clone, Copy)]
/// Possible flags for [set_trustline_flags](Operation::set_trustline_flags)
pub enum TrustlineFlags {
    /// Authorize the account to perform transactions with the asset
    Authorized = 1,
    /// Authorize the account to maintain liabilities with the asset
    AuthorizedToMaintainLiabilities = 2,
    /// Stop the claimable balances from being 'clawback enabled', this flag can only be cleared
    TrustlineClawbackEnabled = 4,
}

impl BitOr for TrustlineFlags {
    type Output = u32;

    fn bitor(self, rhs: Self) -> Self::Output {
        self as u32 | rhs as u32
    }
}

impl From<TrustlineFlags> for u32 {
    fn from(flag: TrustlineFlags) -> Self {
        flag as u32
    }
}

impl Operation {
    /// Allows issuing account to configure authorization and trustline flags to an asset
    ///
    /// The `set_flags` and `clear_flags` can be built by logical `or` on enum variants
    /// [TrustlineFlags].
    ///
    /// Threshold: Low
    pub fn set_trustline_flags(
        &self,
        account: &str,
        asset: &Asset,
        set_flags: u32,
        clear_flags: u32,
    ) -> Result<xdr::Operation, operation::Error> {
        //
        let trustor = xdr::AccountId::from_str(account)
            .map_err(|_| operation::Error::InvalidField("account".into()))?;

        let body = xdr::OperationBody::SetTrustLineFlags(xdr::SetTrustLineFlagsOp {
            trustor,
            asset: asset.to_xdr_object(),
            clear_flags,
            set_flags,
        });
        Ok(xdr::Operation {
            source_account: self.source.clone(),
            body,
        })
    }
}
