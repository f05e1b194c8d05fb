use crate::asset::AssetBehavior;
use crate::xdr;
use crate::xdr::ReadXdr;
use std::{error::Error, str::FromStr};

#[derive(Debug, PartialEq)]
pub struct LiquidityPoolId {
    liquidity_pool_id: String,
}

// Define a trait for LiquidityPoolId behavior
pub trait LiquidityPoolIdBehavior {
    fn new(liquidity_pool_id: &str) -> Result<Self, Box<dyn Error>>
    where
        Self: Sized;
    fn from_operation(tl_asset_xdr: xdr::TrustLineAsset) -> Result<Self, &'static str>
    where
        Self: Sized;
    fn get_asset_type(&self) -> &'static str;
    fn to_xdr_object(&self) -> xdr::TrustLineAsset;
    fn get_liquidity_pool_id(&self) -> &str;
    fn equals(&self, asset: &Self) -> bool;
    fn to_string(&self) -> String;
}

impl LiquidityPoolIdBehavior for LiquidityPoolId {
    fn new(liquidity_pool_id: &str) -> Result<Self, Box<dyn Error>> {
        if liquidity_pool_id.is_empty() {
            return Err("liquidityPoolId cannot be empty".into());
        }

        if liquidity_pool_id.len() != 64
            || !liquidity_pool_id.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err("Liquidity pool ID is not a valid hash".into());
        }

        Ok(Self {
            liquidity_pool_id: liquidity_pool_id.to_string(),
        })
    }

    fn from_operation(tl_asset_xdr: xdr::TrustLineAsset) -> Result<Self, &'static str> {
        match tl_asset_xdr {
            xdr::TrustLineAsset::PoolShare(x) => {
                let liquidity_pool_id = x.0.to_string();
                Ok(Self { liquidity_pool_id })
            }

            _ => panic!("Invalid type"),
        }
    }

    fn get_asset_type(&self) -> &'static str {
        "liquidity_pool_shares"
    }

    fn to_xdr_object(&self) -> xdr::TrustLineAsset {
        let val = xdr::Hash::from_str(&self.liquidity_pool_id).unwrap();
        xdr::TrustLineAsset::PoolShare(xdr::PoolId(val))
    }

    fn get_liquidity_pool_id(&self) -> &str {
        &self.liquidity_pool_id
    }

    fn equals(&self, asset: &LiquidityPoolId) -> bool {
        self.liquidity_pool_id == asset.get_liquidity_pool_id()
    }

    fn to_string(&self) -> String {
        format!("liquidity_pool:{}", self.liquidity_pool_id)
    }
}
