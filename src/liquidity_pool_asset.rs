use crate::asset::Asset;
use crate::asset::AssetBehavior;
use crate::get_liquidity_pool::LiquidityPool;
use crate::get_liquidity_pool::LiquidityPoolBehavior;
use crate::xdr;
const LIQUIDITY_POOL_FEE_V18: i32 = 30;
#[derive(Debug)]
pub struct LiquidityPoolAsset {
    asset_a: Asset,
    asset_b: Asset,
    fee: i32,
}

// TODO: fix that
impl From<&LiquidityPoolAsset> for xdr::TrustLineAsset {
    fn from(value: &LiquidityPoolAsset) -> Self {
        let pool_id = LiquidityPool::get_liquidity_pool_id(
            "constant_product",
            value.get_liquidity_pool_parameters().clone(),
        )
        .unwrap();
        xdr::TrustLineAsset::PoolShare(xdr::PoolId(xdr::Hash(*pool_id.last_chunk::<32>().unwrap())))
    }
}
// TODO: fix that
impl From<LiquidityPoolAsset> for xdr::TrustLineAsset {
    fn from(value: LiquidityPoolAsset) -> Self {
        let pool_id = LiquidityPool::get_liquidity_pool_id(
            "constant_product",
            value.get_liquidity_pool_parameters().clone(),
        )
        .unwrap();
        xdr::TrustLineAsset::PoolShare(xdr::PoolId(xdr::Hash(*pool_id.last_chunk::<32>().unwrap())))
    }
}

// Define a trait for LiquidityPoolAsset behavior
pub trait LiquidityPoolAssetBehavior {
    fn new(asset_a: Asset, asset_b: Asset, fee: i32) -> Result<Self, &'static str>
    where
        Self: Sized;
    fn from_operation(ct_asset_xdr: &xdr::ChangeTrustAsset) -> Result<Self, String>
    where
        Self: Sized;
    fn to_xdr_object(&self) -> xdr::ChangeTrustAsset;
    fn get_liquidity_pool_parameters(&self) -> xdr::LiquidityPoolParameters;
    fn equals(&self, other: &Self) -> bool;
    fn get_asset_type(&self) -> &'static str;
    fn to_string(&self) -> String;
}

impl LiquidityPoolAssetBehavior for LiquidityPoolAsset {
    fn new(asset_a: Asset, asset_b: Asset, fee: i32) -> Result<Self, &'static str> {
        if Asset::compare(&asset_a, &asset_b) != -1 {
            return Err("Assets are not in lexicographic order");
        }
        if fee != LIQUIDITY_POOL_FEE_V18 {
            return Err("fee is invalid");
        }

        Ok(LiquidityPoolAsset {
            asset_a,
            asset_b,
            fee,
        })
    }

    fn from_operation(ct_asset_xdr: &xdr::ChangeTrustAsset) -> Result<LiquidityPoolAsset, String> {
        match ct_asset_xdr {
            xdr::ChangeTrustAsset::PoolShare(x) => {
                let xdr::LiquidityPoolParameters::LiquidityPoolConstantProduct(val) = x;

                let asset_a = Asset::from_operation(val.asset_a.clone()).unwrap();
                let asset_b = Asset::from_operation(val.asset_b.clone()).unwrap();
                let fee = val.fee;
                Ok(LiquidityPoolAsset::new(asset_a, asset_b, fee)?)
            }

            _ => Err("Invalid asset type".to_string()),
        }
    }

    fn to_xdr_object(&self) -> xdr::ChangeTrustAsset {
        let lp_constant_product_params_xdr = xdr::LiquidityPoolConstantProductParameters {
            asset_a: self.asset_a.to_xdr_object(),
            asset_b: self.asset_b.to_xdr_object(),
            fee: self.fee,
        };

        let lp_params_xdr = xdr::LiquidityPoolParameters::LiquidityPoolConstantProduct(
            lp_constant_product_params_xdr,
        );
        xdr::ChangeTrustAsset::PoolShare(lp_params_xdr)
    }

    fn get_liquidity_pool_parameters(&self) -> xdr::LiquidityPoolParameters {
        let lp_constant_product_params_xdr = xdr::LiquidityPoolConstantProductParameters {
            asset_a: self.asset_a.to_xdr_object(),
            asset_b: self.asset_b.to_xdr_object(),
            fee: self.fee,
        };

        xdr::LiquidityPoolParameters::LiquidityPoolConstantProduct(lp_constant_product_params_xdr)
    }

    fn equals(&self, other: &LiquidityPoolAsset) -> bool {
        self.asset_a == other.asset_a && self.asset_b == other.asset_b && self.fee == other.fee
    }

    fn get_asset_type(&self) -> &'static str {
        "liquidity_pool_shares"
    }

    fn to_string(&self) -> String {
        let pool_id = LiquidityPool::get_liquidity_pool_id(
            "constant_product",
            self.get_liquidity_pool_parameters().clone(),
        )
        .unwrap();
        format!("liquidity_pool:{}", hex::encode(pool_id))
    }
}
