//! The native XLM asset plus credit assets identified by a code and issuer.
use std::cmp::Ordering;
use std::str::FromStr;

use regex::Regex;
use stellar_strkey::ed25519::PublicKey as StrkeyPublicKey;

use crate::keypair::{Keypair, KeypairBehavior};
use crate::xdr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub code: String,
    pub issuer: Option<String>,
}

pub trait AssetBehavior {
    fn new(code: &str, issuer: Option<&str>) -> Result<Self, String>
    where
        Self: Sized;
    fn native() -> Self;
    fn get_code(&self) -> String;
    fn get_issuer(&self) -> Option<String>;
    fn get_asset_type(&self) -> &'static str;
    fn is_native(&self) -> bool;
    fn equals(&self, other: &Self) -> bool;
    fn to_xdr_object(&self) -> xdr::Asset;
    fn to_change_trust_xdr_object(&self) -> xdr::ChangeTrustAsset;
    fn to_trust_line_xdr_object(&self) -> xdr::TrustLineAsset;
    fn from_operation(asset_xdr: xdr::Asset) -> Result<Self, String>
    where
        Self: Sized;
    fn compare(a: &Self, b: &Self) -> i32;
    fn to_string(&self) -> String;
}

impl Asset {
    fn ascii_compare(a: &str, b: &str) -> Ordering {
        a.to_ascii_uppercase()
            .as_bytes()
            .cmp(b.to_ascii_uppercase().as_bytes())
    }
}

impl AssetBehavior for Asset {
    fn new(code: &str, issuer: Option<&str>) -> Result<Self, String> {
        if !Regex::new(r"^[a-zA-Z0-9]{1,12}$").unwrap().is_match(code) {
            return Err(
                "Asset code is invalid (maximum alphanumeric, 12 characters at max)".to_string(),
            );
        }
        if code.to_lowercase() != "xlm" && issuer.is_none() {
            return Err("Issuer cannot be null".to_string());
        }
        if let Some(issuer) = issuer {
            if StrkeyPublicKey::from_string(issuer).is_err() {
                return Err("Not a valid ed25519 public key".to_string());
            }
        }

        let code = if code.to_lowercase() == "xlm" {
            "XLM".to_string()
        } else {
            code.to_string()
        };

        Ok(Self {
            code,
            issuer: issuer.map(String::from),
        })
    }

    fn native() -> Self {
        Self {
            code: "XLM".to_string(),
            issuer: None,
        }
    }

    fn get_code(&self) -> String {
        self.code.clone()
    }

    fn get_issuer(&self) -> Option<String> {
        self.issuer.clone()
    }

    fn get_asset_type(&self) -> &'static str {
        if self.is_native() {
            "native"
        } else if self.code.len() <= 4 {
            "credit_alphanum4"
        } else {
            "credit_alphanum12"
        }
    }

    fn is_native(&self) -> bool {
        self.issuer.is_none()
    }

    fn equals(&self, other: &Self) -> bool {
        self.code == other.code && self.issuer == other.issuer
    }

    fn to_xdr_object(&self) -> xdr::Asset {
        if self.is_native() {
            return xdr::Asset::Native;
        }

        let issuer = Keypair::from_public_key(self.issuer.as_ref().unwrap())
            .unwrap()
            .xdr_account_id();

        if self.code.len() <= 4 {
            let mut code_bytes = [0u8; 4];
            code_bytes[..self.code.len()].copy_from_slice(self.code.as_bytes());
            xdr::Asset::CreditAlphanum4(xdr::AlphaNum4 {
                asset_code: xdr::AssetCode4(code_bytes),
                issuer,
            })
        } else {
            let mut code_bytes = [0u8; 12];
            code_bytes[..self.code.len()].copy_from_slice(self.code.as_bytes());
            xdr::Asset::CreditAlphanum12(xdr::AlphaNum12 {
                asset_code: xdr::AssetCode12(code_bytes),
                issuer,
            })
        }
    }

    fn to_change_trust_xdr_object(&self) -> xdr::ChangeTrustAsset {
        match self.to_xdr_object() {
            xdr::Asset::Native => xdr::ChangeTrustAsset::Native,
            xdr::Asset::CreditAlphanum4(a) => xdr::ChangeTrustAsset::CreditAlphanum4(a),
            xdr::Asset::CreditAlphanum12(a) => xdr::ChangeTrustAsset::CreditAlphanum12(a),
        }
    }

    fn to_trust_line_xdr_object(&self) -> xdr::TrustLineAsset {
        match self.to_xdr_object() {
            xdr::Asset::Native => xdr::TrustLineAsset::Native,
            xdr::Asset::CreditAlphanum4(a) => xdr::TrustLineAsset::CreditAlphanum4(a),
            xdr::Asset::CreditAlphanum12(a) => xdr::TrustLineAsset::CreditAlphanum12(a),
        }
    }

    fn from_operation(asset_xdr: xdr::Asset) -> Result<Self, String> {
        match asset_xdr {
            xdr::Asset::Native => Ok(Self::native()),
            xdr::Asset::CreditAlphanum4(a) => {
                let code = String::from_utf8_lossy(&a.asset_code.0)
                    .trim_end_matches('\0')
                    .to_string();
                let issuer = a.issuer.to_string();
                Self::new(&code, Some(&issuer))
            }
            xdr::Asset::CreditAlphanum12(a) => {
                let code = String::from_utf8_lossy(&a.asset_code.0)
                    .trim_end_matches('\0')
                    .to_string();
                let issuer = a.issuer.to_string();
                Self::new(&code, Some(&issuer))
            }
        }
    }

    /// Mirrors Stellar's asset ordering: type, then code, then issuer.
    fn compare(a: &Self, b: &Self) -> i32 {
        if a.equals(b) {
            return 0;
        }

        let type_rank = |asset: &Self| -> u8 {
            match asset.get_asset_type() {
                "native" => 0,
                "credit_alphanum4" => 1,
                _ => 2,
            }
        };

        let (rank_a, rank_b) = (type_rank(a), type_rank(b));
        if rank_a != rank_b {
            return if rank_a < rank_b { -1 } else { 1 };
        }

        match Self::ascii_compare(&a.code, &b.code) {
            Ordering::Less => return -1,
            Ordering::Greater => return 1,
            Ordering::Equal => {}
        }

        match (&a.issuer, &b.issuer) {
            (Some(ia), Some(ib)) => match ia.cmp(ib) {
                Ordering::Less => -1,
                Ordering::Greater => 1,
                Ordering::Equal => 0,
            },
            _ => 0,
        }
    }

    fn to_string(&self) -> String {
        if self.is_native() {
            "native".to_string()
        } else {
            format!("{}:{}", self.code, self.issuer.as_ref().unwrap())
        }
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", AssetBehavior::to_string(self))
    }
}

impl PartialOrd for Asset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Asset {
    fn cmp(&self, other: &Self) -> Ordering {
        match Self::compare(self, other) {
            n if n < 0 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    }
}
