//! Injected wallet capability used for donations.
//!
//! The wallet and the contract behind it are external; this module only
//! describes the calls made through them.

use crate::errors::CivicError;

use anyhow::anyhow;
use async_trait::async_trait;
use decimal_rs::Decimal;
use std::fmt;
use std::str::FromStr;

pub const DONATION_CONTRACT_ADDRESS: &str = "0x4Abc6CFe0EA35AaA8576E67e301fBc76006387b2";

const ETHER_DECIMALS: i32 = 18;

/// A 20-byte account or contract address in `0x`-prefixed hex.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {

    pub fn parse(s: &str) -> Result<Self, CivicError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| CivicError::ConfigurationError(anyhow!("Address {s} is missing the 0x prefix")))?;

        let bytes = hex::decode(digits)
            .map_err(|e| CivicError::ConfigurationError(anyhow!("Address {s} is not valid hex: {e}")))?;

        if bytes.len() != 20 {
            return Err(CivicError::ConfigurationError(
                anyhow!("Address {s} has {} bytes, expected 20", bytes.len())
            ));
        }

        Ok(Address(format!("0x{digits}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = CivicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

/// A payable contract function call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractCall {
    pub from: Address,
    pub contract: Address,
    pub function_name: String,
    pub args: Vec<String>,
    pub value_wei: u128,
}

#[async_trait]
pub trait Wallet: Send + Sync {
    /// Asks the user to expose their accounts. The first one is the active account.
    async fn request_accounts(&self) -> Result<Vec<Address>, CivicError>;

    async fn contract_call(&self, call: ContractCall) -> Result<serde_json::Value, CivicError>;
}

/// Converts a decimal ether amount such as `"0.05"` into wei.
pub fn ether_to_wei(amount: &str) -> Result<u128, CivicError> {
    let invalid = |reason: &str| CivicError::ConfigurationError(anyhow!("Invalid ether amount {amount:?}: {reason}"));

    let decimal = Decimal::from_str(amount.trim())
        .map_err(|e| invalid(&format!("{e:?}")))?;

    let (significand, scale, negative) = decimal.into_parts();
    if significand == 0 {
        return Ok(0);
    }
    if negative {
        return Err(invalid("amount is negative"));
    }

    let shift = ETHER_DECIMALS - i32::from(scale);
    let factor = |exp: i32| {
        10u128
            .checked_pow(exp.unsigned_abs())
            .ok_or_else(|| invalid("amount is out of range"))
    };

    if shift >= 0 {
        significand
            .checked_mul(factor(shift)?)
            .ok_or_else(|| invalid("amount is out of range"))
    }
    else {
        let divisor = factor(shift)?;
        if significand % divisor != 0 {
            return Err(invalid("amount is more precise than one wei"));
        }
        Ok(significand / divisor)
    }
}
