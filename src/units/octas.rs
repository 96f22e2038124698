use std::{
    fmt,
    num::ParseIntError,
    ops::{Add, Sub},
    str::FromStr,
};

use serde::{de, de::Visitor, Deserialize, Serialize};

use super::{APT_DECIMALS, OCTAS_PER_APT};
use crate::balance::format_balance;

// Can handle at most 1.84e19 octas, ~184 billion APT, well above the total supply. The indexer
// hands these out as JSON numbers, the node REST API as strings, we accept both. When serializing
// we always write a string, JSON consumers lose precision past 2^53.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct OctaNewtype(pub u64);

impl OctaNewtype {
    pub const ZERO: Self = Self(0);

    /// Saturates at `u64::MAX` octas rather than overflowing.
    pub fn from_apt(apt: u64) -> Self {
        Self(apt.saturating_mul(OCTAS_PER_APT))
    }

    pub fn saturating_add(self, OctaNewtype(rhs): Self) -> Self {
        Self(self.0.saturating_add(rhs))
    }

    pub fn saturating_sub(self, OctaNewtype(rhs): Self) -> Self {
        Self(self.0.saturating_sub(rhs))
    }

    /// Formats the amount as APT, e.g. `150000000` becomes `1.5`.
    pub fn to_apt_string(&self) -> String {
        // Any u64 renders as a plain digit string, formatting can't fail.
        format_balance(&self.0.to_string(), APT_DECIMALS, None).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for OctaNewtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<OctaNewtype> for OctaNewtype {
    type Output = Self;

    fn add(self, OctaNewtype(rhs): Self) -> Self::Output {
        let OctaNewtype(lhs) = self;
        let result = lhs
            .checked_add(rhs)
            .expect("caused overflow in octa addition");
        OctaNewtype(result)
    }
}

impl Sub<OctaNewtype> for OctaNewtype {
    type Output = Self;

    fn sub(self, OctaNewtype(rhs): OctaNewtype) -> Self::Output {
        let OctaNewtype(lhs) = self;
        let result = lhs
            .checked_sub(rhs)
            .expect("caused underflow in octa subtraction");
        OctaNewtype(result)
    }
}

impl From<u64> for OctaNewtype {
    fn from(amount: u64) -> Self {
        OctaNewtype(amount)
    }
}

impl From<OctaNewtype> for u64 {
    fn from(OctaNewtype(amount): OctaNewtype) -> Self {
        amount
    }
}

impl From<OctaNewtype> for String {
    fn from(OctaNewtype(amount): OctaNewtype) -> Self {
        amount.to_string()
    }
}

impl FromStr for OctaNewtype {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(OctaNewtype)
    }
}

struct OctaAmountVisitor;

impl Visitor<'_> for OctaAmountVisitor {
    type Value = OctaNewtype;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "a number, or string of number, smaller than u64::MAX representing an amount in octas",
        )
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse::<u64>().map(OctaNewtype).map_err(|error| {
            de::Error::invalid_value(
                de::Unexpected::Str(&format!("unexpected value: {v}, error: {error}")),
                &"a number as string: \"150000000\", which fits within u64",
            )
        })
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v)
            .map(OctaNewtype)
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(OctaNewtype(v))
    }
}

impl<'de> Deserialize<'de> for OctaNewtype {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(OctaAmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octa_add_test() {
        assert_eq!(OctaNewtype(1) + OctaNewtype(1), OctaNewtype(2));
    }

    #[test]
    fn octa_sub_test() {
        assert_eq!(OctaNewtype(1) - OctaNewtype(1), OctaNewtype(0));
    }

    #[test]
    fn octa_saturating_sub_test() {
        assert_eq!(OctaNewtype(1).saturating_sub(OctaNewtype(5)), OctaNewtype::ZERO);
    }

    #[test]
    fn octa_from_apt_test() {
        assert_eq!(OctaNewtype::from_apt(1), OctaNewtype(OCTAS_PER_APT));
    }

    #[test]
    fn octa_from_apt_saturates_test() {
        assert_eq!(OctaNewtype::from_apt(u64::MAX / 10), OctaNewtype(u64::MAX));
    }

    #[test]
    fn octa_to_apt_string_test() {
        assert_eq!(OctaNewtype(150_000_000).to_apt_string(), "1.5");
        assert_eq!(OctaNewtype(123_456_700_000_000).to_apt_string(), "1,234,567");
    }

    #[test]
    fn deserialize_octas_from_number_and_string_test() {
        let from_number = serde_json::from_str::<OctaNewtype>("100").unwrap();
        let from_string = serde_json::from_str::<OctaNewtype>("\"100\"").unwrap();
        assert_eq!(from_number, OctaNewtype(100));
        assert_eq!(from_string, OctaNewtype(100));
    }

    #[test]
    fn deserialize_negative_octas_fails_test() {
        assert!(serde_json::from_str::<OctaNewtype>("-1").is_err());
    }

    #[test]
    fn serialize_octas_as_string_test() {
        let json = serde_json::to_string(&OctaNewtype(42)).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
