//! The node API encodes u64 and u128 values as JSON strings, and Move `Option<T>` values as an
//! object holding a vector of zero or one elements, `{ "vec": ["10"] }`.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub fn from_u128_string<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    let s: &str = Deserialize::deserialize(deserializer)?;
    s.parse::<u128>().map_err(|error| {
        de::Error::invalid_value(
            de::Unexpected::Str(&format!("unexpected value: {s}, error: {error}")),
            &"a number as string e.g. \"118908973575220938641041929\", which fits within u128",
        )
    })
}

pub fn to_u128_string<S>(num_u128: &u128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&num_u128.to_string())
}

pub fn from_u64_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let s: &str = Deserialize::deserialize(deserializer)?;
    s.parse::<u64>().map_err(|error| {
        de::Error::invalid_value(
            de::Unexpected::Str(&format!("unexpected value: {s}, error: {error}")),
            &"a number as string e.g. \"1675362310\", which fits within u64",
        )
    })
}

pub fn to_u64_string<S>(num_u64: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&num_u64.to_string())
}

#[derive(Deserialize, Serialize)]
struct MoveOption<T> {
    vec: Vec<T>,
}

pub fn from_move_option_u128_string<'de, D>(deserializer: D) -> Result<Option<u128>, D::Error>
where
    D: Deserializer<'de>,
{
    let option: MoveOption<String> = Deserialize::deserialize(deserializer)?;
    match option.vec.as_slice() {
        [] => Ok(None),
        [s] => s.parse::<u128>().map(Some).map_err(|error| {
            de::Error::invalid_value(
                de::Unexpected::Str(&format!("unexpected value: {s}, error: {error}")),
                &"a number as string, which fits within u128",
            )
        }),
        _ => Err(de::Error::invalid_length(
            option.vec.len(),
            &"a move option holding at most one element",
        )),
    }
}

pub fn to_move_option_u128_string<S>(
    option_u128: &Option<u128>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    MoveOption {
        vec: option_u128.iter().map(u128::to_string).collect(),
    }
    .serialize(serializer)
}
