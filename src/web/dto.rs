//! Wire types for the HTTP endpoints.

use serde::{Deserialize, Deserializer, Serialize, de};

/// Request body shared by all three endpoints.
///
/// A missing operand reads as `0`. Operands may be JSON numbers or numeric
/// strings (`"2"`), and the field names are also accepted in PascalCase or
/// all lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwoNumbersRequest {
    /// Left-hand operand.
    #[serde(
        alias = "FirstNumber",
        alias = "firstnumber",
        deserialize_with = "int_or_string"
    )]
    pub first_number: i32,
    /// Right-hand operand.
    #[serde(
        alias = "SecondNumber",
        alias = "secondnumber",
        deserialize_with = "int_or_string"
    )]
    pub second_number: i32,
}

/// Response body carrying a single result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorResponse {
    /// Result of the operation.
    pub result: i32,
}

fn int_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i32),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => Ok(n),
        IntOrString::Str(s) => s
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid integer: {s:?}"))),
    }
}
