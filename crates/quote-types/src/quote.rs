//! Quote types

use serde::{Deserialize, Deserializer, Serialize};

/// A stored quote
///
/// Missing or `null` fields decode to their defaults, so `{"text":"hi"}` is a
/// valid quote with `id == 0` and an empty author. Remote rows may carry
/// nullable columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Quote {
    pub fn new(id: i64, text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Write payload for the remote store; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    pub text: String,
    pub author: String,
}

impl From<&Quote> for NewQuote {
    fn from(quote: &Quote) -> Self {
        Self {
            text: quote.text.clone(),
            author: quote.author.clone(),
        }
    }
}

/// Body of `GET /api/quote`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomQuote {
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}
