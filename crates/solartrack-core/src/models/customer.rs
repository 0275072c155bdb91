//! Customer aggregate and input document parsing.

use std::io::Read;

use serde::{Deserialize, Serialize};

use super::Task;
use crate::error::Result;

/// A customer together with every task created for them.
///
/// Attribute values are kept as the free-form strings the remote API returns
/// ("Finance", "Yes", "Required", ...). Conditional rules compare them
/// literally.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Customer {
    /// Identifier assigned by the remote API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    /// "Cash", "Finance", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,

    /// "Yes" when a finance arrangement is needed despite the payment mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_finance_required: Option<String>,

    /// "Required" when a change of tenancy must be filed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cot_required: Option<String>,

    /// "Required" when the name on the electricity connection must be corrected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_correction_required: Option<String>,

    /// "Required" when the sanctioned load must be enhanced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_enhancement_required: Option<String>,

    /// Tasks in no particular order, possibly sparse
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Customer {
    /// Creates a customer with only a display name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Case-sensitive comparison of an optional attribute against a literal.
    pub(crate) fn attribute_is(value: Option<&String>, expected: &str) -> bool {
        value.map(String::as_str) == Some(expected)
    }
}

/// Input document: a single customer object or an array of customers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum CustomerDocument {
    Many(Vec<Customer>),
    One(Box<Customer>),
}

impl CustomerDocument {
    /// Parses a document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Serialization` if the JSON does not describe a
    /// customer or a list of customers.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a document from any reader.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Serialization` on read or parse failure.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Flattens the document into a list of customers, preserving order.
    pub fn into_customers(self) -> Vec<Customer> {
        match self {
            CustomerDocument::One(customer) => vec![*customer],
            CustomerDocument::Many(customers) => customers,
        }
    }
}
