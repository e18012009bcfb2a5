use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How an attribute's options are drawn: a colour patch or a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Swatch,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    /// Canonical identity, used for equality and selection.
    pub value: String,
    /// Presentation only.
    pub display_value: String,
}

impl AttributeValue {
    pub fn new(value: impl Into<String>, display_value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display_value: display_value.into(),
        }
    }
}

/// One selectable attribute of a product (e.g. "Size" with S/M/L).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AttributeKind,
    #[serde(default)]
    pub values: Vec<AttributeValue>,
}

impl AttributeDefinition {
    pub fn new(id: u32, name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            values: Vec::new(),
        }
    }

    /// Appends a value whose display text equals its identity.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.values.push(AttributeValue::new(value.clone(), value));
        self
    }

    pub fn with_display_value(
        mut self,
        value: impl Into<String>,
        display_value: impl Into<String>,
    ) -> Self {
        self.values.push(AttributeValue::new(value, display_value));
        self
    }

    pub fn first_value(&self) -> Option<&AttributeValue> {
        self.values.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedAttribute {
    pub id: u32,
    pub value: String,
}

/// Attribute name → chosen value. At most one entry per attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionMap(BTreeMap<String, SelectedAttribute>);

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entry for `name` and leaves every other entry untouched.
    pub fn merge(&mut self, id: u32, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(
            name.into(),
            SelectedAttribute {
                id,
                value: value.into(),
            },
        );
    }

    pub fn with(mut self, id: u32, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.merge(id, name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&SelectedAttribute> {
        self.0.get(name)
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|entry| entry.value.as_str())
    }

    pub fn is_selected(&self, name: &str, value: &str) -> bool {
        self.value_of(name) == Some(value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SelectedAttribute)> {
        self.0.iter()
    }
}

impl FromIterator<(String, SelectedAttribute)> for SelectionMap {
    fn from_iter<T: IntoIterator<Item = (String, SelectedAttribute)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
    pub currency_label: String,
    pub currency_symbol: String,
}

impl Default for Price {
    fn default() -> Self {
        Self {
            amount: 0.0,
            currency_label: "USD".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeDefinition>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub description: String,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            price: Price::default(),
            gallery: Vec::new(),
            attributes: Vec::new(),
            in_stock: true,
            description: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeDefinition) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }
}
