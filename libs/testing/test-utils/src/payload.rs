use serde_json::{Map, Value, json};

/// Builder for `{"data": {"type": "products", "attributes": {...}}}` bodies.
///
/// The named constructors cover the usual fixtures; `name`, `price` and
/// `without` adjust them further.
///
/// ```
/// use test_utils::ProductPayload;
///
/// let body = ProductPayload::subzero_price().build();
/// assert_eq!(body["data"]["attributes"]["price"], -2);
/// ```
#[derive(Debug, Clone)]
pub struct ProductPayload {
    attributes: Map<String, Value>,
}

impl ProductPayload {
    pub fn empty() -> Self {
        Self {
            attributes: Map::new(),
        }
    }

    /// The canonical valid product: "Huevito Kinder" at 9.30.
    pub fn valid() -> Self {
        Self::empty().name("Huevito Kinder").price(9.30)
    }

    pub fn without_name() -> Self {
        Self::valid().without("name")
    }

    pub fn without_price() -> Self {
        Self::valid().without("price")
    }

    pub fn non_numeric_price() -> Self {
        Self::valid().price("Dolar")
    }

    pub fn subzero_price() -> Self {
        Self::valid().price(-2)
    }

    /// Only a price, as used for partial updates.
    pub fn price_only(price: impl Into<Value>) -> Self {
        Self::empty().price(price)
    }

    pub fn name(self, name: impl Into<Value>) -> Self {
        self.attribute("name", name)
    }

    pub fn price(self, price: impl Into<Value>) -> Self {
        self.attribute("price", price)
    }

    pub fn attribute(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.attributes.remove(key);
        self
    }

    pub fn build(self) -> Value {
        json!({
            "data": {
                "type": "products",
                "attributes": Value::Object(self.attributes),
            }
        })
    }
}
