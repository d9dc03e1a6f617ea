use std::collections::HashMap;
use std::fmt;

/// Column separator of the data file.
pub const FIELD_DELIMITER: &str = ",";

/// The seven inputs of the registration form, in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Barcode,
    Name,
    Category,
    Price,
    Quantity,
    Manufacturer,
    Description,
}

impl Field {
    /// Every field, in the order they are prompted and written to the data file.
    pub const ALL: [Field; 7] = [
        Field::Barcode,
        Field::Name,
        Field::Category,
        Field::Price,
        Field::Quantity,
        Field::Manufacturer,
        Field::Description,
    ];

    /// Key used when a form arrives as a name → value mapping.
    pub fn key(self) -> &'static str {
        match self {
            Field::Barcode => "barcode",
            Field::Name => "name",
            Field::Category => "category",
            Field::Price => "price",
            Field::Quantity => "quantity",
            Field::Manufacturer => "manufacturer",
            Field::Description => "description",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Barcode => "Código de Barras:",
            Field::Name => "Nome:",
            Field::Category => "Tipo:",
            Field::Price => "Preço:",
            Field::Quantity => "Quantidade:",
            Field::Manufacturer => "Fabricante:",
            Field::Description => "Descrição:",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw, unvalidated form input.
///
/// Every value is kept exactly as typed. Turning it into a [`Product`] is the
/// job of [`crate::builder::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub barcode: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    pub manufacturer: String,
    pub description: String,
}

impl ProductForm {
    /// Assembles a form from a field-name → value mapping.
    ///
    /// Missing keys are treated as empty input; unknown keys are ignored.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let mut form = Self::default();
        for field in Field::ALL {
            if let Some(value) = fields.get(field.key()) {
                form.set(field, value.clone());
            }
        }
        form
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Barcode => &self.barcode,
            Field::Name => &self.name,
            Field::Category => &self.category,
            Field::Price => &self.price,
            Field::Quantity => &self.quantity,
            Field::Manufacturer => &self.manufacturer,
            Field::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Barcode => &mut self.barcode,
            Field::Name => &mut self.name,
            Field::Category => &mut self.category,
            Field::Price => &mut self.price,
            Field::Quantity => &mut self.quantity,
            Field::Manufacturer => &mut self.manufacturer,
            Field::Description => &mut self.description,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`ProductForm::set`].
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

/// A validated catalog item.
///
/// Only [`crate::builder::build`] produces these from user input, so a
/// `Product` always carries a parsed price and quantity. It is written to the
/// data file once and then dropped; nothing keeps products in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    barcode: String,
    name: String,
    category: String,
    price: f64,
    quantity: i32,
    manufacturer: String,
    description: String,
}

impl Product {
    pub fn new(
        barcode: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i32,
        manufacturer: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            barcode: barcode.into(),
            name: name.into(),
            category: category.into(),
            price,
            quantity,
            manufacturer: manufacturer.into(),
            description: description.into(),
        }
    }

    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The seven columns as they appear in the data file.
    pub fn to_record(&self) -> [String; 7] {
        [
            self.barcode.clone(),
            self.name.clone(),
            self.category.clone(),
            render_price(self.price),
            self.quantity.to_string(),
            self.manufacturer.clone(),
            self.description.clone(),
        ]
    }
}

/// Renders one data-file line (without the newline). Delimiters inside text
/// fields are written as-is.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_record().join(FIELD_DELIMITER))
    }
}

// Plain positional notation, never an exponent. Whole prices keep a
// trailing ".0"; fractional ones use the shortest round-tripping digits.
fn render_price(price: f64) -> String {
    let mut rendered = price.to_string();
    if price.is_finite() && !rendered.contains('.') {
        rendered.push_str(".0");
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soap() -> Product {
        Product::new("123", "Soap", "Hygiene", 2.5, 10, "Acme", "bar soap")
    }

    #[test]
    fn test_display_joins_fields_in_record_order() {
        assert_eq!(soap().to_string(), "123,Soap,Hygiene,2.5,10,Acme,bar soap");
    }

    #[test]
    fn test_whole_price_keeps_decimal_point() {
        let product = Product::new("1", "Rice", "Food", 10.0, -3, "", "");
        assert_eq!(product.to_string(), "1,Rice,Food,10.0,-3,,");
    }

    #[test]
    fn test_extreme_prices_never_use_exponent() {
        assert_eq!(render_price(1e16), "10000000000000000.0");
        assert_eq!(render_price(1e20), "100000000000000000000.0");
        assert_eq!(render_price(0.00001), "0.00001");
        assert_eq!(render_price(12345678.0), "12345678.0");
        assert_eq!(render_price(-0.5), "-0.5");

        let product = Product::new("9", "Gold", "Metal", 1e16, 1, "", "");
        assert_eq!(product.to_record()[3], "10000000000000000.0");
    }

    #[test]
    fn test_from_fields_defaults_missing_keys_to_empty() {
        let mut raw = HashMap::new();
        raw.insert("barcode".to_string(), "789".to_string());
        raw.insert("price".to_string(), "1.5".to_string());
        raw.insert("colour".to_string(), "red".to_string());

        let form = ProductForm::from_fields(&raw);

        assert_eq!(form.get(Field::Barcode), "789");
        assert_eq!(form.get(Field::Price), "1.5");
        assert_eq!(form.get(Field::Name), "");
        assert_eq!(form.get(Field::Description), "");
    }

    #[test]
    fn test_set_and_get_cover_every_field() {
        let mut form = ProductForm::default();
        for (i, field) in Field::ALL.into_iter().enumerate() {
            form.set(field, format!("v{i}"));
        }
        for (i, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(form.get(field), format!("v{i}"));
        }
    }
}
