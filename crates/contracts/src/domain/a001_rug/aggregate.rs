use crate::shared::money::{coerce_retail, sanitize_price};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ============================================================================
// Canonical fields
// ============================================================================

/// Поля канонической записи каталога.
///
/// Column tables of every schema variant point at these, so the normalizer and
/// the views never deal with raw column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Vendor,
    CollectionName,
    Size,
    DesignId,
    Vpn,
    PrimaryColor,
    Upc,
    RetailPrice,
    ProductId,
    SkuOverride,
}

impl CanonicalField {
    pub fn is_monetary(self) -> bool {
        matches!(self, CanonicalField::RetailPrice)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Одна строка каталога ковров после нормализации.
///
/// Deserializes documents produced by either schema variant: `Retail` and
/// `Retail Price` are the same field, and absent keys, `null` and `""` all
/// mean "no value". Serialization goes through the schema variant that wrote
/// the document (see `SchemaVariant::output_record`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RugRecord {
    #[serde(rename = "Vendor", default, deserialize_with = "lenient_text")]
    pub vendor: String,

    #[serde(rename = "Collection Name", default, deserialize_with = "lenient_text")]
    pub collection_name: String,

    #[serde(rename = "Size", default, deserialize_with = "lenient_text")]
    pub size: String,

    #[serde(rename = "Design ID", default, deserialize_with = "lenient_text")]
    pub design_id: String,

    #[serde(rename = "VPN", default, deserialize_with = "lenient_text")]
    pub vpn: String,

    #[serde(rename = "Primary Color", default, deserialize_with = "lenient_text")]
    pub primary_color: String,

    #[serde(rename = "UPC", default, deserialize_with = "lenient_text")]
    pub upc: String,

    #[serde(
        rename = "Retail",
        alias = "Retail Price",
        default,
        deserialize_with = "lenient_price"
    )]
    pub retail_price: f64,

    #[serde(rename = "product_id", default, deserialize_with = "lenient_text")]
    pub product_id: String,

    #[serde(rename = "HM SKU", default, deserialize_with = "lenient_text")]
    pub sku_override: String,
}

impl RugRecord {
    /// Текстовое значение поля; `None` для денежного поля
    pub fn text(&self, field: CanonicalField) -> Option<&str> {
        let value = match field {
            CanonicalField::Vendor => &self.vendor,
            CanonicalField::CollectionName => &self.collection_name,
            CanonicalField::Size => &self.size,
            CanonicalField::DesignId => &self.design_id,
            CanonicalField::Vpn => &self.vpn,
            CanonicalField::PrimaryColor => &self.primary_color,
            CanonicalField::Upc => &self.upc,
            CanonicalField::ProductId => &self.product_id,
            CanonicalField::SkuOverride => &self.sku_override,
            CanonicalField::RetailPrice => return None,
        };
        Some(value.as_str())
    }

    /// Writes a text value into the field. Text written into the price field
    /// goes through monetary coercion.
    pub fn set_text(&mut self, field: CanonicalField, value: String) {
        match field {
            CanonicalField::Vendor => self.vendor = value,
            CanonicalField::CollectionName => self.collection_name = value,
            CanonicalField::Size => self.size = value,
            CanonicalField::DesignId => self.design_id = value,
            CanonicalField::Vpn => self.vpn = value,
            CanonicalField::PrimaryColor => self.primary_color = value,
            CanonicalField::Upc => self.upc = value,
            CanonicalField::ProductId => self.product_id = value,
            CanonicalField::SkuOverride => self.sku_override = value,
            CanonicalField::RetailPrice => self.retail_price = coerce_retail(&value),
        }
    }

    /// True when the field holds something other than whitespace.
    /// The price field counts as filled when it is above zero.
    pub fn has_value(&self, field: CanonicalField) -> bool {
        match self.text(field) {
            Some(text) => !text.trim().is_empty(),
            None => self.retail_price > 0.0,
        }
    }
}

/// Renders a numeric cell as text without a spurious fractional part:
/// `12345.0` becomes `"12345"`, `12.5` stays `"12.5"`.
pub fn number_as_text(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.as_f64().map(number_as_text).unwrap_or_else(|| n.to_string()),
        Some(other) => other.to_string(),
    })
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().map(sanitize_price).unwrap_or(0.0),
        Some(Value::String(s)) => coerce_retail(&s),
        _ => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_delimited_text_document() {
        let json = r#"{
            "Vendor": "Loloi",
            "Collection Name": "Aurora",
            "Size": "5x8",
            "Design ID": "AUR-01",
            "VPN": "AUR01-5X8",
            "Primary Color": "Ivory",
            "UPC": "885555000001",
            "Retail": 499.5,
            "product_id": ""
        }"#;
        let record: RugRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.collection_name, "Aurora");
        assert_eq!(record.vpn, "AUR01-5X8");
        assert_eq!(record.retail_price, 499.5);
        assert_eq!(record.product_id, "");
        assert_eq!(record.sku_override, "");
    }

    #[test]
    fn test_deserialize_spreadsheet_document() {
        let json = r#"{
            "Vendor": "Surya",
            "Collection Name": "Cosmo",
            "Design ID": "CSM-2",
            "Size": "8x10",
            "Primary Color": "Blue",
            "UPC": 885555000002,
            "Retail Price": "$1,299.00",
            "HM SKU": "HM-778"
        }"#;
        let record: RugRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.upc, "885555000002");
        assert_eq!(record.retail_price, 1299.0);
        assert_eq!(record.sku_override, "HM-778");
        assert_eq!(record.vpn, "");
    }

    #[test]
    fn test_null_and_absent_are_empty() {
        let json = r#"{ "Vendor": null, "Retail": null }"#;
        let record: RugRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.vendor, "");
        assert_eq!(record.collection_name, "");
        assert_eq!(record.retail_price, 0.0);
    }

    #[test]
    fn test_set_text_coerces_price() {
        let mut record = RugRecord::default();
        record.set_text(CanonicalField::RetailPrice, "$2,000".to_string());
        record.set_text(CanonicalField::DesignId, "D-9".to_string());
        assert_eq!(record.retail_price, 2000.0);
        assert_eq!(record.text(CanonicalField::DesignId), Some("D-9"));
        assert_eq!(record.text(CanonicalField::RetailPrice), None);
    }

    #[test]
    fn test_number_as_text() {
        assert_eq!(number_as_text(12345.0), "12345");
        assert_eq!(number_as_text(12.5), "12.5");
        assert_eq!(number_as_text(0.0), "0");
    }
}
