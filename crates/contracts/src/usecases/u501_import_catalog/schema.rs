use crate::domain::a001_rug::{CanonicalField, OrderIdRule, RugRecord};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::{Deserialize, Serialize as DeriveSerialize};

/// Тип источника данных для импорта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DeriveSerialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// `.csv` export of the vendor master list
    DelimitedText,
    /// `.xlsx` / `.xls` / `.xlsb` / `.ods` workbook
    Spreadsheet,
}

impl SchemaKind {
    pub fn display_name(self) -> &'static str {
        match self {
            SchemaKind::DelimitedText => "CSV",
            SchemaKind::Spreadsheet => "Excel",
        }
    }

    /// Guesses the source kind from a file extension
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "csv" | "txt" => Some(SchemaKind::DelimitedText),
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Some(SchemaKind::Spreadsheet),
            _ => None,
        }
    }
}

/// Описание одной колонки источника
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Header as it appears in the source file
    pub source: &'static str,
    /// Key written to `data.json`
    pub output: &'static str,
    pub field: CanonicalField,
    pub required: bool,
}

const fn required(source: &'static str, output: &'static str, field: CanonicalField) -> ColumnSpec {
    ColumnSpec {
        source,
        output,
        field,
        required: true,
    }
}

const fn optional(source: &'static str, output: &'static str, field: CanonicalField) -> ColumnSpec {
    ColumnSpec {
        source,
        output,
        field,
        required: false,
    }
}

/// Схема источника: набор колонок, маппинг и правило Order ID.
///
/// The two accepted source layouts differ only in this data; the normalizer
/// and the writer have no per-variant branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaVariant {
    pub kind: SchemaKind,
    /// Column table in output order
    pub columns: &'static [ColumnSpec],
    pub order_id: OrderIdRule,
}

pub const DELIMITED_TEXT: SchemaVariant = SchemaVariant {
    kind: SchemaKind::DelimitedText,
    columns: &[
        required("Vendor", "Vendor", CanonicalField::Vendor),
        required("Collection", "Collection Name", CanonicalField::CollectionName),
        required("Size", "Size", CanonicalField::Size),
        required("Design ID", "Design ID", CanonicalField::DesignId),
        required("Long SKU - VPN", "VPN", CanonicalField::Vpn),
        required("Primary Color", "Primary Color", CanonicalField::PrimaryColor),
        required("UPC", "UPC", CanonicalField::Upc),
        required("Retail", "Retail", CanonicalField::RetailPrice),
        optional("Product_Id", "product_id", CanonicalField::ProductId),
    ],
    order_id: OrderIdRule::PRODUCT_ID_THEN_VPN,
};

pub const SPREADSHEET: SchemaVariant = SchemaVariant {
    kind: SchemaKind::Spreadsheet,
    columns: &[
        required("Vendor", "Vendor", CanonicalField::Vendor),
        required("Collection Name", "Collection Name", CanonicalField::CollectionName),
        required("Design ID", "Design ID", CanonicalField::DesignId),
        required("Size", "Size", CanonicalField::Size),
        required("Primary Color", "Primary Color", CanonicalField::PrimaryColor),
        required("UPC", "UPC", CanonicalField::Upc),
        required("Retail Price", "Retail Price", CanonicalField::RetailPrice),
        optional("HM SKU", "HM SKU", CanonicalField::SkuOverride),
    ],
    order_id: OrderIdRule::SKU_THEN_DESIGN,
};

impl SchemaVariant {
    pub fn for_kind(kind: SchemaKind) -> &'static SchemaVariant {
        match kind {
            SchemaKind::DelimitedText => &DELIMITED_TEXT,
            SchemaKind::Spreadsheet => &SPREADSHEET,
        }
    }

    pub fn required_columns(&self) -> impl Iterator<Item = &'static ColumnSpec> {
        let columns: &'static [ColumnSpec] = self.columns;
        columns.iter().filter(|c| c.required)
    }

    pub fn optional_columns(&self) -> impl Iterator<Item = &'static ColumnSpec> {
        let columns: &'static [ColumnSpec] = self.columns;
        columns.iter().filter(|c| !c.required)
    }

    /// Required headers absent from `headers`, in schema order
    pub fn missing_required(&self, headers: &[String]) -> Vec<String> {
        missing(self.required_columns(), headers)
    }

    pub fn missing_optional(&self, headers: &[String]) -> Vec<String> {
        missing(self.optional_columns(), headers)
    }

    /// Source column of the optional identity field (`Product_Id` / `HM SKU`)
    pub fn identity_column(&self) -> Option<&'static ColumnSpec> {
        let field = self.order_id.identity_field()?;
        self.columns.iter().find(|c| c.field == field)
    }

    /// Record view that serializes with this variant's output keys
    pub fn output_record<'a>(&'a self, record: &'a RugRecord) -> OutputRecord<'a> {
        OutputRecord {
            schema: self,
            record,
        }
    }
}

fn missing<'a>(columns: impl Iterator<Item = &'a ColumnSpec>, headers: &[String]) -> Vec<String> {
    columns
        .filter(|c| !headers.iter().any(|h| h == c.source))
        .map(|c| c.source.to_string())
        .collect()
}

/// Запись в формате `data.json` конкретной схемы
pub struct OutputRecord<'a> {
    schema: &'a SchemaVariant,
    record: &'a RugRecord,
}

impl Serialize for OutputRecord<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.schema.columns.len()))?;
        for column in self.schema.columns {
            match self.record.text(column.field) {
                Some(text) => map.serialize_entry(column.output, text)?,
                None => map.serialize_entry(column.output, &self.record.retail_price)?,
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_required_columns_per_variant() {
        let csv: Vec<_> = DELIMITED_TEXT.required_columns().map(|c| c.source).collect();
        assert_eq!(
            csv,
            vec![
                "Vendor",
                "Collection",
                "Size",
                "Design ID",
                "Long SKU - VPN",
                "Primary Color",
                "UPC",
                "Retail"
            ]
        );
        let xlsx: Vec<_> = SPREADSHEET.required_columns().map(|c| c.source).collect();
        assert_eq!(xlsx.len(), 7);
        assert!(xlsx.contains(&"Retail Price"));
    }

    #[test]
    fn test_missing_columns() {
        let found = headers(&["Vendor", "Collection", "Size", "Design ID", "Primary Color", "UPC", "Retail"]);
        assert_eq!(DELIMITED_TEXT.missing_required(&found), vec!["Long SKU - VPN".to_string()]);
        assert_eq!(DELIMITED_TEXT.missing_optional(&found), vec!["Product_Id".to_string()]);
    }

    #[test]
    fn test_identity_column() {
        assert_eq!(DELIMITED_TEXT.identity_column().map(|c| c.source), Some("Product_Id"));
        assert_eq!(SPREADSHEET.identity_column().map(|c| c.source), Some("HM SKU"));
    }

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(SchemaKind::from_extension("CSV"), Some(SchemaKind::DelimitedText));
        assert_eq!(SchemaKind::from_extension("xlsx"), Some(SchemaKind::Spreadsheet));
        assert_eq!(SchemaKind::from_extension("pdf"), None);
    }

    #[test]
    fn test_output_record_keys_and_roundtrip() {
        let record = RugRecord {
            vendor: "Loloi".to_string(),
            collection_name: "Aurora".to_string(),
            size: "5x8".to_string(),
            design_id: "AUR-01".to_string(),
            vpn: "AUR01-5X8".to_string(),
            primary_color: "Ivory".to_string(),
            upc: "885555000001".to_string(),
            retail_price: 499.5,
            product_id: String::new(),
            sku_override: String::new(),
        };
        let json = serde_json::to_value(DELIMITED_TEXT.output_record(&record)).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 9);
        assert_eq!(object["Collection Name"], "Aurora");
        assert_eq!(object["VPN"], "AUR01-5X8");
        assert_eq!(object["Retail"], 499.5);
        assert_eq!(object["product_id"], "");

        let back: RugRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_spreadsheet_output_keeps_source_names() {
        let record = RugRecord {
            sku_override: "HM-1".to_string(),
            retail_price: 10.0,
            ..Default::default()
        };
        let json = serde_json::to_value(SPREADSHEET.output_record(&record)).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object["HM SKU"], "HM-1");
        assert_eq!(object["Retail Price"], 10.0);
        assert!(!object.contains_key("VPN"));
    }
}
