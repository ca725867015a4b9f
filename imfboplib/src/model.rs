//! Доменные модели: сырое дерево выгрузки и нормализованная запись.

use serde::{Deserialize, Serialize};

/// Тема, которой обязана соответствовать каждая запись выгрузки.
pub const NET_TRADE_TOPIC: &str = "Net trade in goods and services (BoP, current US$)";

/// Роль поля, определяется один раз при разборе атрибута `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum FieldRole {
    Item,
    CountryOrArea,
    Year,
    Value,
    Unrecognized(String),
}

impl From<String> for FieldRole {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Item" => FieldRole::Item,
            "Country or Area" => FieldRole::CountryOrArea,
            "Year" => FieldRole::Year,
            "Value" => FieldRole::Value,
            _ => FieldRole::Unrecognized(name),
        }
    }
}

impl From<FieldRole> for String {
    fn from(role: FieldRole) -> Self {
        match role {
            FieldRole::Item => "Item".into(),
            FieldRole::CountryOrArea => "Country or Area".into(),
            FieldRole::Year => "Year".into(),
            FieldRole::Value => "Value".into(),
            FieldRole::Unrecognized(name) => name,
        }
    }
}

// В диагностический JSON дерево уходит под привычными именами.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    #[serde(rename = "Name")]
    pub role: FieldRole,
    #[serde(rename = "Key")]
    pub key: String,
    /// Текст элемента как есть, без обрезки пробелов.
    #[serde(rename = "Value")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "Fields")]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Data {
    #[serde(rename = "Records")]
    pub records: Vec<Record>,
}

/// Корень `<root>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    #[serde(rename = "Data")]
    pub data: Data,
}

impl Dataset {
    pub fn records(&self) -> &[Record] {
        &self.data.records
    }
}

/// Нормализованная запись: страна, год, сальдо.
///
/// `balance_of_payments` имеет смысл только при `balance_of_payments_known`.
/// `imf_reference` нужен для трассировки и в JSON не попадает.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryYearBop {
    #[serde(rename = "CountryOrAreaName")]
    pub country_or_area_name: String,
    #[serde(rename = "CountryISOAlpha3")]
    pub country_iso_alpha3: String,
    #[serde(rename = "Year")]
    pub year: i16,
    #[serde(rename = "BalanceOfPayments")]
    pub balance_of_payments: f64,
    #[serde(rename = "BalanceOfPaymentsKnown")]
    pub balance_of_payments_known: bool,
    #[serde(skip)]
    pub imf_reference: String,
}
