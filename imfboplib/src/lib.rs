//! imfboplib — перевод выгрузки World Bank/IMF «Net trade in goods and services» из XML в JSON

pub mod error;
pub mod model;
pub mod traits;
pub mod mapper;
pub mod convert;

pub mod formats {
    pub mod xml;
    pub mod json;
}
