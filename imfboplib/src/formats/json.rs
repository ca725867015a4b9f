//! JSON-массив нормализованных записей с отступом в два пробела.

use crate::{
    error::{BopError, Result},
    model::CountryYearBop,
    traits::WriteRecords,
};
use std::io::{Read, Write};

pub struct PrettyJson;

impl PrettyJson {
    /// Полная сериализация в память; при ошибке ничего не записано.
    pub fn to_vec(records: &[CountryYearBop]) -> Result<Vec<u8>> {
        // serde_json молча превращает NaN/inf в null
        if let Some(bad) = records.iter().find(|r| !r.balance_of_payments.is_finite()) {
            return Err(BopError::NonFinite {
                country: bad.country_iso_alpha3.clone(),
                year: bad.year,
            });
        }
        Ok(serde_json::to_vec_pretty(records)?)
    }

    pub fn read_records<R: Read>(r: R) -> Result<Vec<CountryYearBop>> {
        Ok(serde_json::from_reader(r)?)
    }
}

impl WriteRecords for PrettyJson {
    fn write<W: Write>(mut w: W, records: &[CountryYearBop]) -> Result<()> {
        let bytes = Self::to_vec(records)?;
        w.write_all(&bytes)?;
        Ok(())
    }
}
