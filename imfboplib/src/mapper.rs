//! Проекция сырой записи выгрузки в `CountryYearBop`.

use crate::{
    error::{BopError, Result},
    model::{CountryYearBop, Dataset, FieldRole, Record, NET_TRADE_TOPIC},
};
use tracing::{debug, warn};

/// Что делать с записью чужой темы.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Прервать весь прогон.
    #[default]
    Abort,
    /// Пропустить запись и продолжить.
    Skip,
}

/// Поля обрабатываются в порядке документа, побеждает последнее значение.
pub fn map_record(rec: &Record) -> Result<CountryYearBop> {
    let mut bop = CountryYearBop::default();
    for field in &rec.fields {
        match &field.role {
            FieldRole::Item => {
                if field.value != NET_TRADE_TOPIC {
                    return Err(BopError::TopicMismatch {
                        found: field.value.clone(),
                    });
                }
                bop.imf_reference = field.key.clone();
            }
            FieldRole::CountryOrArea => {
                bop.country_or_area_name = field.value.clone();
                bop.country_iso_alpha3 = field.key.clone();
            }
            FieldRole::Year => {
                let year: i64 = field
                    .value
                    .parse()
                    .map_err(|e| BopError::Parse(format!("year {:?}: {e}", field.value)))?;
                // переполнение i16 не исправляем, усекаем как есть
                bop.year = year as i16;
            }
            FieldRole::Value => {
                if field.value.is_empty() {
                    bop.balance_of_payments_known = false;
                } else {
                    bop.balance_of_payments = field
                        .value
                        .parse()
                        .map_err(|e| BopError::Parse(format!("value {:?}: {e}", field.value)))?;
                    bop.balance_of_payments_known = true;
                }
            }
            FieldRole::Unrecognized(_) => {}
        }
    }
    Ok(bop)
}

/// Возвращает записи и число пропущенных (только при `Skip`).
pub fn map_dataset(ds: &Dataset, policy: MismatchPolicy) -> Result<(Vec<CountryYearBop>, usize)> {
    let mut out = Vec::with_capacity(ds.records().len());
    let mut skipped = 0;
    for (idx, rec) in ds.records().iter().enumerate() {
        match map_record(rec) {
            Ok(bop) => {
                debug!(
                    idx,
                    country = %bop.country_iso_alpha3,
                    year = bop.year,
                    reference = %bop.imf_reference,
                    "record mapped"
                );
                out.push(bop);
            }
            Err(BopError::TopicMismatch { found }) if policy == MismatchPolicy::Skip => {
                warn!(idx, topic = %found, "skipping off-topic record");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok((out, skipped))
}
