//! Унифицированные трэйты чтения/записи на основе std::io::{BufRead, Write}.

use crate::{
    error::Result,
    model::{CountryYearBop, Dataset},
};
use std::io::{BufRead, Write};

pub trait ReadDataset {
    fn read<R: BufRead>(r: R) -> Result<Dataset>;
}

pub trait WriteRecords {
    fn write<W: Write>(w: W, records: &[CountryYearBop]) -> Result<()>;
}
