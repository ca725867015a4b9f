//! Конвейер: загрузка -> разбор -> проекция -> запись JSON.

use crate::{
    error::Result,
    formats::{json::PrettyJson, xml::WorldBankXml},
    mapper::{map_dataset, MismatchPolicy},
    model::{CountryYearBop, Dataset},
    traits::WriteRecords,
};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_INPUT: &str = "API_BN.GSR.GNFS.CD_DS2_en_xml_v2.xml";
pub const DEFAULT_OUTPUT: &str = "API_BN.GSR.GNFS.CD_DS2_en_xml_v2.json";

#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub on_mismatch: MismatchPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.into(),
            output: DEFAULT_OUTPUT.into(),
            on_mismatch: MismatchPolicy::Abort,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub records: usize,
    pub skipped: usize,
}

pub fn load(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path)?;
    info!(path = %path.display(), bytes = bytes.len(), "input loaded");
    Ok(bytes)
}

pub fn parse(bytes: &[u8]) -> Result<Dataset> {
    let ds = WorldBankXml::from_bytes(bytes)?;
    info!(records = ds.records().len(), "dataset parsed");
    Ok(ds)
}

pub fn write_output(path: &Path, records: &[CountryYearBop]) -> Result<()> {
    // сначала сериализуем целиком, чтобы ошибка не оставила полуфайл
    let mut bytes = Vec::new();
    PrettyJson::write(&mut bytes, records)?;

    fs::write(path, &bytes)?;
    // права фиксированы независимо от umask и прежнего файла
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(OUTPUT_MODE))?;
    }

    info!(path = %path.display(), records = records.len(), "output written");
    Ok(())
}

/// Печать промежуточного состояния для человека.
pub fn dump<W: Write, T: Serialize + ?Sized>(mut w: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut w, value)?;
    writeln!(w)?;
    Ok(())
}

/// Весь прогон; любая ошибка прерывает его до записи выходного файла.
pub fn run<W: Write>(cfg: &Config, mut diag: W) -> Result<Summary> {
    let bytes = load(&cfg.input)?;
    let ds = parse(&bytes)?;
    dump(&mut diag, &ds)?;

    let (records, skipped) = map_dataset(&ds, cfg.on_mismatch)?;
    dump(&mut diag, &records)?;

    write_output(&cfg.output, &records)?;
    Ok(Summary {
        records: records.len(),
        skipped,
    })
}
