//! XML-выгрузка World Bank: <root><data><record><field name=".." key="..">..</field>...
//!
//! Читаем потоком событий: текст полей не обрезается, незнакомые
//! элементы пропускаются целиком вместе с содержимым.

use crate::{
    error::{BopError, Result},
    model::{Dataset, Field, Record},
    traits::ReadDataset,
};
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};
use std::io::BufRead;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct WorldBankXml;

impl WorldBankXml {
    /// Разбор уже загруженного в память файла.
    pub fn from_bytes(bytes: &[u8]) -> Result<Dataset> {
        let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        Self::read(body)
    }
}

fn xml<E: std::fmt::Display>(e: E) -> BopError {
    BopError::Xml(e.to_string())
}

/// Путь открытых элементов ниже корня совпадает с `names`.
fn at(path: &[Vec<u8>], names: &[&str]) -> bool {
    path.len() == names.len() + 1
        && path[1..].iter().zip(names).all(|(a, b)| a.as_slice() == b.as_bytes())
}

fn open_field(e: &BytesStart) -> Result<Field> {
    let mut name = String::new();
    let mut key = String::new();
    for a in e.attributes() {
        let a = a.map_err(xml)?;
        match a.key.local_name().as_ref() {
            b"name" => name = a.unescape_value().map_err(xml)?.into_owned(),
            b"key" => key = a.unescape_value().map_err(xml)?.into_owned(),
            _ => {}
        }
    }
    Ok(Field {
        role: name.into(),
        key,
        value: String::new(),
    })
}

fn push_field(ds: &mut Dataset, field: Field) {
    if let Some(rec) = ds.data.records.last_mut() {
        rec.fields.push(field);
    }
}

impl ReadDataset for WorldBankXml {
    fn read<R: BufRead>(r: R) -> Result<Dataset> {
        let mut reader = Reader::from_reader(r);

        let mut ds = Dataset::default();
        let mut buf = Vec::new();
        // локальные имена открытых элементов, path[0] — корень
        let mut path: Vec<Vec<u8>> = Vec::new();
        let mut pending: Option<Field> = None;
        let mut seen_root = false;

        loop {
            match reader.read_event_into(&mut buf).map_err(xml)? {
                Event::Start(e) => {
                    let name = e.local_name().as_ref().to_vec();
                    if at(&path, &["data"]) && name == b"record" {
                        ds.data.records.push(Record::default());
                    } else if at(&path, &["data", "record"]) && name == b"field" {
                        pending = Some(open_field(&e)?);
                    }
                    seen_root = true;
                    path.push(name);
                }
                Event::Empty(e) => {
                    if path.is_empty() {
                        seen_root = true;
                        break;
                    }
                    let name = e.local_name();
                    if at(&path, &["data"]) && name.as_ref() == b"record" {
                        ds.data.records.push(Record::default());
                    } else if at(&path, &["data", "record"]) && name.as_ref() == b"field" {
                        let field = open_field(&e)?;
                        push_field(&mut ds, field);
                    }
                }
                Event::Text(t) => {
                    if let Some(f) = pending.as_mut().filter(|_| path.len() == 4) {
                        f.value.push_str(&t.unescape().map_err(xml)?);
                    }
                }
                Event::CData(c) => {
                    if let Some(f) = pending.as_mut().filter(|_| path.len() == 4) {
                        f.value.push_str(&reader.decoder().decode(&c).map_err(xml)?);
                    }
                }
                Event::End(_) => {
                    path.pop();
                    if path.len() == 3 {
                        if let Some(f) = pending.take() {
                            push_field(&mut ds, f);
                        }
                    }
                    // всё после корневого элемента игнорируется
                    if path.is_empty() {
                        break;
                    }
                }
                Event::Eof => {
                    if let Some(open) = path.last() {
                        return Err(BopError::Xml(format!(
                            "unexpected end of document inside <{}>",
                            String::from_utf8_lossy(open)
                        )));
                    }
                    break;
                }
                _ => {}
            }
            buf.clear();
        }

        if !seen_root {
            return Err(BopError::Xml("no root element".into()));
        }
        Ok(ds)
    }
}
