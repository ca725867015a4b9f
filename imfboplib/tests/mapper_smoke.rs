use imfboplib::{
    error::BopError,
    mapper::{map_dataset, map_record, MismatchPolicy},
    model::{Data, Dataset, Field, Record, NET_TRADE_TOPIC},
};

fn field(name: &str, key: &str, value: &str) -> Field {
    Field {
        role: name.to_string().into(),
        key: key.into(),
        value: value.into(),
    }
}

fn brazil(value: &str) -> Record {
    Record {
        fields: vec![
            field("Item", "REF1", NET_TRADE_TOPIC),
            field("Country or Area", "BRA", "Brazil"),
            field("Year", "", "1990"),
            field("Value", "", value),
        ],
    }
}

#[test]
fn known_value_is_projected() {
    let bop = map_record(&brazil("1500.25")).expect("map record");
    assert_eq!(bop.country_or_area_name, "Brazil");
    assert_eq!(bop.country_iso_alpha3, "BRA");
    assert_eq!(bop.year, 1990);
    assert_eq!(bop.balance_of_payments, 1500.25);
    assert!(bop.balance_of_payments_known);
    assert_eq!(bop.imf_reference, "REF1");
}

#[test]
fn empty_value_is_unknown_zero() {
    let bop = map_record(&brazil("")).expect("map record");
    assert!(!bop.balance_of_payments_known);
    assert_eq!(bop.balance_of_payments, 0.0);
    assert_eq!(bop.imf_reference, "REF1");
}

#[test]
fn mapping_is_deterministic() {
    let rec = brazil("-42.5e3");
    assert_eq!(map_record(&rec).unwrap(), map_record(&rec).unwrap());
    assert_eq!(map_record(&rec).unwrap().balance_of_payments, -42500.0);
}

#[test]
fn off_topic_item_is_rejected() {
    let mut rec = brazil("1");
    rec.fields[0] = field("Item", "REF1", "Some Other Indicator");
    match map_record(&rec) {
        Err(BopError::TopicMismatch { found }) => assert_eq!(found, "Some Other Indicator"),
        other => panic!("expected topic mismatch, got {other:?}"),
    }
}

#[test]
fn non_numeric_year_and_value_fail() {
    let mut rec = brazil("1");
    rec.fields[2] = field("Year", "", "nineteen ninety");
    assert!(matches!(map_record(&rec), Err(BopError::Parse(_))));

    let rec = brazil("12,5");
    assert!(matches!(map_record(&rec), Err(BopError::Parse(_))));
}

#[test]
fn year_outside_i16_wraps() {
    let mut rec = brazil("1");
    rec.fields[2] = field("Year", "", "40000");
    assert_eq!(map_record(&rec).unwrap().year, -25536);
}

#[test]
fn unknown_fields_are_ignored_and_last_value_wins() {
    let mut rec = brazil("7");
    rec.fields.push(field("Footnote", "F", "whatever"));
    rec.fields.push(field("Value", "", ""));
    let bop = map_record(&rec).unwrap();
    assert!(!bop.balance_of_payments_known);
    assert_eq!(bop.balance_of_payments, 7.0);
}

fn dataset_with_stray() -> Dataset {
    let mut stray = brazil("3");
    stray.fields[0] = field("Item", "X", "Exports of goods and services");
    Dataset {
        data: Data {
            records: vec![brazil("1"), stray, brazil("")],
        },
    }
}

#[test]
fn abort_policy_fails_whole_dataset() {
    let err = map_dataset(&dataset_with_stray(), MismatchPolicy::Abort).unwrap_err();
    assert!(matches!(err, BopError::TopicMismatch { .. }));
}

#[test]
fn skip_policy_drops_only_off_topic_records() {
    let (records, skipped) = map_dataset(&dataset_with_stray(), MismatchPolicy::Skip).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(skipped, 1);
    assert!(records[0].balance_of_payments_known);
    assert!(!records[1].balance_of_payments_known);
}

#[test]
fn skip_policy_still_aborts_on_parse_errors() {
    let mut ds = dataset_with_stray();
    ds.data.records[2].fields[2] = field("Year", "", "");
    assert!(matches!(
        map_dataset(&ds, MismatchPolicy::Skip),
        Err(BopError::Parse(_))
    ));
}

#[test]
fn whitespace_is_not_trimmed_before_parsing() {
    let rec = brazil("  ");
    assert!(matches!(map_record(&rec), Err(BopError::Parse(_))));

    let rec = brazil(" 12.5 ");
    assert!(matches!(map_record(&rec), Err(BopError::Parse(_))));

    let mut rec = brazil("1");
    rec.fields[2] = field("Year", "", " 1990");
    assert!(matches!(map_record(&rec), Err(BopError::Parse(_))));
}
