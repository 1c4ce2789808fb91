// File: crates/waffle-core/tests/reshape.rs
// Purpose: Validate percent parsing, the wide -> long pivot and quarter start dates.

use chrono::NaiveDate;
use waffle_core::{parse_share, parse_wide_csv, reshape, to_long, to_wide, QuarterCalendar, WaffleError};

const CSV: &str = "\
Brands,Q2 2021,Q3 2021,Q4 2021,Q1 2022,Q2 2022,Q3 2022
BYD Auto,9%,11%,12%,14%,17%,20%
Tesla,15%,15%,14%,15%,12%,13%
";

#[test]
fn parse_share_whole_percents() {
    for n in [0u32, 1, 7, 20, 42, 99, 100] {
        let got = parse_share(&format!("{n}%")).expect("valid percent");
        assert_eq!(got, n as f64 / 100.0);
    }
    // Surrounding whitespace is tolerated.
    assert_eq!(parse_share(" 13% ").unwrap(), 0.13);
}

#[test]
fn parse_share_rejects_non_integer_or_missing_suffix() {
    for bad in ["20", "20.5%", "abc%", "%", "", "-3%", "20%%"] {
        match parse_share(bad) {
            Err(WaffleError::InvalidShare { value }) => assert_eq!(value, bad),
            other => panic!("expected InvalidShare for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn to_long_is_brand_major_then_quarter_order() {
    let cal = QuarterCalendar::default();
    let wide = parse_wide_csv(CSV.as_bytes(), &cal).expect("parse");
    let long = to_long(&wide);
    assert_eq!(long.len(), 12);
    assert_eq!(long[0].brand, "BYD Auto");
    assert_eq!(long[0].quarter, "Q2 2021");
    assert_eq!(long[5].quarter, "Q3 2022");
    assert_eq!(long[5].market_share_raw, "20%");
    assert_eq!(long[6].brand, "Tesla");
    assert_eq!(long[6].quarter, "Q2 2021");
}

#[test]
fn long_then_wide_round_trips() {
    let cal = QuarterCalendar::default();
    let wide = parse_wide_csv(CSV.as_bytes(), &cal).expect("parse");
    assert_eq!(to_wide(&to_long(&wide)), wide);
}

#[test]
fn reshape_attaches_dates_and_fractions() {
    let cal = QuarterCalendar::default();
    let wide = parse_wide_csv(CSV.as_bytes(), &cal).expect("parse");
    let rows = reshape(&wide, &cal).expect("reshape");

    let byd_q3 = rows.iter().find(|r| r.brand == "BYD Auto" && r.quarter == "Q3 2022").unwrap();
    assert_eq!(byd_q3.market_share, 0.20);
    assert_eq!(byd_q3.quarter_start_date, NaiveDate::from_ymd_opt(2022, 7, 1));

    let tesla_q2_21 = rows.iter().find(|r| r.brand == "Tesla" && r.quarter == "Q2 2021").unwrap();
    assert_eq!(tesla_q2_21.quarter_start_date, NaiveDate::from_ymd_opt(2021, 4, 1));
    assert_eq!(tesla_q2_21.percent(), 15);
}

#[test]
fn unknown_quarter_gets_no_date_without_failing() {
    // Calendar knows one quarter only; the other column still loads via a wider calendar.
    let loading = QuarterCalendar::from_labels(&["Q2 2021", "Q3 2021"]);
    let dating = QuarterCalendar::from_labels(&["Q2 2021"]);
    let wide = parse_wide_csv(CSV.as_bytes(), &loading).expect("parse");
    let rows = reshape(&wide, &dating).expect("reshape tolerates unknown labels");
    let q3 = rows.iter().find(|r| r.quarter == "Q3 2021").unwrap();
    assert_eq!(q3.quarter_start_date, None);
    assert_eq!(q3.market_share, 0.11);
}

#[test]
fn reshape_fails_on_decimal_percent() {
    let cal = QuarterCalendar::from_labels(&["Q3 2022"]);
    let data = "Brands,Q3 2022\nBYD Auto,20.5%\n";
    let wide = parse_wide_csv(data.as_bytes(), &cal).expect("parse");
    assert!(matches!(reshape(&wide, &cal), Err(WaffleError::InvalidShare { .. })));
}

#[test]
fn calendar_lookups() {
    let cal = QuarterCalendar::default();
    assert_eq!(cal.len(), 6);
    assert_eq!(cal.latest(), Some("Q3 2022"));
    assert_eq!(cal.year_before("Q3 2022"), Some("Q3 2021"));
    assert_eq!(cal.year_before("Q2 2021"), None);
    assert_eq!(cal.start_date("Q1 2022"), NaiveDate::from_ymd_opt(2022, 1, 1));
    assert_eq!(cal.start_date("Q5 2022"), None);
}

#[test]
fn explicit_calendar_for_alternate_quarters() {
    let cal = QuarterCalendar::new(vec![
        ("H1".to_string(), NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
        ("H2".to_string(), NaiveDate::from_ymd_opt(2023, 7, 1).unwrap()),
    ]);
    assert_eq!(cal.latest(), Some("H2"));
    let wide = parse_wide_csv("Brands,H1,H2\nTesla,10%,12%\n".as_bytes(), &cal).expect("parse");
    let rows = reshape(&wide, &cal).expect("reshape");
    assert_eq!(rows[1].quarter_start_date, NaiveDate::from_ymd_opt(2023, 7, 1));
}
