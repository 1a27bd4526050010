use anyhow::{anyhow, Result};
use std::{cell::RefCell, collections::HashMap, fs};
use tempfile::tempdir;
use totalscraper::{
    fetch::{parse_tables, TableSource},
    pipeline::{collect_records, run},
    process::RawTable,
    Round, ScrapeError, WeekSpec,
};

/// Serves canned pages by segment; any other target is an empty page.
#[derive(Default)]
struct StubSource {
    pages: HashMap<String, Vec<RawTable>>,
    fail_on: Option<String>,
    requested: RefCell<Vec<String>>,
}

impl StubSource {
    fn with_page(mut self, segment: &str, tables: Vec<RawTable>) -> Self {
        self.pages.insert(segment.to_string(), tables);
        self
    }
}

impl TableSource for StubSource {
    fn fetch_tables(&self, target: &WeekSpec) -> Result<Vec<RawTable>> {
        let segment = target.segment();
        self.requested.borrow_mut().push(segment.clone());
        if self.fail_on.as_deref() == Some(segment.as_str()) {
            return Err(anyhow!("connection reset fetching {}", segment));
        }
        Ok(self.pages.get(&segment).cloned().unwrap_or_default())
    }
}

fn odds_table(rows: &[(&str, &str)]) -> RawTable {
    let headers = [
        "Date",
        "Home Team ID",
        "Opening Total",
        "Opening Result",
        "Closing Total",
        "Closing Result",
        "Game Total",
        "Weather",
    ];
    RawTable::new(
        headers.iter().map(|h| h.to_string()).collect(),
        rows.iter()
            .map(|(date, detail)| {
                [*date, *detail, "44.5", "Over", "45", "Over", "51", "Clear"]
                    .iter()
                    .map(|c| c.to_string())
                    .collect()
            })
            .collect(),
    )
}

#[test]
fn test_two_seasons_on_week_one() -> Result<()> {
    let source = StubSource::default().with_page(
        "week-1",
        vec![
            odds_table(&[("9/8/2019", "JAC @ IND")]),
            odds_table(&[("9/9/2018", "JAC @ IND")]),
        ],
    );

    let dir = tempdir()?;
    let out = dir.path().join("totals.csv");
    let summary = run(&source, &out)?;

    assert_eq!(summary.pages, 21);
    assert_eq!(summary.tables, 2);
    assert_eq!(summary.rows, 2);
    assert!(summary.unrecognised_codes.is_empty());

    let mut reader = csv::Reader::from_path(&out)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    assert_eq!(
        headers,
        vec![
            "game_id",
            "game_detail",
            "date",
            "opening_total_line",
            "opening_result",
            "closing_total_line",
            "closing_result",
            "game_total",
        ]
    );
    assert!(!headers.iter().any(|h| h == "Home Team ID" || h == "Weather"));

    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "2019_01_JAX_IND");
    assert_eq!(&rows[0][1], "JAC @ IND");
    assert_eq!(&rows[0][2], "9/8/2019");
    assert_eq!(&rows[1][0], "2018_01_JAX_IND");
    assert_eq!(&rows[1][7], "51");
    Ok(())
}

#[test]
fn test_targets_requested_in_order() -> Result<()> {
    let source = StubSource::default();
    let (records, summary) = collect_records(&source)?;

    assert!(records.is_empty());
    assert_eq!(summary.tables, 0);

    let requested = source.requested.borrow();
    let expected: Vec<String> = (1..=17)
        .map(|w| format!("week-{}", w))
        .chain(["wildcard", "division", "conference", "superbowl"].map(String::from))
        .collect();
    assert_eq!(*requested, expected);
    Ok(())
}

#[test]
fn test_row_order_follows_targets_then_positions() -> Result<()> {
    let source = StubSource::default()
        .with_page(
            "week-2",
            vec![
                odds_table(&[("a", "NE @ MIA"), ("b", "LAR @ SF")]),
                odds_table(&[("c", "SD @ OAK")]),
            ],
        )
        .with_page("week-1", vec![odds_table(&[("d", "KC @ JAC")])])
        .with_page("superbowl", vec![odds_table(&[("e", "SF 20 @ KC 31")])])
        .with_page(
            "wildcard",
            vec![
                RawTable::default(),
                RawTable::default(),
                odds_table(&[("f", "HOU @ IND")]),
            ],
        );

    let (records, summary) = collect_records(&source)?;
    let ids: Vec<&str> = records.iter().map(|r| r.game_id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "2019_01_KC_JAX",
            "2019_02_NE_MIA",
            "2019_02_LA_SF",
            "2018_02_SD_OAK",
            "2017_18_HOU_IND",
            "2019_21_SF_KC",
        ]
    );
    assert_eq!(summary.tables, 7);
    Ok(())
}

#[test]
fn test_fourteenth_table_aborts_run() {
    let tables = (0..14).map(|_| RawTable::default()).collect();
    let source = StubSource::default().with_page("division", tables);

    let err = collect_records(&source).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ScrapeError>(),
        Some(&ScrapeError::UnknownSeasonPosition(13))
    );
}

#[test]
fn test_malformed_descriptor_aborts_without_output() -> Result<()> {
    let source = StubSource::default().with_page(
        "week-5",
        vec![odds_table(&[("x", "NE @ KC"), ("y", "Bye week")])],
    );
    let dir = tempdir()?;
    let out = dir.path().join("totals.csv");

    let err = run(&source, &out).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ScrapeError>(),
        Some(ScrapeError::MalformedDescriptor { separators: 0, .. })
    ));
    assert!(!out.exists());
    Ok(())
}

#[test]
fn test_transport_failure_aborts_without_output() -> Result<()> {
    let source = StubSource {
        fail_on: Some(Round::Conference.to_string()),
        ..StubSource::default()
    }
    .with_page("week-1", vec![odds_table(&[("d", "KC @ JAC")])]);
    let dir = tempdir()?;
    let out = dir.path().join("totals.csv");

    let err = run(&source, &out).unwrap_err();
    assert!(format!("{:#}", err).contains("conference"));
    assert!(!out.exists());
    // nothing after the failing target is requested
    assert_eq!(source.requested.borrow().last().map(String::as_str), Some("conference"));
    Ok(())
}

#[test]
fn test_unrecognised_codes_pass_through_and_are_reported() -> Result<()> {
    let source = StubSource::default().with_page(
        "week-3",
        vec![odds_table(&[("z", "NWE @ KAN"), ("y", "JAC @ HOU")])],
    );
    let (records, summary) = collect_records(&source)?;
    assert_eq!(records[0].game_id, "2019_03_NWE_KAN");
    assert_eq!(records[1].game_id, "2019_03_JAX_HOU");
    assert_eq!(
        summary.unrecognised_codes.into_iter().collect::<Vec<_>>(),
        vec!["KAN", "NWE"]
    );
    Ok(())
}

#[test]
fn test_parsed_page_flows_through_pipeline() -> Result<()> {
    let html = r#"
        <table>
          <thead><tr><th>Date</th><th>Home Team ID</th><th>Opening Total</th><th>Game Total</th></tr></thead>
          <tbody><tr><td>2/2/2020</td><td>SF 20 @ KC 31</td><td>54.5</td><td>51</td></tr></tbody>
        </table>
        <table>
          <thead><tr><th>Date</th><th>Home Team ID</th><th>Opening Total</th><th>Game Total</th></tr></thead>
          <tbody><tr><td>2/3/2019</td><td>LAR 3 @ NE 13</td><td>56.5</td><td>16</td></tr></tbody>
        </table>
    "#;
    let source = StubSource::default().with_page("superbowl", parse_tables(html));

    let (records, _) = collect_records(&source)?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].game_id, "2019_21_SF_KC");
    assert_eq!(records[1].game_id, "2018_21_LA_NE");
    assert_eq!(records[1].game_detail.as_deref(), Some("LAR 3 @ NE 13"));
    assert_eq!(records[1].opening_total_line.as_deref(), Some("56.5"));
    assert_eq!(records[1].closing_result, None);
    Ok(())
}
