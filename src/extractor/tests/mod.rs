use std::fs;

use url::Url;

use crate::extractor::{Extractor, IndeedExtractor, MAX_CANDIDATES};
use crate::listings::normalize;

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{}", name))
        .expect("Failed to read test fixture")
}

#[test]
fn test_cap_keeps_first_ten_in_document_order() {
    let html = fixture("search_results.html");
    assert_eq!(html.matches("job_seen_beacon").count(), 12);

    let records = IndeedExtractor::new().parse(&html);

    assert_eq!(records.len(), MAX_CANDIDATES);
    let hrefs: Vec<_> = records.iter().map(|r| r.href.clone().unwrap()).collect();
    let expected: Vec<_> = (1..=10)
        .map(|i| format!("/rc/clk?jk=job{:02}&from=serp", i))
        .collect();
    assert_eq!(hrefs, expected);
    assert_eq!(records[0].title.as_deref(), Some("Software Engineer"));
    assert_eq!(records[9].company.as_deref(), Some("Boots"));
}

#[test]
fn test_missing_location_only_affects_that_field() {
    let html = fixture("search_results.html");
    let origin = Url::parse("https://uk.indeed.com/").unwrap();
    let extractor = IndeedExtractor::new();

    let listings: Vec<_> = extractor
        .parse(&html)
        .into_iter()
        .map(|raw| normalize(raw, extractor.source_label(), &origin))
        .collect();

    let nurse = &listings[2];
    assert_eq!(nurse.location, "N/A");
    assert_eq!(nurse.title, "Staff Nurse");
    assert_eq!(nurse.company, "NHS Leeds Teaching Hospitals");
    assert!(nurse.summary.starts_with("Staff Nurse role at NHS Leeds"));
    assert_eq!(nurse.link, "https://uk.indeed.com/rc/clk?jk=job03&from=serp");
    assert_eq!(nurse.source, "Indeed UK");

    assert!(
        listings
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 2)
            .all(|(_, l)| l.location != "N/A")
    );
}

#[test]
fn test_no_results_page() {
    let html = fixture("no_results.html");
    assert!(IndeedExtractor::new().parse(&html).is_empty());
}

#[test]
fn test_malformed_html() {
    let html = r#"<html><body><div class="job_seen_beacon"><h2 class="jobTitle">Welder<span class="companyName">Forge Co"#;
    let records = IndeedExtractor::new().parse(html);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].company.as_deref(), Some("Forge Co"));
    assert!(records[0].title.as_deref().unwrap().starts_with("Welder"));
}

mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_parse_never_panics(html in ".*") {
            let records = IndeedExtractor::new().parse(&html);
            prop_assert!(records.len() <= MAX_CANDIDATES);
        }

        #[test]
        fn test_parse_never_exceeds_cap(cards in 0usize..30) {
            let html = r#"<div class="job_seen_beacon"><h2 class="jobTitle">Role</h2></div>"#.repeat(cards);
            let records = IndeedExtractor::new().parse(&html);
            prop_assert_eq!(records.len(), cards.min(MAX_CANDIDATES));
        }
    }
}
