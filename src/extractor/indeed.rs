use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::extractor::{Extractor, errors::RecordExtractionError, model::RawRecord};

/// Only the first blocks of a results page are examined.
pub const MAX_CANDIDATES: usize = 10;

pub const INDEED_SOURCE: &str = "Indeed UK";

/// Selectors for the Indeed search results markup. The markup is unversioned
/// and changes without notice; everything site-specific lives here.
pub struct IndeedExtractor {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    summary: Selector,
    anchor: Selector,
}

impl IndeedExtractor {
    pub fn new() -> Self {
        Self {
            card: selector("div.job_seen_beacon"),
            title: selector("h2.jobTitle"),
            company: selector("span.companyName"),
            location: selector("div.companyLocation"),
            summary: selector("div.summary"),
            anchor: selector("a"),
        }
    }

    fn extract_card(
        &self,
        index: usize,
        card: ElementRef<'_>,
    ) -> Result<RawRecord, RecordExtractionError> {
        let title_elem = card.select(&self.title).next();

        let record = RawRecord {
            title: title_elem.map(element_text),
            company: first_text(card, &self.company),
            location: first_text(card, &self.location),
            summary: first_text(card, &self.summary),
            href: title_elem
                .and_then(|t| t.select(&self.anchor).next())
                .and_then(|a| a.value().attr("href"))
                .filter(|href| !href.trim().is_empty())
                .map(String::from),
        };

        if record.is_blank() && element_text(card).is_empty() {
            return Err(RecordExtractionError::Blank { index });
        }
        Ok(record)
    }
}

impl Default for IndeedExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for IndeedExtractor {
    fn source_label(&self) -> &str {
        INDEED_SOURCE
    }

    fn parse(&self, html: &str) -> Vec<RawRecord> {
        let document = Html::parse_document(html);

        document
            .select(&self.card)
            .take(MAX_CANDIDATES)
            .enumerate()
            .filter_map(|(index, card)| match self.extract_card(index, card) {
                Ok(record) => Some(record),
                Err(e) => {
                    debug!(error = %e, "skipping candidate block");
                    None
                }
            })
            .collect()
    }
}

fn selector(css: &str) -> Selector {
    // Constant selectors; a parse failure is a programming error
    Selector::parse(css).expect("static selector must parse")
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(element_text)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(inner: &str) -> String {
        format!(r#"<div class="job_seen_beacon">{}</div>"#, inner)
    }

    #[test]
    fn test_extracts_all_fields() {
        let html = card(
            r#"<h2 class="jobTitle"><a href="/rc/clk?jk=1"><span>  Rust Developer </span></a></h2>
               <span class="companyName">Ferris Ltd</span>
               <div class="companyLocation">Leeds</div>
               <div class="summary"><ul><li>Visa sponsorship offered</li></ul></div>"#,
        );
        let records = IndeedExtractor::new().parse(&html);
        assert_eq!(
            records,
            vec![RawRecord {
                title: Some("Rust Developer".to_string()),
                company: Some("Ferris Ltd".to_string()),
                location: Some("Leeds".to_string()),
                summary: Some("Visa sponsorship offered".to_string()),
                href: Some("/rc/clk?jk=1".to_string()),
            }]
        );
    }

    #[test]
    fn test_link_only_taken_from_title() {
        let html = card(
            r#"<h2 class="jobTitle">Porter</h2><a href="/elsewhere">apply</a>"#,
        );
        let records = IndeedExtractor::new().parse(&html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("Porter"));
        assert_eq!(records[0].href, None);
    }

    #[test]
    fn test_blank_block_is_skipped() {
        let html = format!(
            "{}{}",
            card("   "),
            card(r#"<span class="companyName">Only Company</span>"#)
        );
        let records = IndeedExtractor::new().parse(&html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].company.as_deref(), Some("Only Company"));
    }

    #[test]
    fn test_block_with_stray_text_is_kept() {
        let records = IndeedExtractor::new().parse(&card("Promoted"));
        assert_eq!(records, vec![RawRecord::default()]);
    }

    #[test]
    fn test_non_matching_document() {
        let records = IndeedExtractor::new().parse("<html><body><p>No jobs</p></body></html>");
        assert!(records.is_empty());
    }
}
