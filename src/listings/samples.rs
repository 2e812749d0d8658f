use crate::listings::model::{Listing, MISSING_LINK};

pub const SAMPLE_SOURCE: &str = "Sample Data";

const SAMPLES: [(&str, &str, &str, &str); 3] = [
    (
        "Software Engineer - Visa Sponsorship Available",
        "Tech Solutions UK",
        "London, England",
        "We are looking for talented software engineers. Visa sponsorship available for qualified candidates.",
    ),
    (
        "Data Scientist with Sponsorship",
        "AI Innovations Ltd",
        "Manchester, England",
        "Join our data science team. We provide visa sponsorship for international candidates.",
    ),
    (
        "Marketing Manager - Tier 2 Visa",
        "Global Marketing Co",
        "Birmingham, England",
        "Marketing manager position with Tier 2 visa sponsorship for the right candidate.",
    ),
];

/// Fixed listings appended after live results so the board is never empty.
pub fn sample_listings() -> Vec<Listing> {
    SAMPLES
        .iter()
        .map(|&(title, company, location, summary)| Listing {
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            summary: summary.to_string(),
            source: SAMPLE_SOURCE.to_string(),
            link: MISSING_LINK.to_string(),
            visa_sponsorship: true,
        })
        .collect()
}
