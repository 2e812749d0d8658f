/// Fields read from one candidate block, before any normalization.
///
/// `None` means the block had no such sub-element; placeholders are the
/// normalizer's business.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub href: Option<String>,
}

impl RawRecord {
    pub fn is_blank(&self) -> bool {
        self.title.is_none()
            && self.company.is_none()
            && self.location.is_none()
            && self.summary.is_none()
            && self.href.is_none()
    }
}
