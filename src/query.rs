//! List-Request Coordination
//!
//! The (page, name, date) triple that fully determines a list fetch, plus the
//! generation counter that keeps racing responses from clobbering newer ones.
//! Kept free of browser types so the rules are testable on the host.

/// Request triple for the paginated item list
///
/// `name` empty means unconstrained; `date` is a `YYYY-MM-DD` local calendar
/// date. Any change to the triple is worth exactly one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub name: String,
    pub date: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            name: String::new(),
            date: None,
        }
    }
}

impl ListQuery {
    /// One page back, clamped at page 1
    pub fn prev(&self) -> Self {
        let mut next = self.clone();
        if next.page > 1 {
            next.page -= 1;
        }
        next
    }

    /// One page forward, clamped at the last known page
    pub fn next(&self, total_pages: u32) -> Self {
        let mut next = self.clone();
        if next.page < total_pages {
            next.page += 1;
        }
        next
    }

    /// New filter selection; a new filter invalidates the old page position
    pub fn with_filters(name: String, date: Option<String>) -> Self {
        Self {
            page: 1,
            name,
            date: date.filter(|d| !d.is_empty()),
        }
    }

    /// Request parameters in server spelling
    ///
    /// The timezone offset rides along only when a date filter is present, so
    /// the server can bucket "created on this local calendar date".
    pub fn query_pairs(&self, tz_offset_minutes: i32) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string())];
        if !self.name.is_empty() {
            pairs.push(("name", self.name.clone()));
        }
        if let Some(date) = &self.date {
            pairs.push(("date", date.clone()));
            pairs.push(("tzOffset", tz_offset_minutes.to_string()));
        }
        pairs
    }
}

/// Generation counter for in-flight list requests
///
/// Issue a token before each fetch; apply a response only while its token is
/// still the latest. Arrival order of responses stops mattering.
#[derive(Debug, Default)]
pub struct FetchGate {
    latest: u64,
}

impl FetchGate {
    pub fn issue(&mut self) -> u64 {
        self.supersede();
        self.latest
    }

    /// Invalidate whatever is in flight without starting a new request
    ///
    /// Called when pending results must never land, e.g. the dropdown was
    /// just cleared.
    pub fn supersede(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

/// Live search fires only from this many characters upward
pub const SEARCH_MIN_CHARS: usize = 2;

/// Trimmed query when it is long enough to search, `None` otherwise
pub fn searchable(query: &str) -> Option<&str> {
    let trimmed = query.trim();
    (trimmed.chars().count() >= SEARCH_MIN_CHARS).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_is_first_page_unfiltered() {
        let query = ListQuery::default();
        assert_eq!(query.page, 1);
        assert!(query.name.is_empty());
        assert_eq!(query.date, None);
    }

    #[test]
    fn prev_next_clamp_at_boundaries() {
        let total_pages = 3;
        let first = ListQuery::default();

        // Page 1: prev stays put, next advances
        assert_eq!(first.prev().page, 1);
        assert_eq!(first.next(total_pages).page, 2);

        // Middle page moves both ways
        let middle = first.next(total_pages);
        assert_eq!(middle.prev().page, 1);
        assert_eq!(middle.next(total_pages).page, 3);

        // Last page: next stays put
        let last = middle.next(total_pages);
        assert_eq!(last.next(total_pages).page, 3);
        assert_eq!(last.prev().page, 2);

        // Empty result set (totalPages 0) cannot advance
        assert_eq!(first.next(0).page, 1);
    }

    #[test]
    fn filter_submission_resets_page() {
        let deep = ListQuery {
            page: 4,
            name: String::new(),
            date: None,
        };
        assert_eq!(deep.page, 4);

        let filtered = ListQuery::with_filters("Hex bolts".into(), Some("2026-08-19".into()));
        assert_eq!(filtered.page, 1);
        assert_eq!(filtered.name, "Hex bolts");
        assert_eq!(filtered.date.as_deref(), Some("2026-08-19"));

        // An empty date string from the input means "no date filter"
        let name_only = ListQuery::with_filters("Hex bolts".into(), Some(String::new()));
        assert_eq!(name_only.date, None);
    }

    #[test]
    fn create_reset_drops_filters_from_the_wire() {
        // Before the create: filtered and three pages deep
        let before = ListQuery {
            page: 3,
            name: "Washers".into(),
            date: Some("2026-08-01".into()),
        };
        let before_pairs = before.query_pairs(-330);
        assert!(before_pairs.iter().any(|(key, _)| *key == "name"));
        assert!(before_pairs.iter().any(|(key, _)| *key == "date"));
        assert!(before_pairs.iter().any(|(key, _)| *key == "tzOffset"));

        // Landing a create replaces the whole triple with the default, so
        // the next request is bare unfiltered page 1
        let after = ListQuery::default();
        assert_ne!(after, before);
        assert_eq!(after.query_pairs(-330), vec![("page", "1".to_string())]);
    }

    #[test]
    fn tz_offset_rides_only_with_date() {
        let name_only = ListQuery {
            page: 2,
            name: "Hex bolts".into(),
            date: None,
        };
        let pairs = name_only.query_pairs(-330);
        assert_eq!(
            pairs,
            vec![
                ("page", "2".to_string()),
                ("name", "Hex bolts".to_string()),
            ]
        );

        let dated = ListQuery {
            page: 1,
            name: String::new(),
            date: Some("2026-08-19".into()),
        };
        let pairs = dated.query_pairs(-330);
        assert_eq!(
            pairs,
            vec![
                ("page", "1".to_string()),
                ("date", "2026-08-19".to_string()),
                ("tzOffset", "-330".to_string()),
            ]
        );
    }

    #[test]
    fn gate_drops_superseded_response() {
        // Two requests overlap; the older response arrives last and must lose
        let mut gate = FetchGate::default();
        let older = gate.issue();
        let newer = gate.issue();

        assert!(gate.is_current(newer), "newest request is authoritative");
        assert!(!gate.is_current(older), "superseded response must be dropped");

        let third = gate.issue();
        assert!(!gate.is_current(newer));
        assert!(gate.is_current(third));
    }

    #[test]
    fn cleared_dropdown_ignores_late_response() {
        // A search is in flight when the query drops below the minimum; the
        // clear supersedes the token so the late response cannot repopulate
        // the dropdown
        let mut gate = FetchGate::default();
        let inflight = gate.issue();
        assert!(gate.is_current(inflight));

        gate.supersede();
        assert!(
            !gate.is_current(inflight),
            "cleared dropdown must stay empty"
        );

        // The next timer fire starts a fresh generation as usual
        let fresh = gate.issue();
        assert!(gate.is_current(fresh));
    }

    #[test]
    fn short_queries_never_search() {
        assert_eq!(searchable(""), None);
        assert_eq!(searchable("a"), None);
        assert_eq!(searchable("  a  "), None);
        assert_eq!(searchable("ab"), Some("ab"));
        assert_eq!(searchable("  bolts  "), Some("bolts"));
    }
}
