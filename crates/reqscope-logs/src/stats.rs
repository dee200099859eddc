use std::collections::BTreeMap;

use reqscope_types::Severity;

/// Counts per severity level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelCounts {
    pub debug: u64,
    pub info: u64,
    pub warning: u64,
    pub error: u64,
    pub critical: u64,
}

impl LevelCounts {
    /// Increment the counter for a level
    pub fn increment(&mut self, level: Severity) {
        match level {
            Severity::Debug => self.debug += 1,
            Severity::Info => self.info += 1,
            Severity::Warning => self.warning += 1,
            Severity::Error => self.error += 1,
            Severity::Critical => self.critical += 1,
        }
    }

    /// Get the counter for a level
    pub fn get(&self, level: Severity) -> u64 {
        match level {
            Severity::Debug => self.debug,
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
            Severity::Critical => self.critical,
        }
    }

    /// Sum across all levels
    pub fn total(&self) -> u64 {
        self.debug + self.info + self.warning + self.error + self.critical
    }

    /// Add another set of counts into this one
    pub fn merge(&mut self, other: &LevelCounts) {
        self.debug += other.debug;
        self.info += other.info;
        self.warning += other.warning;
        self.error += other.error;
        self.critical += other.critical;
    }
}

/// Aggregated request statistics keyed by handler path
///
/// Handlers are created on first sight with zeroed counts; counters only
/// increase during a run. Iteration order is lexicographic by handler,
/// which is also the report row order.
#[derive(Clone, Debug, Default)]
pub struct RequestStats {
    handlers: BTreeMap<String, LevelCounts>,
    total_requests: u64,
}

impl RequestStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one event for a normalized handler path
    pub fn record(&mut self, handler: &str, level: Severity) {
        self.handlers
            .entry(handler.to_string())
            .or_default()
            .increment(level);
        self.total_requests += 1;
    }

    /// Total number of recorded events across all handlers
    pub fn total_requests(&self) -> u64 {
        self.total_requests
    }

    /// Counts for a single handler
    pub fn get(&self, handler: &str) -> Option<&LevelCounts> {
        self.handlers.get(handler)
    }

    /// Iterate handlers in lexicographic order
    pub fn handlers(&self) -> impl Iterator<Item = (&str, &LevelCounts)> {
        self.handlers.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no events were recorded
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Per-level sums across all handlers
    pub fn column_totals(&self) -> LevelCounts {
        let mut totals = LevelCounts::default();
        for counts in self.handlers.values() {
            totals.merge(counts);
        }
        totals
    }

    /// Add another set of statistics into this one
    pub fn merge(&mut self, other: RequestStats) {
        for (handler, counts) in other.handlers {
            self.handlers.entry(handler).or_default().merge(&counts);
        }
        self.total_requests += other.total_requests;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creates_handler_on_first_sight() {
        let mut stats = RequestStats::new();
        assert!(stats.is_empty());

        stats.record("/api/v1/test/", Severity::Info);
        let counts = stats.get("/api/v1/test/").unwrap();
        assert_eq!(counts.info, 1);
        assert_eq!(counts.total(), 1);
        assert_eq!(stats.total_requests(), 1);
    }

    #[test]
    fn test_per_handler_totals_sum_to_total_requests() {
        let mut stats = RequestStats::new();
        stats.record("/a/", Severity::Info);
        stats.record("/a/", Severity::Error);
        stats.record("/b/", Severity::Info);

        let per_handler: u64 = stats.handlers().map(|(_, c)| c.total()).sum();
        assert_eq!(per_handler, stats.total_requests());
        assert_eq!(stats.total_requests(), 3);
    }

    #[test]
    fn test_handlers_iterate_in_lexicographic_order() {
        let mut stats = RequestStats::new();
        stats.record("/b/", Severity::Info);
        stats.record("/a/", Severity::Info);
        stats.record("/c/", Severity::Error);

        let keys: Vec<&str> = stats.handlers().map(|(k, _)| k).collect();
        assert_eq!(keys, ["/a/", "/b/", "/c/"]);
    }

    #[test]
    fn test_column_totals() {
        let mut stats = RequestStats::new();
        stats.record("/a/", Severity::Info);
        stats.record("/a/", Severity::Info);
        stats.record("/b/", Severity::Error);

        let totals = stats.column_totals();
        assert_eq!(totals.info, 2);
        assert_eq!(totals.error, 1);
        assert_eq!(totals.debug, 0);
        assert_eq!(totals.total(), stats.total_requests());
    }

    #[test]
    fn test_merge_adds_pointwise() {
        let mut left = RequestStats::new();
        left.record("/a/", Severity::Info);
        left.record("/b/", Severity::Error);

        let mut right = RequestStats::new();
        right.record("/a/", Severity::Info);
        right.record("/c/", Severity::Info);

        left.merge(right);
        assert_eq!(left.total_requests(), 4);
        assert_eq!(left.get("/a/").unwrap().info, 2);
        assert_eq!(left.get("/b/").unwrap().error, 1);
        assert_eq!(left.get("/c/").unwrap().info, 1);
    }

    #[test]
    fn test_level_counts_increment_and_get() {
        let mut counts = LevelCounts::default();
        for level in Severity::ALL {
            assert_eq!(counts.get(level), 0);
            counts.increment(level);
            assert_eq!(counts.get(level), 1);
        }
        assert_eq!(counts.total(), 5);
    }
}
