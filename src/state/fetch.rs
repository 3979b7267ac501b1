#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

/// Monotonic sequence guard for overlapping list fetches.
///
/// Rapid filter changes can leave several requests in flight; without a
/// guard the last response to *resolve* would win and could display stale
/// data. Each fetch takes a ticket via [`FetchSeq::begin`] and applies its
/// response only while [`FetchSeq::is_current`] still holds, so the last
/// request *issued* always wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchSeq {
    latest: u64,
}

impl FetchSeq {
    /// Issue a ticket for a new fetch, superseding all earlier ones.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether `ticket` still identifies the most recently issued fetch.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}
