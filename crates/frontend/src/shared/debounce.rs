//! Debounce policy for the search pages: only free-text typing is delayed.
//! Tab, filter and pagination changes refetch immediately even while a query
//! is present.

pub const QUERY_DEBOUNCE_MS: u32 = 400;

/// Delay for the next search given the previous and current query text.
/// Non-zero only when the query itself changed to something non-empty.
pub fn query_delay(last_query: &str, query: &str) -> u32 {
    if query.trim().is_empty() || last_query == query {
        0
    } else {
        QUERY_DEBOUNCE_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_is_debounced() {
        assert_eq!(query_delay("hp", "hp "), QUERY_DEBOUNCE_MS);
        assert_eq!(query_delay("", "h"), QUERY_DEBOUNCE_MS);
    }

    #[test]
    fn unrelated_changes_with_a_query_present_fire_immediately() {
        // Same query, different page/filter: no delay.
        assert_eq!(query_delay("impresora sala 2", "impresora sala 2"), 0);
    }

    #[test]
    fn clearing_the_query_fires_immediately() {
        assert_eq!(query_delay("hp", ""), 0);
        assert_eq!(query_delay("hp", "   "), 0);
    }
}
