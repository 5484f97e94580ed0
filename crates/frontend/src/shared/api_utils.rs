//! Gateway URL helpers

use super::config::config;

/// Base URL of the gateway, e.g. "https://robo-rec.com"
pub fn api_base() -> &'static str {
    &config().api.base_url
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/lookup-store");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append a serialized query to a path
pub fn with_query<Q: serde::Serialize>(path: &str, query: &Q) -> Result<String, serde_qs::Error> {
    let qs = serde_qs::to_string(query)?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_inventory_summary::dto::InventoryByDateQuery;

    #[test]
    fn test_with_query() {
        let query = InventoryByDateQuery {
            from: chrono::NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            to: chrono::NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
        };
        assert_eq!(
            with_query("/api/inventorybydate", &query).unwrap(),
            "/api/inventorybydate?from=2025-07-01&to=2025-07-31"
        );
    }

    #[test]
    fn test_api_url_joins_path() {
        assert!(api_url("/api/sales").ends_with("/api/sales"));
    }
}
