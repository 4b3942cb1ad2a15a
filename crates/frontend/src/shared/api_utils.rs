//! Network helpers: the published sheet and the optional `config.toml`.
//!
//! Both loaders recover locally, callers always get usable data back.

use contracts::domain::a001_product::{fallback_catalog, parse_records, ProductRecord};
use contracts::shared::config::SiteConfig;
use gloo_net::http::Request;

/// Looked up relative to the current page
pub const CONFIG_PATH: &str = "config.toml";

/// GET `url` and return the body as text.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

/// Fetch and parse the product sheet, substituting the fallback catalog on
/// any failure.
pub async fn load_catalog(config: &SiteConfig) -> Vec<ProductRecord> {
    catalog_from_response(fetch_text(&config.sheet.url).await, config)
}

/// Turn the sheet fetch result into the catalog records.
pub fn catalog_from_response(
    result: Result<String, String>,
    config: &SiteConfig,
) -> Vec<ProductRecord> {
    match result {
        Ok(text) => {
            let records = parse_records(&text);
            log::debug!("Loaded {} products from sheet", records.len());
            records
        }
        Err(err) => {
            log::error!("Error loading products: {}", err);
            log::warn!("Using fallback catalog");
            fallback_catalog(&config.catalog.fallback_image)
        }
    }
}

/// Load configuration
///
/// Search order:
/// 1. `config.toml` next to the page
/// 2. Falls back to embedded default config
pub async fn load_config() -> SiteConfig {
    match fetch_text(CONFIG_PATH).await {
        Ok(contents) => match SiteConfig::from_toml_str(&contents) {
            Ok(config) => {
                log::info!("Loading config from: {}", CONFIG_PATH);
                config
            }
            Err(err) => {
                log::warn!("{}; using embedded configuration", err);
                SiteConfig::embedded()
            }
        },
        Err(err) => {
            log::info!("{} not available ({}); using embedded configuration", CONFIG_PATH, err);
            SiteConfig::embedded()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_fetch_uses_fallback_catalog() {
        let config = SiteConfig::embedded();
        let records = catalog_from_response(Err("HTTP error: 404".to_string()), &config);

        assert_eq!(records, fallback_catalog(&config.catalog.fallback_image));
        assert_eq!(records.len(), 2);
        assert!(records
            .iter()
            .all(|r| r.image == config.catalog.fallback_image));
    }

    #[test]
    fn test_sheet_body_is_parsed() {
        let config = SiteConfig::embedded();
        let body = "id,category,name,price,image\n5,easel,Easel,900,e.png".to_string();
        let records = catalog_from_response(Ok(body), &config);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 5);
        assert_eq!(records[0].category, "easel");
    }

    #[test]
    fn test_header_only_sheet_gives_empty_catalog() {
        let config = SiteConfig::embedded();
        let records =
            catalog_from_response(Ok("id,category,name,price,image\n".to_string()), &config);

        assert!(records.is_empty());
    }
}
