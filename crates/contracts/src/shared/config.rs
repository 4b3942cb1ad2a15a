//! Site configuration.
//!
//! Every field has a default equal to the embedded `DEFAULT_CONFIG`, so a
//! `config.toml` deployed next to the page may override just a few keys.

use super::error::ConfigError;
use serde::Deserialize;

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[sheet]
url = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQqM7coEa0FULo0Aiw_Tmfl80pdTrUOC5nfO4GqciqasKmiL1q6EE2T3B8yW15Lpehy2nUejpkvSmUA/pub?output=csv"

[storage]
favorites_key = "scanLankaFavs"

[catalog]
supplementary_categories = ["whiteboard", "greenboard", "partition", "carrom", "chess", "noticeboard", "easel", "other"]
home_sections = ["whiteboard", "greenboard", "partition", "carrom", "chess", "noticeboard", "easel", "other"]
home_card_limit = 4
placeholder_image = "https://via.placeholder.com/250x200?text=No+Image"
fallback_image = "https://via.placeholder.com/250"

[contact]
whatsapp_number = "94740611225"
grid_message = "Hi RD Trading, I am interested in {name}"
favorites_message = "Hi RD Traders, I want to buy {name} "

[slider]
interval_secs = 10

[[slider.slides]]
title = "Whiteboards & Greenboards"
subtitle = "Classroom and office boards in every size"
image = "images/slide-boards.jpg"

[[slider.slides]]
title = "Office Partitions"
subtitle = "Made to order for your workspace"
image = "images/slide-partitions.jpg"

[[slider.slides]]
title = "Carrom & Chess"
subtitle = "Quality game boards for home and club"
image = "images/slide-games.jpg"
"#;

const SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQqM7coEa0FULo0Aiw_Tmfl80pdTrUOC5nfO4GqciqasKmiL1q6EE2T3B8yW15Lpehy2nUejpkvSmUA/pub?output=csv";

const KNOWN_CATEGORIES: [&str; 8] = [
    "whiteboard",
    "greenboard",
    "partition",
    "carrom",
    "chess",
    "noticeboard",
    "easel",
    "other",
];

/// Placeholder inside message templates replaced by the product name
pub const NAME_PLACEHOLDER: &str = "{name}";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub sheet: SheetConfig,
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    pub contact: ContactConfig,
    pub slider: SliderConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SheetConfig {
    pub url: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            url: SHEET_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub favorites_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            favorites_key: "scanLankaFavs".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Tags that always get a home-page slot even with zero products
    pub supplementary_categories: Vec<String>,
    /// Category sections laid out on the home page
    pub home_sections: Vec<String>,
    pub home_card_limit: usize,
    /// Shown when a product image fails to load
    pub placeholder_image: String,
    /// Image used by the offline fallback catalog
    pub fallback_image: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let known: Vec<String> = KNOWN_CATEGORIES.iter().map(|c| c.to_string()).collect();
        Self {
            supplementary_categories: known.clone(),
            home_sections: known,
            home_card_limit: 4,
            placeholder_image: "https://via.placeholder.com/250x200?text=No+Image".to_string(),
            fallback_image: "https://via.placeholder.com/250".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    pub whatsapp_number: String,
    pub grid_message: String,
    pub favorites_message: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "94740611225".to_string(),
            grid_message: "Hi RD Trading, I am interested in {name}".to_string(),
            favorites_message: "Hi RD Traders, I want to buy {name} ".to_string(),
        }
    }
}

impl ContactConfig {
    /// Messaging deep link. The product name is inserted as-is, without
    /// URL escaping.
    pub fn enquiry_link(&self, template: &str, product_name: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp_number,
            template.replace(NAME_PLACEHOLDER, product_name)
        )
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SliderConfig {
    pub interval_secs: u32,
    pub slides: Vec<SlideConfig>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        let slide = |title: &str, subtitle: &str, image: &str| SlideConfig {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            image: image.to_string(),
        };
        Self {
            interval_secs: 10,
            slides: vec![
                slide(
                    "Whiteboards & Greenboards",
                    "Classroom and office boards in every size",
                    "images/slide-boards.jpg",
                ),
                slide(
                    "Office Partitions",
                    "Made to order for your workspace",
                    "images/slide-partitions.jpg",
                ),
                slide(
                    "Carrom & Chess",
                    "Quality game boards for home and club",
                    "images/slide-games.jpg",
                ),
            ],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SlideConfig {
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

impl SiteConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// The configuration shipped with the bundle.
    pub fn embedded() -> Self {
        match Self::from_toml_str(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Embedded configuration is broken: {}", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = SiteConfig::from_toml_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.storage.favorites_key, "scanLankaFavs");
        assert_eq!(config.catalog.home_card_limit, 4);
        assert_eq!(config.slider.slides.len(), 3);
    }

    #[test]
    fn test_embedded_matches_code_defaults() {
        assert_eq!(SiteConfig::embedded(), SiteConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [contact]
            whatsapp_number = "15550001111"
            "#,
        )
        .unwrap();

        assert_eq!(config.contact.whatsapp_number, "15550001111");
        assert_eq!(config.contact.grid_message, ContactConfig::default().grid_message);
        assert_eq!(config.sheet, SheetConfig::default());
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(SiteConfig::from_toml_str("[catalog]\nhome_card_limit = \"four\"").is_err());
    }

    #[test]
    fn test_enquiry_link_is_not_escaped() {
        let contact = ContactConfig::default();
        let link = contact.enquiry_link(&contact.grid_message, "Board & Stand");
        assert_eq!(
            link,
            "https://wa.me/94740611225?text=Hi RD Trading, I am interested in Board & Stand"
        );
    }
}
