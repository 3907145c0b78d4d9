//! Interchangeable presentation configurations
//!
//! The four landing-page variants are alternate skins over the same
//! lead-capture contract: one controller, four configuration values. Copy
//! and imagery live here as data; no code path branches on the variant.

use shared::SiteKey;

/// Copy and theming for one landing-page variant
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SitePresentation {
    pub site: SiteKey,
    pub display_name: String,
    pub tagline: String,
    pub phone: String,
    pub hero_image: String,
    /// Palette accent, hex
    pub accent: String,
}

impl SitePresentation {
    fn variant(key: &str, tagline: &str, hero_image: &str, accent: &str) -> Self {
        Self {
            site: SiteKey::new(key),
            display_name: "Welsh Mole Catcher".to_string(),
            tagline: tagline.to_string(),
            phone: "07375 303124".to_string(),
            hero_image: hero_image.to_string(),
            accent: accent.to_string(),
        }
    }

    /// The original page's look
    pub fn classic() -> Self {
        Self::variant(
            "welshmolecatcher-classic",
            "Traditional Pest Control in the Heart of Wales",
            "/moles_collage.jpg",
            "#a8c686",
        )
    }

    pub fn woodland() -> Self {
        Self::variant(
            "welshmolecatcher-woodland",
            "Rooted in the Welsh Countryside",
            "/farm_son.jpg",
            "#8ba567",
        )
    }

    pub fn slate() -> Self {
        Self::variant(
            "welshmolecatcher-slate",
            "Family-Run Mole Catching for Farms and Rural Homes",
            "/farm_john_mole.jpg",
            "#785f45",
        )
    }

    pub fn harvest() -> Self {
        Self::variant(
            "welshmolecatcher-harvest",
            "Time-Honored Traps, Safe for Land and Livestock",
            "/farm_moles.jpg",
            "#d4c9a5",
        )
    }

    /// All shipped variants
    pub fn all() -> Vec<Self> {
        vec![
            Self::classic(),
            Self::woodland(),
            Self::slate(),
            Self::harvest(),
        ]
    }

    /// Look up a variant by its site key
    pub fn by_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.site.as_str() == key)
    }

    /// Contact banner shown above the form
    pub fn contact_banner(&self) -> String {
        format!("Call us at {} or send us a message:", self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_key_finds_every_variant() {
        for presentation in SitePresentation::all() {
            let found = SitePresentation::by_key(presentation.site.as_str()).unwrap();
            assert_eq!(found, presentation);
        }
        assert_eq!(SitePresentation::by_key("welshmolecatcher-neon"), None);
    }

    #[test]
    fn test_variants_share_the_lead_contract_identity() {
        let all = SitePresentation::all();
        assert_eq!(all.len(), 4);

        // Same business behind every skin
        for presentation in &all {
            assert_eq!(presentation.display_name, "Welsh Mole Catcher");
            assert_eq!(presentation.phone, "07375 303124");
        }

        // Distinct site keys on the wire
        let mut keys: Vec<_> = all.iter().map(|p| p.site.as_str().to_string()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 4);
    }
}
