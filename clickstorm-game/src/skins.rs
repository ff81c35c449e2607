//! Static skin catalog
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Skin every player starts with and can never lose.
pub const DEFAULT_SKIN_ID: &str = "aren";

/// How a locked skin becomes available.
///
/// Reward skins grant currency when claimed instead of costing it; modelling
/// that as a separate variant keeps the sign of a single cost field from
/// carrying hidden meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SkinPrice {
    Purchasable { cost: f64 },
    Reward { amount: f64 },
}

/// A single cosmetic variant of the click image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skin {
    pub id: String,
    pub name: String,
    /// Image shown while the pointer is up.
    pub normal_img: String,
    /// Image swapped in while the click is held.
    pub click_img: String,
    pub price: SkinPrice,
    /// Listed in the hidden cheat-unlock modal rather than the regular one.
    #[serde(default)]
    pub sigma: bool,
}

/// Complete skin catalog, ordered for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkinCatalog {
    pub skins: Vec<Skin>,
}

impl SkinCatalog {
    /// Find a skin by ID.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Skin> {
        self.skins.iter().find(|skin| skin.id == id)
    }

    /// Skins shown in the regular selection modal.
    pub fn regular(&self) -> impl Iterator<Item = &Skin> {
        self.skins.iter().filter(|skin| !skin.sigma)
    }

    /// Skins gated behind the cheat unlock.
    pub fn sigma(&self) -> impl Iterator<Item = &Skin> {
        self.skins.iter().filter(|skin| skin.sigma)
    }

    /// The built-in catalog shipped with the game.
    #[must_use]
    pub fn default_catalog() -> Self {
        let buy = |id: &str, name: &str, img: &str, cost: f64| Skin {
            id: id.to_string(),
            name: name.to_string(),
            normal_img: format!("skins/{img}1.jpg"),
            click_img: format!("skins/{img}2.jpg"),
            price: SkinPrice::Purchasable { cost },
            sigma: false,
        };
        let sigma = |id: &str, name: &str, img: &str, cost: f64| Skin {
            sigma: true,
            ..buy(id, name, img, cost)
        };
        let skins = vec![
            // Default skin; unlocked from the start so the cost never applies.
            Skin {
                id: DEFAULT_SKIN_ID.to_string(),
                name: "Aren".to_string(),
                normal_img: "skins/click1.jpg".to_string(),
                click_img: "skins/click2.jpg".to_string(),
                price: SkinPrice::Purchasable { cost: 0.0 },
                sigma: false,
            },
            Skin {
                id: "antonsa".to_string(),
                name: "Anton SA".to_string(),
                normal_img: "skins/antonsa1.jpg".to_string(),
                click_img: "skins/antonsa2.jpg".to_string(),
                price: SkinPrice::Reward { amount: 100_000.0 },
                sigma: false,
            },
            buy("messi", "Messi", "messi", 10_000.0),
            buy("cr7", "CR7", "ronaldo", 100_000.0),
            buy("anton3", "Anton 3", "anton3", 1_000_000.0),
            buy("casper2", "Casper 2", "casper2", 1_000_000.0),
            buy("matteo", "Matteo", "matteo", 1_000_000.0),
            buy("unknown", "Unknown Name", "unknown", 1_000_000.0),
            buy("casper", "Casper", "casper", 10_000_000.0),
            buy("eliot", "Eliot", "eliot", 10_000_000.0),
            buy("emil", "Emil", "emil", 10_000_000.0),
            buy("gabbe", "Gabbe", "gabbe", 10_000_000.0),
            buy("julle", "Julle", "julle", 10_000_000.0),
            buy("levi", "Levi", "levi", 10_000_000.0),
            buy("luddain", "Luddain", "luddain", 10_000_000.0),
            buy("ludvig", "Ludvig", "ludvig", 10_000_000.0),
            buy("malte", "Malte", "malte", 10_000_000.0),
            buy("ollibolly", "Ollibolly", "ollibolly", 10_000_000.0),
            buy("seth", "Seth", "seth", 10_000_000.0),
            buy("sixten", "Sixten", "sixten", 10_000_000.0),
            buy("timma", "Timma", "timma", 10_000_000.0),
            buy("wirre", "Wirre", "wirre", 10_000_000.0),
            buy("ture", "Ture", "ture", 100_000_000.0),
            buy("antonsc", "Anton SC", "antonsc", 1_000_000_000.0),
            buy("axel", "Axel", "axel", 1_000_000_000.0),
            buy("emilstekman", "EmilStekman", "emilstekman", 1_000_000_000.0),
            sigma("henry", "Henry", "henri", 1e12),
            sigma("ask", "Ask", "ask", 1e15),
            sigma("albin", "Albin", "albin", 1e27),
        ];
        Self { skins }
    }
}

/// Shared handle to the built-in catalog.
#[must_use]
pub fn default_catalog() -> &'static SkinCatalog {
    static CATALOG: OnceLock<SkinCatalog> = OnceLock::new();
    CATALOG.get_or_init(SkinCatalog::default_catalog)
}
