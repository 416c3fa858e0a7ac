use crate::parsing::normalize::DescriptionSelector;

/// Base URL of the pokemon resource; the item number is appended directly
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon/";

/// The first generation
pub const DEFAULT_COUNT: u32 = 151;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_VERSION: &str = "red";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for one catalog load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Prefix for pokemon lookups (`{base_url}{number}`)
    pub base_url: String,
    /// Items `1..=count` are fetched
    pub count: u32,
    /// Flavor text language code
    pub language: String,
    /// Flavor text game version code
    pub version: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Items in flight at once; 1 keeps the load strictly sequential
    pub max_concurrent: usize,
}

impl FetchConfig {
    pub fn selector(&self) -> DescriptionSelector {
        DescriptionSelector::new(&self.language, &self.version)
    }

    /// URL of the pokemon resource for `number`
    pub fn pokemon_url(&self, number: u32) -> String {
        format!("{}{}", self.base_url, number)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            count: DEFAULT_COUNT,
            language: DEFAULT_LANGUAGE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("pokedex/", env!("CARGO_PKG_VERSION")).to_string(),
            max_concurrent: 1,
        }
    }
}
