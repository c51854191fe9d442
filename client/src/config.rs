use bimap::BiMap;
use blockfall::{config::Config as GameConfig, input::Intent};
use strum::IntoEnumIterator;

pub type Keybinds = BiMap<Intent, String>;

pub struct Config {
    pub game: GameConfig,

    // visual settings
    pub square_width: usize,

    // controls, by `KeyboardEvent.key`
    pub keybinds: Keybinds,
}

impl Config {
    // keys without a binding are ignored
    pub fn intent_for_key(&self, key: &str) -> Option<Intent> { self.keybinds.get_by_right(key).copied() }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            game: GameConfig::default(),
            square_width: 30,
            keybinds: Intent::iter().map(|i| (i, i.default_key().to_string())).collect(),
        }
    }
}
