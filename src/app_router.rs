use gloo::console;
use web_sys::UrlSearchParams;

use organelle_match_core::InputMode;

pub(crate) const DEFAULT_POPUP_MS: u32 = 6000;
const DEFAULT_SUCCESS_SOUND: &str = "sounds/success.mp3";

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct InitConfig {
    /// Skips touch detection when set.
    pub(crate) input_override: Option<InputMode>,
    /// Every round reuses this seed when set.
    pub(crate) seed: Option<u32>,
    /// 0 keeps the popup open until the next round.
    pub(crate) popup_ms: u32,
    pub(crate) success_sound: String,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            input_override: None,
            seed: None,
            popup_ms: DEFAULT_POPUP_MS,
            success_sound: default_success_sound(),
        }
    }
}

pub(crate) fn load_init_config() -> InitConfig {
    let Some(window) = web_sys::window() else {
        return InitConfig::default();
    };
    let search = window.location().search().unwrap_or_default();
    init_config_from_query(&search)
}

pub(crate) fn init_config_from_query(search: &str) -> InitConfig {
    let mut config = InitConfig::default();
    let search = search.trim();
    if search.is_empty() {
        return config;
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return config;
    };
    if let Some(raw) = params.get("input") {
        match InputMode::parse(&raw) {
            Some(mode) => config.input_override = Some(mode),
            None => console::warn!(format!("ignoring input={raw}")),
        }
    }
    if let Some(raw) = params.get("seed") {
        match parse_optional_seed(&raw) {
            Some(seed) => config.seed = Some(seed),
            None => console::warn!(format!("ignoring seed={raw}")),
        }
    }
    if let Some(raw) = params.get("popup_ms") {
        match raw.trim().parse::<u32>() {
            Ok(ms) => config.popup_ms = ms,
            Err(_) => console::warn!(format!("ignoring popup_ms={raw}")),
        }
    }
    config
}

pub(crate) fn parse_optional_seed(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (value, radix) = if let Some(rest) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        (rest, 16)
    } else {
        (trimmed, 10)
    };
    u32::from_str_radix(value, radix).ok()
}

fn default_success_sound() -> String {
    if let Some(raw) = option_env!("ORGANELLE_SUCCESS_SOUND")
        .or(option_env!("TRUNK_PUBLIC_ORGANELLE_SUCCESS_SOUND"))
    {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    DEFAULT_SUCCESS_SOUND.to_string()
}
