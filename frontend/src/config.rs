use shared::constants::PLAY_ENDPOINT;
use shared::SlotConfig;
use web_sys::window;

/// Id of the optional `<script type="application/json">` block holding
/// slot machine overrides.
pub const SLOT_CONFIG_ELEMENT_ID: &str = "slot-config";

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(location) = window.location().host() {
            // Same origin as the page, port included, so the game works when
            // served from another machine on the network
            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, location);
        }
    }

    // Flask development server
    "http://127.0.0.1:5000".to_string()
}

pub fn get_play_url() -> String {
    format!("{}{}", get_api_base_url(), PLAY_ENDPOINT)
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", get_api_base_url(), path)
    }
}

/// Reads the page's slot config block. Falls back to the defaults when the
/// block is missing, malformed or fails validation.
pub fn load_slot_config() -> SlotConfig {
    let json = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SLOT_CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    let Some(json) = json else {
        return SlotConfig::default();
    };

    match SlotConfig::from_json(&json) {
        Ok(config) => {
            log::info!("Loaded slot config from #{}", SLOT_CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::warn!("Ignoring #{}: {}", SLOT_CONFIG_ELEMENT_ID, e);
            SlotConfig::default()
        }
    }
}
