use shared::variants::VariantConfig;
use web_sys::window;

/// Id of an optional inline `<script type="application/json">` block
/// a host page can use to override the whole variant config.
const CONFIG_ELEMENT_ID: &str = "wheel-config";

/// Resolves which widget variant this page runs.
///
/// Priority: embedded JSON config element, then a `variant=` query
/// parameter, then the classic preset.
pub fn resolve_variant() -> VariantConfig {
    if let Some(config) = embedded_config() {
        return config;
    }

    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if search.contains("variant=weighted") {
        VariantConfig::weighted()
    } else if search.contains("variant=rigged") {
        VariantConfig::rigged()
    } else {
        VariantConfig::classic()
    }
}

fn embedded_config() -> Option<VariantConfig> {
    let text = window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()?;
    match serde_json::from_str(&text) {
        Ok(config) => Some(config),
        Err(err) => {
            log::warn!("ignoring malformed {CONFIG_ELEMENT_ID} block: {err}");
            None
        }
    }
}
