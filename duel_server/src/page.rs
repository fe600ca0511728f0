//! The game page, with the server's game config baked into it

use anyhow::bail;
use duel_core::GameConfig;

/// Element the browser bundle reads its config overrides from, as shipped in `index.html`
pub const CONFIG_SLOT: &str = r#"<script id="duel-config" type="application/json">{}</script>"#;

pub fn inject_config(template: &str, config: &GameConfig) -> anyhow::Result<String> {
    if !template.contains(CONFIG_SLOT) {
        bail!("index page has no `duel-config` slot");
    }

    let filled = format!(
        r#"<script id="duel-config" type="application/json">{}</script>"#,
        serde_json::to_string(config)?
    );
    Ok(template.replacen(CONFIG_SLOT, &filled, 1))
}
