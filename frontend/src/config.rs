use shared::PageConfig;
use web_sys::Document;

/// Inline `<script type="application/toml">` block carrying page overrides.
const CONFIG_ELEMENT_ID: &str = "memorial-config";

/// Page configuration: inline overrides when present, defaults otherwise.
pub fn load(document: &Document) -> PageConfig {
    let Some(block) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let source = block.text_content().unwrap_or_default();
    match PageConfig::from_toml_str(&source) {
        Ok(config) => {
            zoon::println!("Loaded page config overrides from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(error) => {
            zoon::eprintln!("Ignoring #{CONFIG_ELEMENT_ID}: {error}");
            PageConfig::default()
        }
    }
}
