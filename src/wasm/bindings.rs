//! JavaScript bindings for the transliterator

use super::utils::to_js;
use crate::recipe::TransliterationRecipe;
use crate::registry::StageConfig;
use crate::tables::TableSet;
use crate::transliterator::Transliterator;
use wasm_bindgen::prelude::*;

/// Table data supplied from JavaScript
#[wasm_bindgen]
#[derive(Default)]
pub struct WasmTableSet {
    inner: TableSet,
}

#[wasm_bindgen]
impl WasmTableSet {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one table (e.g. the bytes of `kanji-old-new.data`)
    #[wasm_bindgen(js_name = load)]
    pub fn load(&mut self, name: &str, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner.load_bytes(name, bytes).map_err(to_js)
    }
}

/// JavaScript-friendly wrapper for Transliterator
#[wasm_bindgen]
pub struct WasmTransliterator {
    inner: Transliterator,
}

#[wasm_bindgen]
impl WasmTransliterator {
    /// Build from a recipe given as JSON
    #[wasm_bindgen(constructor)]
    pub fn new(recipe_json: &str) -> Result<WasmTransliterator, JsValue> {
        let recipe = TransliterationRecipe::from_json(recipe_json).map_err(to_js)?;
        let inner = Transliterator::from_recipe(&recipe).map_err(to_js)?;
        Ok(Self { inner })
    }

    /// Build from a recipe that needs table data
    #[wasm_bindgen(js_name = withTables)]
    pub fn with_tables(
        recipe_json: &str,
        tables: &WasmTableSet,
    ) -> Result<WasmTransliterator, JsValue> {
        let recipe = TransliterationRecipe::from_json(recipe_json).map_err(to_js)?;
        let inner = Transliterator::from_recipe_with_tables(&recipe, &tables.inner).map_err(to_js)?;
        Ok(Self { inner })
    }

    /// Build from a JSON array of stage configs
    #[wasm_bindgen(js_name = fromConfigs)]
    pub fn from_configs(
        configs_json: &str,
        tables: Option<WasmTableSet>,
    ) -> Result<WasmTransliterator, JsValue> {
        let configs: Vec<StageConfig> = serde_json::from_str(configs_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid JSON: {}", e)))?;
        let tables = tables.map(|t| t.inner).unwrap_or_default();
        let inner = Transliterator::from_configs_with_tables(&configs, &tables).map_err(to_js)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = transliterate)]
    pub fn transliterate(&self, input: &str) -> String {
        self.inner.transliterate(input)
    }

    /// Stage names in pipeline order
    #[wasm_bindgen(js_name = stageNames)]
    pub fn stage_names(&self) -> Vec<String> {
        self.inner
            .stage_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
