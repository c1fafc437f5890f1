//! Translation lookup for the few static labels the components need.
//!
//! Locale documents are the nested JSON shape Rails style i18n exports
//! (`{"shared": {"viewers": {"plural": "Viewers"}}}`); they are flattened to
//! dotted keys on load.

use std::{collections::HashMap, rc::Rc};

use anyhow::{Context, bail};
use dioxus::logger::tracing::debug;
use serde_json::Value;

/// Label of the lock icon on private stories.
pub const VIEWERS_PLURAL: &str = "shared.viewers.plural";

const DEFAULT_LOCALE: &[(&str, &str)] = &[(VIEWERS_PLURAL, "Viewers")];

/// A flattened translation table, shared through Dioxus context.
#[derive(Debug, Clone, PartialEq)]
pub struct I18n {
    table: Rc<HashMap<String, String>>,
}

impl Default for I18n {
    fn default() -> Self {
        let table = DEFAULT_LOCALE
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            table: Rc::new(table),
        }
    }
}

impl I18n {
    pub fn from_json(json: &str) -> anyhow::Result<I18n> {
        let value: Value = serde_json::from_str(json).context("locale is not valid JSON")?;
        let mut table = HashMap::new();
        flatten("", &value, &mut table)?;
        Ok(Self {
            table: Rc::new(table),
        })
    }

    /// Looks up `key`, falling back to a visible missing-translation marker.
    pub fn t(&self, key: &str) -> String {
        match self.table.get(key) {
            Some(text) => text.clone(),
            None => {
                debug!("missing translation for {key}");
                format!("[missing \"{key}\" translation]")
            }
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) -> anyhow::Result<()> {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, v, out)?;
            }
        }
        Value::String(s) if !prefix.is_empty() => {
            out.insert(prefix.to_string(), s.clone());
        }
        other => bail!("translation {prefix:?} must be a string, got {other}"),
    }
    Ok(())
}
