use crate::error::Result;
use crate::naming::DEFAULT_FIELD_PREFIX;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

const CONFIG_FILENAME: &str = "docenum.json";

/// Compiler settings, stored in `docenum.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnumConfig {
    /// Prefix of the backing field (`"_"` turns `status` into `_status`)
    #[serde(default = "default_field_prefix")]
    pub field_prefix: String,

    /// Whether scalar enums reject an unset field when the declaration
    /// does not say
    #[serde(default = "default_required")]
    pub required_by_default: bool,
}

fn default_field_prefix() -> String {
    DEFAULT_FIELD_PREFIX.to_string()
}

fn default_required() -> bool {
    true
}

impl Default for EnumConfig {
    fn default() -> Self {
        Self {
            field_prefix: default_field_prefix(),
            required_by_default: default_required(),
        }
    }
}

impl EnumConfig {
    /// Read `docenum.json` from `config_dir`. A missing file gives the defaults.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let content = match fs::read_to_string(config_dir.as_ref().join(CONFIG_FILENAME)) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };
        let config: EnumConfig = serde_json::from_str(&content)?;
        Ok(config.normalized())
    }

    /// Write `docenum.json` into `config_dir`, creating the directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn field_prefix(&self) -> &str {
        &self.field_prefix
    }

    pub fn set_field_prefix(&mut self, prefix: &str) {
        self.field_prefix = prefix.to_string();
        self.normalize_prefix();
    }

    fn normalized(mut self) -> Self {
        self.normalize_prefix();
        self
    }

    /// An empty prefix would make the backing field collide with its alias.
    fn normalize_prefix(&mut self) {
        if self.field_prefix.is_empty() {
            self.field_prefix = default_field_prefix();
        }
    }
}
