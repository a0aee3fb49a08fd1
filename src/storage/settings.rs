//! Settings repository for JSON storage
//!
//! Manages loading and saving named settings to settings.json

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use super::file_io::{read_json, write_json_atomic};
use super::lock_poisoned;
use crate::error::BudgetsResult;
use crate::models::{Setting, SettingName};

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsData {
    settings: Vec<Setting>,
}

pub struct SettingsRepository {
    path: PathBuf,
    data: RwLock<BTreeMap<SettingName, String>>,
}

impl SettingsRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn load(&self) -> BudgetsResult<()> {
        let file_data: SettingsData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(lock_poisoned)?;

        data.clear();
        for setting in file_data.settings {
            data.insert(setting.name, setting.value);
        }
        Ok(())
    }

    pub fn save(&self) -> BudgetsResult<()> {
        let data = self.data.read().map_err(lock_poisoned)?;
        let settings = data
            .iter()
            .map(|(name, value)| Setting::new(*name, value.clone()))
            .collect();
        write_json_atomic(&self.path, &SettingsData { settings })
    }

    /// The stored value, if any
    pub fn get(&self, name: SettingName) -> BudgetsResult<Option<String>> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.get(&name).cloned())
    }

    pub fn set(&self, setting: Setting) -> BudgetsResult<()> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        data.insert(setting.name, setting.value);
        Ok(())
    }

    pub fn clear(&self) -> BudgetsResult<()> {
        self.data.write().map_err(lock_poisoned)?.clear();
        Ok(())
    }
}
