use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::providers::ProviderKey;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Overrides the built-in generation gateway URL.
    pub gateway_url: Option<String>,
    /// Providers the user has switched off; they keep their slides but sit
    /// out generation requests.
    #[serde(default)]
    pub disabled_providers: Vec<ProviderKey>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gateway_url: None,
            disabled_providers: Vec::new(),
        }
    }
}

impl Settings {
    /// Get the platform-specific settings directory
    pub fn settings_dir() -> Result<PathBuf, String> {
        let config_dir = if cfg!(target_os = "windows") {
            // Windows: %APPDATA%\imgarena
            dirs::config_dir()
                .ok_or("Could not find config directory")?
                .join("imgarena")
        } else if cfg!(target_os = "macos") {
            // macOS: ~/Library/Application Support/imgarena
            dirs::config_dir()
                .ok_or("Could not find config directory")?
                .join("imgarena")
        } else {
            // Linux/Unix: $HOME/.imgarena
            dirs::home_dir()
                .ok_or("Could not find home directory")?
                .join(".imgarena")
        };

        Ok(config_dir)
    }

    /// Get the full path to the settings file
    pub fn settings_path() -> Result<PathBuf, String> {
        Ok(Self::settings_dir()?.join("settings.toml"))
    }

    /// Load settings from the config file
    pub fn load() -> Result<Self, String> {
        let path = Self::settings_path()?;

        if !path.exists() {
            // Return default settings if file doesn't exist
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read settings file: {}", e))?;

        let settings: Settings = toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse settings file: {}", e))?;

        Ok(settings)
    }

    /// Save settings to the config file
    pub fn save(&self) -> Result<(), String> {
        let dir = Self::settings_dir()?;

        // Create directory if it doesn't exist
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .map_err(|e| format!("Failed to create settings directory: {}", e))?;
        }

        let path = Self::settings_path()?;
        let contents = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(&path, contents)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        // Set proper permissions on Unix-like systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)
                .map_err(|e| format!("Failed to get file metadata: {}", e))?
                .permissions();
            perms.set_mode(0o600); // Read/write for owner only
            fs::set_permissions(&path, perms)
                .map_err(|e| format!("Failed to set file permissions: {}", e))?;
        }

        Ok(())
    }

    pub fn gateway_url(&self) -> Option<&str> {
        self.gateway_url.as_deref()
    }

    pub fn is_disabled(&self, key: ProviderKey) -> bool {
        self.disabled_providers.contains(&key)
    }

    pub fn set_disabled(&mut self, key: ProviderKey, disabled: bool) {
        if disabled {
            if !self.disabled_providers.contains(&key) {
                self.disabled_providers.push(key);
            }
        } else {
            self.disabled_providers.retain(|k| *k != key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.gateway_url, None);
        assert!(settings.disabled_providers.is_empty());
    }

    #[test]
    fn test_toggle_disabled_provider() {
        let mut settings = Settings::default();
        assert!(!settings.is_disabled(ProviderKey::Fal));

        settings.set_disabled(ProviderKey::Fal, true);
        settings.set_disabled(ProviderKey::Fal, true);
        assert!(settings.is_disabled(ProviderKey::Fal));
        assert_eq!(settings.disabled_providers.len(), 1);

        settings.set_disabled(ProviderKey::Fal, false);
        assert!(!settings.is_disabled(ProviderKey::Fal));
    }

    #[test]
    fn test_settings_roundtrip_through_toml() {
        let mut settings = Settings::default();
        settings.gateway_url = Some("http://gateway.local:9000".to_string());
        settings.set_disabled(ProviderKey::Gemini, true);

        let serialized = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.gateway_url.as_deref(), Some("http://gateway.local:9000"));
        assert!(parsed.is_disabled(ProviderKey::Gemini));
    }
}
