use crate::core::bootstrap::{DEFAULT_COMPANY_NAME_CLASS, DEFAULT_CONTAINER_ID, DEFAULT_SLOGAN_CLASS};
use crate::core::loader::DEFAULT_DATA_SOURCE;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_data_source, validate_html_identifier, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub host: HostConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub data: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA_SOURCE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub container_id: String,
    pub company_name_class: String,
    pub slogan_class: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            company_name_class: DEFAULT_COMPANY_NAME_CLASS.to_string(),
            slogan_class: DEFAULT_SLOGAN_CLASS.to_string(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_DATA_URL})，未設定的變數保留原文
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn data_source(&self) -> &str {
        &self.source.data
    }

    fn container_id(&self) -> &str {
        &self.host.container_id
    }

    fn company_name_class(&self) -> &str {
        &self.host.company_name_class
    }

    fn slogan_class(&self) -> &str {
        &self.host.slogan_class
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_data_source("source.data", &self.source.data)?;
        validate_html_identifier("host.container_id", &self.host.container_id)?;
        validate_html_identifier("host.company_name_class", &self.host.company_name_class)?;
        validate_html_identifier("host.slogan_class", &self.host.slogan_class)?;
        Ok(())
    }
}
