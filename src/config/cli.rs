use crate::core::bootstrap::{DEFAULT_COMPANY_NAME_CLASS, DEFAULT_CONTAINER_ID, DEFAULT_SLOGAN_CLASS};
use crate::core::loader::DEFAULT_DATA_SOURCE;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_data_source, validate_html_identifier, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "site-populate")]
#[command(about = "Populate a site page from its JSON data file")]
pub struct CliConfig {
    /// Host HTML page to populate
    #[arg(long)]
    pub host_page: String,

    /// Navigation location of the page (defaults to /<host page file name>)
    #[arg(long)]
    pub location: Option<String>,

    #[arg(long, default_value = DEFAULT_DATA_SOURCE)]
    pub data_source: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Print the populated page instead of writing it")]
    pub stdout: bool,

    #[arg(long, default_value = DEFAULT_CONTAINER_ID)]
    pub container_id: String,

    #[arg(long, default_value = DEFAULT_COMPANY_NAME_CLASS)]
    pub company_name_class: String,

    #[arg(long, default_value = DEFAULT_SLOGAN_CLASS)]
    pub slogan_class: String,

    /// TOML file overriding the data source and host page ids
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn host_file_name(&self) -> String {
        Path::new(&self.host_page)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn host_dir(&self) -> Option<PathBuf> {
        Path::new(&self.host_page)
            .parent()
            .map(Path::to_path_buf)
    }

    pub fn location(&self) -> String {
        self.location
            .clone()
            .unwrap_or_else(|| format!("/{}", self.host_file_name()))
    }
}

impl ConfigProvider for CliConfig {
    fn data_source(&self) -> &str {
        &self.data_source
    }

    fn container_id(&self) -> &str {
        &self.container_id
    }

    fn company_name_class(&self) -> &str {
        &self.company_name_class
    }

    fn slogan_class(&self) -> &str {
        &self.slogan_class
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("host_page", &self.host_page)?;
        validate_data_source("data_source", &self.data_source)?;
        if !self.stdout {
            validate_path("output_path", &self.output_path)?;
        }
        validate_html_identifier("container_id", &self.container_id)?;
        validate_html_identifier("company_name_class", &self.company_name_class)?;
        validate_html_identifier("slogan_class", &self.slogan_class)?;
        Ok(())
    }
}
