use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_source(&self) -> &str;
    fn container_id(&self) -> &str;
    fn company_name_class(&self) -> &str;
    fn slogan_class(&self) -> &str;
}

/// Where the raw site data comes from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>>;

    /// Human readable location, used in diagnostics.
    fn location(&self) -> String;
}

/// Something that accepts markup and replaces its whole content with it.
pub trait RenderTarget {
    fn replace_content(&mut self, markup: &str) -> Result<()>;
}

/// The page hosting the render target.
pub trait HostPage {
    fn has_element_with_id(&self, id: &str) -> Result<bool>;

    /// Sets the text of every element carrying `class`. Returns how many were updated.
    fn set_text_by_class(&mut self, class: &str, text: &str) -> Result<usize>;

    fn container(&mut self, id: &str) -> Result<Option<Box<dyn RenderTarget + '_>>>;
}
