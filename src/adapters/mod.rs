// Adapters layer: concrete implementations of the domain ports (host page, storage).

pub mod html_document;
pub mod storage;

pub use html_document::HtmlDocument;
pub use storage::LocalStorage;
