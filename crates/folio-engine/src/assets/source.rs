use crate::api::config::DEFAULT_ASSET_PATH;

/// Location of the scene asset: a site-relative path or an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSource {
    uri: String,
}

impl AssetSource {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Last path segment without query or fragment, for log messages.
    pub fn file_name(&self) -> &str {
        let end = self.uri.find(|c: char| c == '?' || c == '#').unwrap_or(self.uri.len());
        let path = &self.uri[..end];
        path.rsplit('/').next().unwrap_or(path)
    }
}

impl Default for AssetSource {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_PATH)
    }
}
