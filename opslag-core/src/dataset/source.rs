//! Table source strategy.
//!
//! Two screens of the product feed the same pipeline: one uploads a raw CSV
//! file from the browser, the other picks a stored dataset from the
//! registry. Both are variants of "supply raw tabular text".

use async_trait::async_trait;

use crate::dataset::registry::DatasetRegistry;
use crate::dataset::table::ParsedTable;
use crate::error::Result;

/// Capability to supply raw tabular text for parsing.
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn raw_text(&self) -> Result<String>;

    /// Fetch and parse in one step.
    async fn load(&self) -> Result<ParsedTable> {
        Ok(ParsedTable::parse(&self.raw_text().await?))
    }
}

/// Raw text handed over directly by the caller (file upload path).
pub struct Upload {
    text: String,
}

impl Upload {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl TableSource for Upload {
    async fn raw_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// A stored dataset fetched through the registry.
pub struct RegistryFetch<'a> {
    registry: &'a DatasetRegistry,
    identifier: String,
}

impl<'a> RegistryFetch<'a> {
    pub fn new(registry: &'a DatasetRegistry, identifier: impl Into<String>) -> Self {
        Self {
            registry,
            identifier: identifier.into(),
        }
    }
}

#[async_trait]
impl TableSource for RegistryFetch<'_> {
    async fn raw_text(&self) -> Result<String> {
        self.registry.resolve(&self.identifier).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_parses_through_the_same_pipeline() {
        let source = Upload::new("date,body\n2024-01-01,Hello\n");
        let table = source.load().await.unwrap();
        assert_eq!(table.columns, vec!["date", "body"]);
        assert_eq!(table.rows.len(), 1);
    }
}
