//! Catalog collections (phases, journey catalog sections, journey templates).

use crate::error::Result;
use crate::models::{JourneyTemplate, JourneyTemplatesSection, Phase};

use super::ApiClient;

impl ApiClient {
    pub async fn phases(&self) -> Result<Vec<Phase>> {
        self.fetch_all(&self.phases_base_url()).await
    }

    pub async fn catalog_sections(&self) -> Result<Vec<JourneyTemplatesSection>> {
        self.fetch_all(&self.catalog_section_base_url()).await
    }

    pub async fn journey_templates(&self) -> Result<Vec<JourneyTemplate>> {
        self.fetch_all(&self.journey_templates_base_url()).await
    }
}
