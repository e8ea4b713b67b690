//! Endpoint base URLs.

use super::ApiClient;

impl ApiClient {
    pub fn athletes_base_url(&self) -> String {
        format!("{}/v1/athletes", self.build_base_uri)
    }

    pub fn workouts_url(&self) -> String {
        self.workouts_base_uri.clone()
    }

    pub fn exercise_templates_base_url(&self) -> String {
        format!("{}/v1/exercise-templates", self.build_base_uri)
    }

    pub fn workout_catalog_base_url(&self) -> String {
        format!("{}/v1/workout-templates", self.build_base_uri)
    }

    pub fn catalog_section_base_url(&self) -> String {
        format!("{}/v1/journeys-catalog", self.build_base_uri)
    }

    /// Media endpoints are versioned separately from the rest of the API.
    pub fn images_base_url(&self, version: u32) -> String {
        format!("{}/v{}/images", self.workouts_base_uri, version)
    }

    pub fn journey_templates_base_url(&self) -> String {
        format!("{}/v1/journey-templates", self.build_base_uri)
    }

    pub fn phases_base_url(&self) -> String {
        format!("{}/v1/phases", self.build_base_uri)
    }

    pub fn professionals_public_base_url(&self) -> String {
        format!("{}/v1/professionals", self.build_base_uri)
    }
}
