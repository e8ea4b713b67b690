//! Sign-in and public athlete/plan pages.

use log::{debug, error, info};

use crate::error::{ClientError, Result};
use crate::models::{Athlete, AthletePublicInfo, PlanAndUsernameInfo, PlanPublicInfo, SignInRequest};

use super::ApiClient;

/// Page size used for professional plan listings when the caller has no preference.
pub const DEFAULT_PLANS_PAGE_SIZE: u32 = 5;

impl ApiClient {
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<Athlete> {
        let url = format!("{}/sign-in", self.workouts_url());
        debug!("Signing in at: {url}");

        let request = self.with_auth_headers(self.client.post(&url)).json(request);
        let body = self.send_quiet(request, "Sign in").await?;
        let athlete: Athlete = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse sign-in response: {e}");
            ClientError::Parse(e)
        })?;

        info!("Signed in athlete {}", athlete.user_id);
        Ok(athlete)
    }

    // The show/* endpoints are public and sent without credentials.

    pub async fn fetch_user_public_info(&self, username: &str) -> Result<AthletePublicInfo> {
        let url = format!(
            "{}/v1/show/athletes/{}",
            self.workouts_base_uri,
            urlencoding::encode(username)
        );
        debug!("Fetching public info for {username}");
        self.send_json(self.client.get(&url), "Fetch athlete public info")
            .await
    }

    /// `plan_offer_id` is only sent when given.
    pub async fn fetch_plan_info(
        &self,
        plan_id: &str,
        plan_offer_id: Option<&str>,
    ) -> Result<PlanAndUsernameInfo> {
        let url = format!(
            "{}/v1/show/plans/{}",
            self.workouts_base_uri,
            urlencoding::encode(plan_id)
        );
        debug!("Fetching plan info for {plan_id} (offer: {plan_offer_id:?})");

        let mut request = self.client.get(&url);
        if let Some(offer_id) = plan_offer_id {
            request = request.query(&[("planOfferId", offer_id)]);
        }
        self.send_json(request, "Fetch plan info").await
    }

    pub async fn fetch_plans_info(
        &self,
        username: &str,
        offset: u32,
        take: u32,
    ) -> Result<Vec<PlanPublicInfo>> {
        let url = format!(
            "{}/v1/show/professionals/{}/plans",
            self.workouts_base_uri,
            urlencoding::encode(username)
        );
        debug!("Fetching plans for {username} (offset {offset}, take {take})");

        let request = self
            .client
            .get(&url)
            .query(&[("offset", offset.to_string()), ("take", take.to_string())]);
        self.send_json(request, "Fetch plans info").await
    }
}
