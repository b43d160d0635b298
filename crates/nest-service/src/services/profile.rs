//! Profile service
//!
//! One profile per user, upserted as a whole-field partial update.

use chrono::Utc;
use tracing::{info, instrument};

use nest_core::entities::{Profile, ProfilePatch};
use nest_core::error::DomainError;
use nest_core::value_objects::Snowflake;

use crate::dto::ProfileResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The acting user's profile; absent means they have not onboarded yet
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Snowflake) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or(DomainError::ProfileNotFound)?;

        Ok(ProfileResponse::from(profile))
    }

    /// Create the profile if absent, otherwise overwrite the provided fields
    #[instrument(skip(self, patch))]
    pub async fn upsert(
        &self,
        user_id: Snowflake,
        patch: ProfilePatch,
    ) -> ServiceResult<ProfileResponse> {
        let existing = self.ctx.profile_repo().find_by_user(user_id).await?;

        let profile = match existing {
            Some(mut profile) => {
                patch.apply_to(&mut profile);
                profile.updated_at = Utc::now();
                self.ctx.profile_repo().update(&profile).await?;
                profile
            }
            None => {
                let now = Utc::now();
                let mut profile = Profile {
                    id: self.ctx.generate_id(),
                    user_id,
                    created_at: now,
                    updated_at: now,
                    ..Default::default()
                };
                patch.apply_to(&mut profile);
                self.ctx.profile_repo().create(&profile).await?;
                info!(user_id = %user_id, "Profile created");
                profile
            }
        };

        Ok(ProfileResponse::from(profile))
    }

    /// Point the profile's resume at a stored file, creating the profile
    /// if the user has none yet
    #[instrument(skip(self))]
    pub async fn set_resume(
        &self,
        user_id: Snowflake,
        path: String,
    ) -> ServiceResult<ProfileResponse> {
        let patch = ProfilePatch {
            resume: Some(path),
            ..Default::default()
        };
        self.upsert(user_id, patch).await
    }
}

#[cfg(test)]
mod tests {
    // Patch semantics are unit-tested on ProfilePatch; upsert flows are
    // covered by the integration test crate.
}
