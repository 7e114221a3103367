//! Access credentials for the remote source.
//!
//! Both values are mandatory; without them the run stops before fetching.

use crate::errors::{AppError, AppResult};

pub const TOKEN_ENV: &str = "STRAVA_ACCESS_TOKEN";
pub const CLUB_ENV: &str = "STRAVA_CLUB_ID";

#[derive(Clone)]
pub struct Credentials {
    pub access_token: String,
    pub club_id: u64,
}

// never print the token
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"***")
            .field("club_id", &self.club_id)
            .finish()
    }
}

impl Credentials {
    pub fn resolve(token: Option<&str>, club: Option<&str>) -> AppResult<Self> {
        let access_token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Config(format!("missing access token (set {TOKEN_ENV})")))?;

        let club = club
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::Config(format!("missing club id (set {CLUB_ENV})")))?;

        let club_id = club
            .parse::<u64>()
            .map_err(|_| AppError::Config(format!("invalid club id '{club}'")))?;

        if club_id == 0 {
            return Err(AppError::Config("club id must not be 0".to_string()));
        }

        Ok(Self {
            access_token: access_token.to_string(),
            club_id,
        })
    }
}
