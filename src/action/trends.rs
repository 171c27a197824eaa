//! Trending topics action and WOEID resolution.

use tracing::{debug, warn};

use crate::action::require_non_empty;
use crate::client::TwitterApiClient;
use crate::error::ValidationError;
use crate::reply::{Reply, TrendCard};

/// The WOEID covering worldwide trends.
pub const WORLDWIDE_WOEID: i64 = 1;

#[derive(Debug, Clone)]
enum TrendScope {
    /// An explicit (or default worldwide) WOEID
    Woeid(i64),

    /// A place name, resolved against the available-locations list at
    /// execution time
    Place(String),
}

/// Fetches the trending topics for a location and maps each trend to
/// a [`TrendCard`].
///
/// Three mutually exclusive construction paths: no location
/// (worldwide), an explicit WOEID, or a place name resolved through
/// [`resolve_woeid`]. A name that resolves to nothing suppresses the
/// trends fetch entirely and yields the empty reply; there is no
/// silent worldwide fallback.
#[derive(Debug, Clone)]
pub struct GetTrends {
    scope: TrendScope,
}

impl GetTrends {
    /// Worldwide trends (WOEID 1).
    #[must_use]
    pub const fn worldwide() -> Self {
        Self {
            scope: TrendScope::Woeid(WORLDWIDE_WOEID),
        }
    }

    /// Trends for an explicit WOEID.
    ///
    /// # Errors
    ///
    /// Fails when `woeid` is not positive.
    pub const fn for_woeid(woeid: i64) -> Result<Self, ValidationError> {
        if woeid < 1 {
            return Err(ValidationError::NotPositive {
                field: "woeid",
                value: woeid,
            });
        }

        Ok(Self {
            scope: TrendScope::Woeid(woeid),
        })
    }

    /// Trends for a place name, resolved case-insensitively against
    /// the service's available trend locations.
    ///
    /// # Errors
    ///
    /// Fails when `location_name` is empty.
    pub fn for_place(location_name: impl Into<String>) -> Result<Self, ValidationError> {
        let location_name = location_name.into();
        require_non_empty("location_name", &location_name)?;

        Ok(Self {
            scope: TrendScope::Place(location_name),
        })
    }

    /// The WOEID this action will fetch, when it was fixed at
    /// construction time. `None` for the place-name path, which
    /// resolves during execution.
    #[must_use]
    pub const fn woeid(&self) -> Option<i64> {
        match &self.scope {
            TrendScope::Woeid(woeid) => Some(*woeid),
            TrendScope::Place(_) => None,
        }
    }

    pub async fn execute(&self, client: &TwitterApiClient) -> Reply {
        let woeid = match &self.scope {
            TrendScope::Woeid(woeid) => *woeid,
            TrendScope::Place(name) => resolve_woeid(client, name).await,
        };

        // An unresolved place name comes back as -1: nothing to fetch.
        if woeid <= 0 {
            debug!(woeid, "no location to fetch trends for");
            return Reply::Empty;
        }

        let places = match client.get_place_trends(woeid).await {
            Ok(places) => places,
            Err(error) => {
                warn!(%error, woeid, "failed to fetch trends");
                return Reply::Failed;
            }
        };

        let cards = places
            .iter()
            .flat_map(|place| place.trends.iter())
            .map(|trend| TrendCard::new(trend.name.clone(), trend.url.clone(), trend.tweet_volume))
            .collect();

        Reply::from_trends(cards)
    }
}

/// Resolve a place name to its WOEID by scanning the available trend
/// locations.
///
/// Matching is case-insensitive on exact name equality, first match
/// wins. Returns -1 when nothing matches; a failed listing also
/// resolves to -1, which callers treat as "nothing to fetch" rather
/// than a hard failure.
pub async fn resolve_woeid(client: &TwitterApiClient, location_name: &str) -> i64 {
    let locations = match client.get_available_trend_locations().await {
        Ok(locations) => locations,
        Err(error) => {
            warn!(%error, "failed to list available trend locations");
            return -1;
        }
    };

    let wanted = location_name.to_lowercase();
    locations
        .iter()
        .find(|location| location.name.to_lowercase() == wanted)
        .map_or(-1, |location| location.woeid)
}
