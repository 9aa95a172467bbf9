// Choosing what to look up: typed city, explicit position, home position, default city.
use crate::types::{Coordinates, LocationError, LocationQuery};

/// Position to use for a lookup: explicit coordinates first, then home.
pub fn locate(
    explicit: Option<Coordinates>,
    home: Option<Coordinates>,
) -> Result<Coordinates, LocationError> {
    let coords = explicit.or(home).ok_or(LocationError::ServiceUnavailable)?;
    if !coords.is_valid() {
        return Err(LocationError::Invalid(coords));
    }
    Ok(coords)
}

impl LocationQuery {
    /// Build the query for a lookup.
    ///
    /// A non-empty city wins. Otherwise the position from [`locate`] is used,
    /// and when no usable position exists the default city is looked up.
    pub fn resolve(
        city: Option<&str>,
        explicit: Option<Coordinates>,
        home: Option<Coordinates>,
        default_city: &str,
    ) -> Self {
        if let Some(city) = city.map(str::trim).filter(|c| !c.is_empty()) {
            return Self::City(city.to_string());
        }

        match locate(explicit, home) {
            Ok(coords) => {
                tracing::debug!("Using position {}", coords);
                Self::Coordinates(coords)
            }
            Err(e) => {
                tracing::info!("{}; falling back to {}", e, default_city);
                Self::City(default_city.to_string())
            }
        }
    }
}
