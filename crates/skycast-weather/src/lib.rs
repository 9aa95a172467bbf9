//! Weather lookup for SkyCast
//!
//! Resolves condition codes to icons, formats temperatures and local times,
//! and fetches current conditions from the OpenWeatherMap API.

pub mod condition;
pub mod format;
pub mod location;
pub mod openweather;
pub mod provider;
pub mod session;
pub mod types;
pub mod view;

pub use condition::{categorize, resolve, ConditionCategory, IconReference, FALLBACK_ICON};
pub use provider::WeatherProvider;
pub use session::{FetchState, WeatherSession};
pub use types::*;
pub use view::WeatherView;
