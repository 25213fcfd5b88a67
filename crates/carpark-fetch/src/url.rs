//! data.gov.sg endpoint.

/// Real-time carpark lot availability, refreshed roughly every minute.
///
/// Takes no query parameters and no authentication.
pub const AVAILABILITY_URL: &str = "https://api.data.gov.sg/v1/transport/carpark-availability";
