use serde::{Deserialize, Serialize};

/// A driver entry for one session, from `/drivers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub driver_number: i64,

    /// Name as shown on TV graphics, e.g. `M VERSTAPPEN`.
    pub broadcast_name: String,

    pub full_name: String,

    /// Three-letter abbreviation, e.g. `VER`.
    pub name_acronym: String,

    pub meeting_key: i64,

    pub session_key: i64,

    #[serde(default)]
    pub country_code: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub headshot_url: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    /// Hex colour without the leading `#`.
    #[serde(default)]
    pub team_colour: Option<String>,

    #[serde(default)]
    pub team_name: Option<String>,
}
