//! Default values for configuration options.

/// Default path written by `seq-teams init`.
pub const CONFIG_FILE: &str = "seq-teams.toml";

/// Default Seq base URL. Empty, which yields relative permalinks.
pub const BASE_URL: &str = "";
