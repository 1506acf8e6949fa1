//! Dashboard storage directory names (v0.1)
//!
//! Names of directories used only by the dashboard (not part of the protocol
//! with hosts). A static lookup table; no behavior.

pub const ABORT_REQUEST_LOGS: &str = "aborts";

pub const FUNCTION_STATISTICS: &str = "functions/stats";
pub const FUNCTION_INSTANCES: &str = "functions/instances";

pub const FUNCTIONS: &str = "functions";
pub const HOSTS: &str = "hosts";

pub const RECENT_FUNCTIONS_BY_FUNCTION: &str = "functions/recent/by-function";
pub const RECENT_FUNCTIONS_BY_JOB_RUN: &str = "functions/recent/by-job-run";
pub const RECENT_FUNCTIONS_BY_PARENT: &str = "functions/recent/by-parent";
pub const RECENT_FUNCTIONS_FLAT: &str = "functions/recent/flat";

/// Directory where version compatibility warnings are stored
pub const VERSIONS: &str = "versions";
