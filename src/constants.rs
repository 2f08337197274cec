//! Common constants used throughout the gen-mq application.

/// Default path to the bundled project configuration
pub const DEFAULT_CONFIG: &str = "conf/project.yaml";

/// Default root directory of the bundled template set
pub const DEFAULT_TEMPLATE_DIR: &str = "conf/template";

/// Number of project types the configuration document must declare.
/// Exactly two message queue flavors are supported: posix and sysv.
pub const SUPPORTED_VARIANTS: usize = 2;

/// Placeholder name resolved to the project name
pub const PLACEHOLDER_PRO: &str = "PRO";

/// Placeholder name resolved to the current four-digit year
pub const PLACEHOLDER_YEAR: &str = "YEAR";
