// Launcher constants (no magic values)
use std::time::Duration;

/// Runtime binaries tried in order before the store scan
pub const DEFAULT_RUNTIME_CANDIDATES: &[&str] = &[
    "/nix/store/0akvkk9k1a7z5vjp34yz6dr91j776jhv-nodejs-20.11.1/bin/node",
    "/usr/bin/node",
    "/usr/local/bin/node",
    "node",
];

/// Name of the runtime executable inside a store entry's `bin/`
pub const RUNTIME_BINARY_NAME: &str = "node";

/// Store scanned when no candidate answers
pub const DEFAULT_STORE_ROOT: &str = "/nix/store";

/// Store entries must contain this in their name (`*nodejs*`)
pub const DEFAULT_STORE_PATTERN: &str = "nodejs";

/// Package manager used to start the application
pub const DEFAULT_LAUNCH_PROGRAM: &str = "npm";

/// npm script started by default (`npm run dev`)
pub const DEFAULT_NPM_SCRIPT: &str = "dev";

/// Time the child gets to exit after SIGTERM before it is killed (5 seconds)
pub const INTERRUPT_GRACE_PERIOD: Duration = Duration::from_secs(5);

/// After the child exits, how long a Ctrl+C delivered to the same process
/// group still counts as an interrupt (100ms)
pub const INTERRUPT_SETTLE_WINDOW: Duration = Duration::from_millis(100);
