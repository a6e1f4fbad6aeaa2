pub mod env;
pub mod error;
pub mod invocation;
pub mod settings;

// Re-export main types
pub use env::{ENV_PREFIX, RawEnv, load_env};
pub use error::{ConfigError, Result};
pub use invocation::{Invocation, RunKind, classify};
pub use settings::ResolvedSettings;
