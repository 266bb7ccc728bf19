mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{Config, ExcludeConfig, ScanConfig};
