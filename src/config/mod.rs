mod exclude;
mod loader;

pub use exclude::ExcludeSet;
pub use loader::{Config, RewriteConfig};
