pub mod migration;
pub mod stamp;
pub mod validation;

pub use migration::{Inherit, MigrationPath};
pub use stamp::{VersionField, VersionStamp};
pub use validation::{SchemaCompiler, SchemaValidator};
