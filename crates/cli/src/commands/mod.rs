pub mod config;
pub mod convert;
pub mod flatten;
pub mod query;
pub mod summary;
pub mod util;

pub use config::*;
pub use convert::*;
pub use flatten::*;
pub use query::*;
pub use summary::*;
pub use util::*;
