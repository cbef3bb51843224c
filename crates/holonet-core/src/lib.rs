pub mod error;
pub mod kind;
pub mod model;
pub mod page;
pub mod rewrite;

pub use error::{CoreError, Result};
pub use kind::ResourceKind;
pub use model::{Film, Person, Planet, Species, Starship, Vehicle};
pub use page::{PageEnvelope, PageMeta};
pub use rewrite::rewrite_urls;
