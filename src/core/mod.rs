pub mod document;
pub mod front_matter;
pub mod policy;
pub mod redirect;

pub use document::{find_front_matter, Document};
pub use front_matter::{normalize_value, parse_date, FrontMatter};
pub use policy::Policy;
pub use redirect::{RedirectBlock, RedirectStyle};
