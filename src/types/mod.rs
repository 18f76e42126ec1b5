//! Pure data contracts shared by callers, the dispatcher, and adapters.
//!
//! These are the only shapes that cross the crate's boundary:
//! - [`Value`] — the closed scalar set permitted for trait and argument fields
//! - [`Identity`] / [`Organization`] — who the user is and the group they belong to
//! - [`Page`] — one page visit
//!
//! All of them are immutable values from the dispatcher's point of view: the
//! caller constructs them, the dispatcher only reads them, and they are
//! serde-serializable so adapters can hand them to wire formats directly.

mod identity;
mod page;
mod value;

pub use identity::{Identity, IdentityTraits, Organization, OrganizationTraits};
pub use page::Page;
pub use value::Value;
