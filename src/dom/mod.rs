mod event_registry;
mod fragment;
mod list;
mod location;
mod node;
mod page;

pub use event_registry::EventRegistry;
pub use fragment::{Fragment, FragmentBuilder};
pub use list::render_list;
pub use location::Location;
pub use node::{Node, NodeType};
pub use page::{display, Page};
