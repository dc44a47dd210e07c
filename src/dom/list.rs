use std::hash::Hash;

use web_sys::{Document, Node as WsNode};

use super::{EventRegistry, FragmentBuilder, Location};
use crate::error::Result;

/// Replace the children of `container` with one [`super::Fragment`] per item. Whatever the
/// container held before (template placeholders, a previous render) is removed first.
///
/// Returns the number of fragments mounted.
pub fn render_list<A, I>(
    document: &Document,
    event_registry: &EventRegistry<A>,
    container: &WsNode,
    items: I,
) -> Result<usize>
where
    A: 'static + Clone + Eq + Hash,
    I: IntoIterator<Item = FragmentBuilder<A>>,
{
    let location = Location::parent(container);
    location.clear()?;

    let mut count = 0;
    for builder in items {
        builder.build(document, event_registry)?.mount(&location)?;
        count += 1;
    }

    Ok(count)
}
