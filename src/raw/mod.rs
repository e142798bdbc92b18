mod node;
mod raw_map;
mod validate;

pub(crate) use node::{Caps, Node, SearchResult};
pub(crate) use raw_map::RawFanoutMap;
