mod group;
mod icon;
mod outcome;

pub use group::{GroupKind, SearchGroup, SearchItem};
pub use icon::Icon;
pub use outcome::{SearchOutcome, SearchSelection};
