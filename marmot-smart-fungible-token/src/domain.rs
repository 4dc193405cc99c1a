mod metadata;

pub use metadata::*;
