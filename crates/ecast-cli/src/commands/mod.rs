pub mod compare;
pub mod completions;
pub mod datasets;
pub mod fields;
pub mod predict;
pub mod show;
pub mod timeline;
pub mod util;
