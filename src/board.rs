pub mod glyphs;
pub mod layout;
pub mod matcher;
pub mod model;
pub mod weight;
