pub mod format;
pub mod svg;

pub use svg::SvgDocument;
