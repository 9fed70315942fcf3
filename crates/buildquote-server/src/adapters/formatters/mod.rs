//! Quote Formatters
//!
//! Alternative renderings of the quote collection.

mod xml;

pub use xml::quotes_to_xml;
