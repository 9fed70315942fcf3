//! XML export of the quote collection

use std::io::Cursor;

use buildquote::{DomainError, Quote};
use chrono::SecondsFormat;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Render quotes as a pretty-printed XML document.
///
/// `createdAt` uses the same `Z`-suffixed RFC 3339 text as the JSON views.
/// Fails if a stored field holds a character XML 1.0 cannot carry.
///
/// ```xml
/// <?xml version="1.0"?>
/// <quotes>
///   <quote>
///     <id>..</id>
///     <name>..</name>
///     <total>..</total>
///     <createdAt>..</createdAt>
///     <components>
///       <CPU>..</CPU>
///       <GPU>..</GPU>
///       <RAM>..</RAM>
///     </components>
///   </quote>
/// </quotes>
/// ```
pub fn quotes_to_xml(quotes: &[Quote]) -> Result<String, DomainError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    write_document(&mut writer, quotes)
        .map_err(|e| DomainError::Repository(format!("XML serialization failed: {}", e)))?;

    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| DomainError::Repository(format!("XML output is not UTF-8: {}", e)))
}

fn write_document<W: std::io::Write>(
    writer: &mut Writer<W>,
    quotes: &[Quote],
) -> Result<(), String> {
    write(writer, Event::Decl(BytesDecl::new("1.0", None, None)))?;

    if quotes.is_empty() {
        return write(writer, Event::Empty(BytesStart::new("quotes")));
    }

    write(writer, Event::Start(BytesStart::new("quotes")))?;
    for quote in quotes {
        write(writer, Event::Start(BytesStart::new("quote")))?;
        text_element(writer, "id", &quote.id)?;
        text_element(writer, "name", &quote.name)?;
        text_element(writer, "total", &quote.total.to_string())?;
        text_element(
            writer,
            "createdAt",
            &quote.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        )?;

        write(writer, Event::Start(BytesStart::new("components")))?;
        text_element(writer, "CPU", &quote.components.cpu)?;
        text_element(writer, "GPU", &quote.components.gpu)?;
        text_element(writer, "RAM", &quote.components.ram)?;
        write(writer, Event::End(BytesEnd::new("components")))?;

        write(writer, Event::End(BytesEnd::new("quote")))?;
    }
    write(writer, Event::End(BytesEnd::new("quotes")))
}

fn text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), String> {
    if let Some(c) = value.chars().find(|c| !is_xml_char(*c)) {
        return Err(format!("<{}> contains U+{:04X}, not allowed in XML", name, c as u32));
    }
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(value)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

/// XML 1.0 `Char` production (surrogates cannot occur in a `char`)
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

fn write<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), String> {
    writer.write_event(event).map_err(|e| e.to_string())
}
