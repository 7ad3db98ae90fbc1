use std::io::Write;

use xml::writer::XmlEvent;
use xml::{EmitterConfig, EventWriter};

use crate::Result;

use super::{GrammarElement, RepeatRange};

const SRGS_NAMESPACE: &str = "http://www.w3.org/2001/06/grammar";
const SAPI_NAMESPACE: &str = "http://schemas.microsoft.com/Speech/2002/06/SRGSExtensions";
const DICTATION_URI: &str = "grammar:dictation";

/// The id of the single public rule every rendered grammar defines.
pub(crate) const ROOT_RULE: &str = "root";

/// Renders the elements as an SRGS 1.0 document whose root rule accepts their sequence.
pub(super) fn render(culture: Option<&str>, elements: &[GrammarElement]) -> Result<String> {
    let mut writer =
        EventWriter::new_with_config(Vec::new(), EmitterConfig::new().perform_indent(false));

    let mut grammar = XmlEvent::start_element("grammar")
        .default_ns(SRGS_NAMESPACE)
        .ns("sapi", SAPI_NAMESPACE)
        .attr("version", "1.0")
        .attr("root", ROOT_RULE)
        .attr("tag-format", "semantics/1.0");
    if let Some(culture) = culture {
        grammar = grammar.attr("xml:lang", culture);
    }
    writer.write(grammar)?;
    writer.write(XmlEvent::start_element("rule").attr("id", ROOT_RULE).attr("scope", "public"))?;
    if elements.is_empty() {
        write_special(&mut writer, "VOID")?;
    } else {
        write_sequence(&mut writer, elements)?;
    }
    writer.write(XmlEvent::end_element())?;
    writer.write(XmlEvent::end_element())?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

fn write_sequence<W: Write>(writer: &mut EventWriter<W>, elements: &[GrammarElement]) -> Result<()> {
    for element in elements {
        write_element(writer, element)?;
    }
    Ok(())
}

fn write_element<W: Write>(writer: &mut EventWriter<W>, element: &GrammarElement) -> Result<()> {
    match element {
        GrammarElement::Phrase(text) => write_item(writer, text)?,
        GrammarElement::Subset(text, mode) => {
            let mode: &'static str = (*mode).into();
            writer.write(XmlEvent::start_element("sapi:subset").attr("sapi:match", mode))?;
            writer.write(text.as_str())?;
            writer.write(XmlEvent::end_element())?;
        }
        GrammarElement::Choices(choices) => {
            writer.write(XmlEvent::start_element("one-of"))?;
            for choice in choices {
                write_item(writer, choice)?;
            }
            writer.write(XmlEvent::end_element())?;
        }
        GrammarElement::Group(elements) => {
            writer.write(XmlEvent::start_element("item"))?;
            if elements.is_empty() {
                write_special(writer, "NULL")?;
            } else {
                write_sequence(writer, elements)?;
            }
            writer.write(XmlEvent::end_element())?;
        }
        GrammarElement::Repeat(range, target) => {
            let repeat = repeat_attr(range);
            writer.write(XmlEvent::start_element("item").attr("repeat", &repeat))?;
            write_element(writer, target)?;
            writer.write(XmlEvent::end_element())?;
        }
        GrammarElement::Dictation(category) => {
            let uri = match category {
                Some(category) => format!("{}#{}", DICTATION_URI, category),
                None => DICTATION_URI.to_string(),
            };
            write_ruleref(writer, &uri)?;
        }
        GrammarElement::RuleReference { uri, rule } => {
            let uri = match rule {
                Some(rule) => format!("{}#{}", uri, rule),
                None => uri.clone(),
            };
            write_ruleref(writer, &uri)?;
        }
        GrammarElement::Wildcard => write_special(writer, "GARBAGE")?,
    }
    Ok(())
}

fn write_item<W: Write>(writer: &mut EventWriter<W>, text: &str) -> Result<()> {
    writer.write(XmlEvent::start_element("item"))?;
    writer.write(text)?;
    writer.write(XmlEvent::end_element())?;
    Ok(())
}

fn write_ruleref<W: Write>(writer: &mut EventWriter<W>, uri: &str) -> Result<()> {
    writer.write(XmlEvent::start_element("ruleref").attr("uri", uri))?;
    writer.write(XmlEvent::end_element())?;
    Ok(())
}

fn write_special<W: Write>(writer: &mut EventWriter<W>, special: &str) -> Result<()> {
    writer.write(XmlEvent::start_element("ruleref").attr("special", special))?;
    writer.write(XmlEvent::end_element())?;
    Ok(())
}

fn repeat_attr(range: &RepeatRange) -> String {
    if range.min == range.max {
        range.min.to_string()
    } else {
        format!("{}-{}", range.min, range.max)
    }
}
