//! A small element tree built from quick-xml events.

use super::DocumentError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Parse `content` and return its root element.
    ///
    /// Anything after the root element closes is ignored.
    pub(crate) fn parse(content: &str) -> Result<Self, DocumentError> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut open: Vec<Element> = Vec::new();
        loop {
            let closed = match reader.read_event()? {
                Event::Start(start) => {
                    open.push(Self::open(&start)?);
                    None
                }
                Event::Empty(start) => Some(Self::open(&start)?),
                Event::End(_) => open.pop(),
                Event::Text(text) => {
                    if let Some(current) = open.last_mut() {
                        current.text.push_str(&text.unescape()?);
                    }
                    None
                }
                Event::CData(data) => {
                    if let Some(current) = open.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&data));
                    }
                    None
                }
                Event::Eof => {
                    return Err(match open.pop() {
                        Some(unclosed) => DocumentError::Unclosed(unclosed.name),
                        None => DocumentError::Empty,
                    });
                }
                _ => None,
            };

            if let Some(element) = closed {
                match open.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
        }
    }

    fn open(start: &BytesStart<'_>) -> Result<Self, DocumentError> {
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
            let value = attribute.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn text(&self) -> &str {
        self.text.trim()
    }

    /// All descendants reached by following `path` one child level per
    /// segment, in document order.
    pub(crate) fn select<'a>(&'a self, path: &[&str]) -> Vec<&'a Element> {
        let mut current = vec![self];
        for segment in path {
            current = current
                .into_iter()
                .flat_map(|element| {
                    element
                        .children
                        .iter()
                        .filter(move |child| child.name == *segment)
                })
                .collect();
        }
        current
    }

    pub(crate) fn first<'a>(&'a self, path: &[&str]) -> Option<&'a Element> {
        self.select(path).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_local_names() {
        let root = Element::parse(
            r#"<msb:Project xmlns:msb="urn:msbuild"><msb:PropertyGroup /></msb:Project>"#,
        )
        .unwrap();
        assert_eq!(root.name(), "Project");
        assert_eq!(root.select(&["PropertyGroup"]).len(), 1);
    }

    #[test]
    fn select_follows_every_matching_branch() {
        let root = Element::parse(
            "<Project><PropertyGroup><A>1</A></PropertyGroup><ItemGroup /><PropertyGroup><A>2</A></PropertyGroup></Project>",
        )
        .unwrap();
        let texts: Vec<&str> = root
            .select(&["PropertyGroup", "A"])
            .into_iter()
            .map(Element::text)
            .collect();
        assert_eq!(texts, vec!["1", "2"]);
    }

    #[test]
    fn select_does_not_skip_levels() {
        let root = Element::parse("<a><b><c /></b></a>").unwrap();
        assert!(root.first(&["c"]).is_none());
        assert!(root.first(&["b", "c"]).is_some());
    }

    #[test]
    fn text_and_attributes_are_unescaped() {
        let root =
            Element::parse(r#"<site url="http://a/?x=1&amp;y=2">R&amp;D<![CDATA[<raw>]]></site>"#)
                .unwrap();
        assert_eq!(root.attribute("url"), Some("http://a/?x=1&y=2"));
        assert_eq!(root.text(), "R&D<raw>");
    }

    #[test]
    fn declaration_and_comments_are_skipped() {
        let root = Element::parse(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!-- generated -->\n<packages />",
        )
        .unwrap();
        assert_eq!(root.name(), "packages");
    }

    #[test]
    fn empty_document_is_an_error() {
        assert!(matches!(Element::parse("   "), Err(DocumentError::Empty)));
    }

    #[test]
    fn unclosed_root_is_an_error() {
        assert!(matches!(
            Element::parse("<configuration><episerver>"),
            Err(DocumentError::Unclosed(_)) | Err(DocumentError::Xml(_))
        ));
    }

    #[test]
    fn mismatched_end_tag_is_an_error() {
        assert!(Element::parse("<a><b></a>").is_err());
    }
}
