//! Read-only view of a CSW response document.
//!
//! Elements are addressed by expanded names: a namespace URI and a local
//! name. Paths follow the `ElementTree` style `.//a/b/c`: the first step
//! matches any element below the root, every following step a direct child.
use thiserror::Error;

pub const CSW_NS: &str = "http://www.opengis.net/cat/csw/2.0.2";
pub const GMD_NS: &str = "http://www.isotc211.org/2005/gmd";
pub const GML_NS: &str = "http://www.opengis.net/gml/3.2";
pub const GCO_NS: &str = "http://www.isotc211.org/2005/gco";
pub const OWS_NS: &str = "http://www.opengis.net/ows";

/// Root element of a successful `GetRecords` answer, in Clark notation.
pub const GET_RECORDS_RESPONSE_TAG: &str = "{http://www.opengis.net/cat/csw/2.0.2}GetRecordsResponse";

/// An element name: `(namespace URI, local name)`.
pub type Name = (&'static str, &'static str);

#[derive(Debug, Clone, Error)]
#[error("the response body is not well formed XML: {reason}")]
pub struct XmlError {
    reason: String,
}

pub struct Document<'input> {
    inner: roxmltree::Document<'input>,
}

impl<'input> Document<'input> {
    /// # Errors
    ///
    /// Will return an error if `text` is not well formed XML.
    pub fn parse(text: &'input str) -> Result<Self, XmlError> {
        let inner = roxmltree::Document::parse(text).map_err(|err| XmlError { reason: err.to_string() })?;

        Ok(Self { inner })
    }

    /// The root element name in Clark notation: `{namespace}local`, or just
    /// `local` for an element without namespace.
    #[must_use]
    pub fn root_tag(&self) -> String {
        let tag = self.inner.root_element().tag_name();

        match tag.namespace() {
            Some(namespace) => format!("{{{namespace}}}{}", tag.name()),
            None => tag.name().to_string(),
        }
    }

    /// Number of elements matching the `.//first/second/...` path.
    ///
    /// An empty path matches nothing.
    #[must_use]
    pub fn count_path(&self, path: &[Name]) -> usize {
        let Some((first, rest)) = path.split_first() else {
            return 0;
        };

        let mut matches: Vec<roxmltree::Node<'_, '_>> = self
            .inner
            .root_element()
            .descendants()
            .skip(1)
            .filter(|node| node.has_tag_name(*first))
            .collect();

        for step in rest {
            matches = matches
                .iter()
                .flat_map(|node| node.children().filter(|child| child.has_tag_name(*step)))
                .collect();
        }

        matches.len()
    }

    /// The `numberOfRecordsMatched` attribute of the first `csw:SearchResults`
    /// element.
    #[must_use]
    pub fn number_of_records_matched(&self) -> Option<u64> {
        self.inner
            .descendants()
            .find(|node| node.has_tag_name((CSW_NS, "SearchResults")))
            .and_then(|node| node.attribute("numberOfRecordsMatched"))
            .and_then(|value| value.trim().parse().ok())
    }

    /// The first `ows:ExceptionText` when the catalogue answered with an
    /// `ExceptionReport`.
    #[must_use]
    pub fn exception_text(&self) -> Option<String> {
        self.inner
            .descendants()
            .find(|node| node.has_tag_name((OWS_NS, "ExceptionText")))
            .and_then(|node| node.text())
            .map(|text| text.trim().to_string())
    }
}
