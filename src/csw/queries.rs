//! `GetRecords` request bodies sent by the checks.
//!
//! Both queries are CSW 2.0.2 POST requests in the XML encoding. They must be
//! sent with the [`CONTENT_TYPE`] header.

/// Value of the `Content-Type` header for the POST requests.
pub const CONTENT_TYPE: &str = "application/xml";

/// The query used by the Open Data Portal dashboard: every record, full ISO
/// 19139 element set, up to 300 records.
pub const DASHBOARD_QUERY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<csw:GetRecords
    xmlns:csw="http://www.opengis.net/cat/csw/2.0.2"
    xmlns:ogc="http://www.opengis.net/ogc"
    xmlns:gml="http://www.opengis.net/gml/3.2"
    xmlns:dc="http://purl.org/dc/elements/1.1/"
    xmlns:dct="http://purl.org/dc/terms/"
    xmlns:gmd="http://www.isotc211.org/2005/gmd"
    xmlns:gco="http://www.isotc211.org/2005/gco"
    xmlns:geonet="http://www.fao.org/geonetwork"
    service="CSW"
    version="2.0.2"
    resultType="results"
    outputSchema="http://www.isotc211.org/2005/gmd"
    startPosition="1"
    maxRecords="300">
    <csw:Query typeNames="csw:Record">
        <csw:ElementSetName>full</csw:ElementSetName>
        <csw:Constraint version="1.1.0">
        <ogc:Filter>
             <ogc:PropertyIsEqualTo>
                 <ogc:PropertyName>AnyText</ogc:PropertyName>
                 <ogc:Literal>%*%</ogc:Literal>
             </ogc:PropertyIsEqualTo>
        </ogc:Filter>
        </csw:Constraint>
    </csw:Query>
</csw:GetRecords>
"#;

/// A free text search only asking for the number of hits.
///
/// The term is escaped, so any user supplied text produces a well formed
/// request.
#[must_use]
pub fn search_query(term: &str) -> String {
    let term = escape(term);

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<csw:GetRecords
    xmlns:csw="http://www.opengis.net/cat/csw/2.0.2"
    xmlns:ogc="http://www.opengis.net/ogc"
    service="CSW"
    version="2.0.2"
    resultType="hits"
    startPosition="1"
    maxRecords="1">
    <csw:Query typeNames="csw:Record">
        <csw:ElementSetName>brief</csw:ElementSetName>
        <csw:Constraint version="1.1.0">
        <ogc:Filter>
             <ogc:PropertyIsLike wildCard="%" singleChar="_" escapeChar="\">
                 <ogc:PropertyName>AnyText</ogc:PropertyName>
                 <ogc:Literal>%{term}%</ogc:Literal>
             </ogc:PropertyIsLike>
        </ogc:Filter>
        </csw:Constraint>
    </csw:Query>
</csw:GetRecords>
"#
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
