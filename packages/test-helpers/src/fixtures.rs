//! Canned catalogue responses.
//!
//! The record documents are trimmed down ISO 19139 records as returned by a
//! `GeoNetwork` CSW with `outputSchema="http://www.isotc211.org/2005/gmd"`.

/// A `GetRecordsResponse` with one complete record: temporal and geographic
/// extents included.
pub const RECORDS_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<csw:GetRecordsResponse xmlns:csw="http://www.opengis.net/cat/csw/2.0.2"
    xmlns:gmd="http://www.isotc211.org/2005/gmd"
    xmlns:gco="http://www.isotc211.org/2005/gco"
    xmlns:gml="http://www.opengis.net/gml/3.2">
  <csw:SearchStatus timestamp="2017-11-07T10:21:03"/>
  <csw:SearchResults numberOfRecordsMatched="1" numberOfRecordsReturned="1" elementSet="full" nextRecord="0">
    <gmd:MD_Metadata>
      <gmd:fileIdentifier>
        <gco:CharacterString>5f8c2b0e6a7b4c6e9a1d3f2e4b5c6d7e</gco:CharacterString>
      </gmd:fileIdentifier>
      <gmd:identificationInfo>
        <gmd:MD_DataIdentification>
          <gmd:extent>
            <gmd:EX_Extent>
              <gmd:geographicElement>
                <gmd:EX_GeographicBoundingBox>
                  <gmd:westBoundLongitude>
                    <gco:Decimal>-180.0</gco:Decimal>
                  </gmd:westBoundLongitude>
                  <gmd:eastBoundLongitude>
                    <gco:Decimal>180.0</gco:Decimal>
                  </gmd:eastBoundLongitude>
                  <gmd:southBoundLatitude>
                    <gco:Decimal>-90.0</gco:Decimal>
                  </gmd:southBoundLatitude>
                  <gmd:northBoundLatitude>
                    <gco:Decimal>90.0</gco:Decimal>
                  </gmd:northBoundLatitude>
                </gmd:EX_GeographicBoundingBox>
              </gmd:geographicElement>
              <gmd:temporalElement>
                <gmd:EX_TemporalExtent>
                  <gmd:extent>
                    <gml:TimePeriod gml:id="tp1">
                      <gml:beginPosition>1979-01-01T00:00:00Z</gml:beginPosition>
                      <gml:endPosition>2015-12-31T23:59:59Z</gml:endPosition>
                    </gml:TimePeriod>
                  </gmd:extent>
                </gmd:EX_TemporalExtent>
              </gmd:temporalElement>
            </gmd:EX_Extent>
          </gmd:extent>
        </gmd:MD_DataIdentification>
      </gmd:identificationInfo>
    </gmd:MD_Metadata>
  </csw:SearchResults>
</csw:GetRecordsResponse>
"#;

/// A `GetRecordsResponse` whose record has neither temporal nor geographic
/// extents.
pub const RECORDS_RESPONSE_WITHOUT_EXTENTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<csw:GetRecordsResponse xmlns:csw="http://www.opengis.net/cat/csw/2.0.2"
    xmlns:gmd="http://www.isotc211.org/2005/gmd"
    xmlns:gco="http://www.isotc211.org/2005/gco">
  <csw:SearchStatus timestamp="2017-11-07T10:21:03"/>
  <csw:SearchResults numberOfRecordsMatched="1" numberOfRecordsReturned="1" elementSet="full" nextRecord="0">
    <gmd:MD_Metadata>
      <gmd:fileIdentifier>
        <gco:CharacterString>0a1b2c3d4e5f60718293a4b5c6d7e8f9</gco:CharacterString>
      </gmd:fileIdentifier>
    </gmd:MD_Metadata>
  </csw:SearchResults>
</csw:GetRecordsResponse>
"#;

/// The answer of a catalogue rejecting the request.
pub const EXCEPTION_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ows:ExceptionReport xmlns:ows="http://www.opengis.net/ows" version="1.2.0">
  <ows:Exception exceptionCode="NoApplicableCode">
    <ows:ExceptionText>Catalogue index is being rebuilt</ows:ExceptionText>
  </ows:Exception>
</ows:ExceptionReport>
"#;

/// Not XML at all, for example an HTML error page from a proxy.
pub const NOT_XML: &str = "<html><body><h1>502 Bad Gateway</h1></body>";

/// A `resultType="hits"` response reporting `matched` records.
#[must_use]
pub fn hits_response(matched: u64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<csw:GetRecordsResponse xmlns:csw="http://www.opengis.net/cat/csw/2.0.2">
  <csw:SearchStatus timestamp="2017-11-07T10:21:03"/>
  <csw:SearchResults numberOfRecordsMatched="{matched}" numberOfRecordsReturned="0" elementSet="full" nextRecord="1"/>
</csw:GetRecordsResponse>
"#
    )
}
