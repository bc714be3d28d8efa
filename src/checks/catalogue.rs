use reqwest::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use reqwest::StatusCode;

use super::{Check, Context, Outcome};
use crate::csw::queries::{search_query, DASHBOARD_QUERY};
use crate::csw::response::{Document, Name, GCO_NS, GET_RECORDS_RESPONSE_TAG, GMD_NS, GML_NS};
use crate::csw::Reply;

const TEMPORAL_START: [Name; 2] = [(GML_NS, "TimePeriod"), (GML_NS, "beginPosition")];
const TEMPORAL_END: [Name; 2] = [(GML_NS, "TimePeriod"), (GML_NS, "endPosition")];

const WEST_BOUND_LONGITUDE: [Name; 4] = [
    (GMD_NS, "geographicElement"),
    (GMD_NS, "EX_GeographicBoundingBox"),
    (GMD_NS, "westBoundLongitude"),
    (GCO_NS, "Decimal"),
];
const SOUTH_BOUND_LATITUDE: [Name; 4] = [
    (GMD_NS, "geographicElement"),
    (GMD_NS, "EX_GeographicBoundingBox"),
    (GMD_NS, "southBoundLatitude"),
    (GCO_NS, "Decimal"),
];

/// Why a check did not pass.
enum Problem {
    Failure(String),
    Error(String),
}

impl From<Result<(), Problem>> for Outcome {
    fn from(result: Result<(), Problem>) -> Self {
        match result {
            Ok(()) => Outcome::Pass,
            Err(Problem::Failure(message)) => Outcome::Fail(message),
            Err(Problem::Error(message)) => Outcome::Error(message),
        }
    }
}

fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<(), Problem> {
    if condition {
        Ok(())
    } else {
        Err(Problem::Failure(message()))
    }
}

pub(super) async fn run(check: Check, context: &Context) -> Outcome {
    let result = match check {
        Check::DashboardQuery => dashboard_query(context).await,
        Check::TemporalExtent => temporal_extent(context).await,
        Check::GeographicExtent => geographic_extent(context).await,
        Check::SearchResults => search_results(context).await,
        Check::Cors => cors(context).await,
    };

    result.into()
}

async fn post(context: &Context, body: &str, origin: Option<&str>) -> Result<Reply, Problem> {
    let reply = context
        .client
        .get_records(body, origin)
        .await
        .map_err(|err| Problem::Error(err.to_string()))?;

    ensure(reply.status == StatusCode::OK, || {
        let message = format!(
            "Expecting 200 OK response code for {:?}, got {}",
            context.endpoint().as_str(),
            reply.status
        );

        with_exception_text(message, reply.document().ok().as_ref())
    })?;

    Ok(reply)
}

fn parse_reply<'reply>(context: &Context, reply: &'reply Reply) -> Result<Document<'reply>, Problem> {
    reply.document().map_err(|err| {
        Problem::Error(format!(
            "Unreadable response from {:?}: {err}",
            context.endpoint().as_str()
        ))
    })
}

/// Appends the `ows:ExceptionText` of the document, if any.
fn with_exception_text(mut message: String, document: Option<&Document<'_>>) -> String {
    if let Some(text) = document.and_then(Document::exception_text) {
        message.push_str(&format!(": {text}"));
    }

    message
}

async fn dashboard_query(context: &Context) -> Result<(), Problem> {
    let reply = post(context, DASHBOARD_QUERY, None).await?;

    let document = parse_reply(context, &reply)?;

    let root_tag = document.root_tag();

    ensure(root_tag == GET_RECORDS_RESPONSE_TAG, || {
        let message = format!(
            "Expecting {GET_RECORDS_RESPONSE_TAG} tag in response for {:?}, got {root_tag}",
            context.endpoint().as_str()
        );

        with_exception_text(message, Some(&document))
    })
}

async fn temporal_extent(context: &Context) -> Result<(), Problem> {
    let reply = post(context, DASHBOARD_QUERY, None).await?;

    let document = parse_reply(context, &reply)?;

    ensure(document.count_path(&TEMPORAL_START) > 0, || {
        format!("No temporal start elements found for {:?}", context.endpoint().as_str())
    })?;

    ensure(document.count_path(&TEMPORAL_END) > 0, || {
        format!("No temporal end elements found for {:?}", context.endpoint().as_str())
    })
}

async fn geographic_extent(context: &Context) -> Result<(), Problem> {
    let reply = post(context, DASHBOARD_QUERY, None).await?;

    let document = parse_reply(context, &reply)?;

    ensure(document.count_path(&WEST_BOUND_LONGITUDE) > 0, || {
        format!(
            "No West Bound Longitude elements found in response {:?}",
            context.endpoint().as_str()
        )
    })?;

    ensure(document.count_path(&SOUTH_BOUND_LATITUDE) > 0, || {
        format!(
            "No South Bound Latitude elements found in response {:?}",
            context.endpoint().as_str()
        )
    })
}

async fn search_results(context: &Context) -> Result<(), Problem> {
    let reply = post(context, &search_query(&context.search_term), None).await?;

    let document = parse_reply(context, &reply)?;

    let Some(matched) = document.number_of_records_matched() else {
        return Err(Problem::Failure(format!(
            "No search results count found in response {:?}",
            context.endpoint().as_str()
        )));
    };

    ensure(matched > 0, || {
        format!(
            "No records matched the search {:?} at {:?}",
            context.search_term,
            context.endpoint().as_str()
        )
    })
}

async fn cors(context: &Context) -> Result<(), Problem> {
    let reply = post(context, DASHBOARD_QUERY, Some(&context.origin)).await?;

    let Some(allowed) = reply.header(ACCESS_CONTROL_ALLOW_ORIGIN.as_str()) else {
        return Err(Problem::Failure(format!(
            "No Access-Control-Allow-Origin header in response {:?} for origin {:?}",
            context.endpoint().as_str(),
            context.origin
        )));
    };

    ensure(allowed == "*" || allowed == context.origin, || {
        format!(
            "Origin {:?} not allowed by {:?}, Access-Control-Allow-Origin is {allowed:?}",
            context.origin,
            context.endpoint().as_str()
        )
    })
}
