use bytes::Bytes;
use elabjournal::errors::ElabError;
use elabjournal::reqwest::header::{ACCEPT, CONTENT_TYPE};
use elabjournal::reqwest::Method;
use elabjournal::types::ExpJournalId;
use elabjournal::{Filters, Shape};
use rust_xlsxwriter::Workbook;
use serde_json::json;

mod helpers;
use helpers::{fake_client, AnyResult};

const SECTION: ExpJournalId = ExpJournalId(905);

#[tokio::test]
async fn test_section_spreadsheet() -> AnyResult {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "well")?;
    sheet.write_string(0, 1, "sample")?;
    sheet.write_string(1, 0, "A1")?;
    sheet.write_string(1, 1, "S-17")?;
    let xlsx = workbook.save_to_buffer()?;

    let (client, transport) = fake_client();
    transport.respond(200, xlsx);
    let table = client.section_spreadsheet(SECTION).await?;
    assert_eq!(table, vec![vec!["well", "sample"], vec!["A1", "S-17"]]);

    let req = transport.last_request();
    assert_eq!(req.url.path(), "/api/v1/experiments/sections/905/excel");
    assert!(req.headers.get(ACCEPT).is_none());
    Ok(())
}

#[tokio::test]
async fn test_section_spreadsheet_corrupt() {
    let (client, transport) = fake_client();
    transport.respond(200, r#"{"message":"not excel"}"#);
    let err = client.section_spreadsheet(SECTION).await.unwrap_err();
    assert!(matches!(
        err,
        ElabError::Decode {
            shape: Shape::Spreadsheet,
            ..
        }
    ));
}

#[tokio::test]
async fn test_section_spreadsheet_not_found_is_not_parsed() {
    let (client, transport) = fake_client();
    transport.respond(404, "no such section");
    let err = client.section_spreadsheet(SECTION).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
}

#[tokio::test]
async fn test_section_html() -> AnyResult {
    let (client, transport) = fake_client();
    transport.respond(200, "<h1>Protocol</h1><p>Mix well.</p>");
    let html = client.section_html(SECTION).await?;
    assert_eq!(html, "<h1>Protocol</h1><p>Mix well.</p>");
    assert_eq!(
        transport.last_request().url.path(),
        "/api/v1/experiments/sections/905/html"
    );
    Ok(())
}

#[tokio::test]
async fn test_update_section_html() -> AnyResult {
    let (client, transport) = fake_client();
    transport.respond(204, "");
    client
        .update_section_html(SECTION, "<p>{\"not\": json}</p>")
        .await?;

    let req = transport.last_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.url.path(), "/api/v1/experiments/sections/905/html");
    assert!(req.headers.get(CONTENT_TYPE).is_none());
    assert_eq!(req.body, Some(Bytes::from_static(b"<p>{\"not\": json}</p>")));
    Ok(())
}

#[tokio::test]
async fn test_section_content() -> AnyResult {
    let (client, transport) = fake_client();
    transport.respond(200, r#"{"contents":"<p>hello</p>","expJournalID":905}"#);
    let content = client.section_content(SECTION).await?;
    assert_eq!(content["contents"], json!("<p>hello</p>"));
    assert_eq!(
        transport.last_request().url.path(),
        "/api/v1/experiments/sections/905/content"
    );
    Ok(())
}

#[tokio::test]
async fn test_update_section_content() -> AnyResult {
    let (client, transport) = fake_client();
    transport.respond(200, "");
    client
        .update_section_content(SECTION, &json!({"contents": "<p>bye</p>"}))
        .await?;

    let req = transport.last_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(req.body.unwrap().as_ref(), br#"{"contents":"<p>bye</p>"}"#);
    Ok(())
}

#[tokio::test]
async fn test_update_section_content_forbidden() {
    let (client, transport) = fake_client();
    transport.respond(403, r#"{"message":"Section is signed","errors":[]}"#);
    let err = client
        .update_section_content(SECTION, &json!({"contents": ""}))
        .await
        .unwrap_err();
    let ElabError::Service {
        message, errors, ..
    } = err
    else {
        panic!("expected service error")
    };
    assert_eq!(message, "Section is signed");
    assert!(errors.is_empty());
}

#[tokio::test]
async fn test_section_samples() -> AnyResult {
    let (client, transport) = fake_client();
    transport.respond(200, r#"{"data":[{"sampleID":1},{"sampleID":2},{"sampleID":3}]}"#);
    let samples = client
        .section_samples(SECTION, Filters::new().with("$expand", "meta"))
        .await?;
    let ids: Vec<_> = samples.iter().map(|s| s["sampleID"].clone()).collect();
    assert_eq!(ids, vec![json!(1), json!(2), json!(3)]);

    let req = transport.last_request();
    assert_eq!(req.url.path(), "/api/v1/experiments/sections/905/samples");
    assert_eq!(req.url.query(), Some("%24expand=meta"));
    Ok(())
}
