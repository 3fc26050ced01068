//! Integration Tests for sheetcards
//!
//! 取得 → 解析 → 描画のパイプライン全体を、ローカルのHTTPサーバーを相手に検証します。

mod common;

use sheetcards::{
    CatalogBuilder, CatalogError, LoadOutcome, OutputFormat, PageOutcome, RowRecord, Status,
};

const THREE_ROWS_BLANK_MIDDLE: &str = "\
Product Name,Price,Features
First Product,100,Alpha; beta
   ,200,Nameless
Third Product,300,Gamma
";

#[tokio::test]
async fn test_blank_name_row_is_dropped_and_order_kept() {
    let url = common::serve_csv(200, THREE_ROWS_BLANK_MIDDLE).await;
    let catalog = CatalogBuilder::new().with_url(url).build().unwrap();
    let mut container = catalog.new_container();

    let outcome = catalog.run(&mut container).await;

    assert!(matches!(outcome, PageOutcome::Rendered(2)));
    let names: Vec<_> = container.cards().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["First Product", "Third Product"]);

    let html = container.to_html().unwrap();
    assert_eq!(html.matches("class=\"product-card\"").count(), 2);
    assert!(html.find("First Product").unwrap() < html.find("Third Product").unwrap());
    assert!(!html.contains("Nameless"));
}

#[tokio::test]
async fn test_header_only_sheet_shows_no_products() {
    let url = common::serve_csv(200, "Product Name,Price,Buy Link\n").await;
    let catalog = CatalogBuilder::new().with_url(url).build().unwrap();
    let mut container = catalog.new_container();

    let outcome = catalog.run(&mut container).await;

    assert!(matches!(outcome, PageOutcome::Empty));
    assert_eq!(container.status(), Some(Status::Empty));
    let html = container.to_html().unwrap();
    assert!(html.contains("No products found in the sheet or the data is empty."));
    assert!(!html.contains("product-card"));
    assert!(!html.contains("Loading products"));
}

#[tokio::test]
async fn test_fetch_failure_shows_error_and_logs() {
    let logs = common::LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let catalog = CatalogBuilder::new()
        .with_url(common::unreachable_url())
        .build()
        .unwrap();
    let mut container = catalog.new_container();

    let outcome = catalog.run(&mut container).await;

    assert!(matches!(outcome, PageOutcome::Failed(CatalogError::Http(_))));
    assert_eq!(container.status(), Some(Status::Error));
    let html = container.to_html().unwrap();
    assert!(html.contains("<p class=\"error\">Error loading products."));
    assert!(container.cards().is_empty());

    let log = logs.contents();
    assert!(log.contains("Failed to fetch product data"), "log was: {}", log);
    assert!(log.contains("ERROR"));
    assert!(log.contains("127.0.0.1"));
}

/// ローカル入力の失敗ログには取得元URLを含めない
#[test]
fn test_local_parse_failure_logs_local_source() {
    let logs = common::LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let catalog = CatalogBuilder::new().build().unwrap();
    let mut container = catalog.new_container();

    let outcome = catalog.run_from_reader(&b"Product Name\n\xff\n"[..], &mut container);

    assert!(matches!(outcome, PageOutcome::Failed(CatalogError::Csv(_))));
    let log = logs.contents();
    assert!(log.contains("Failed to load product data"), "log was: {}", log);
    assert!(log.contains("local input"));
    assert!(!log.contains("docs.google.com"));
    assert!(!log.contains("Failed to fetch"));
}

#[test]
fn test_missing_file_logs_path() {
    let logs = common::LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.csv");
    let catalog = CatalogBuilder::new().build().unwrap();
    let mut container = catalog.new_container();

    let outcome = catalog.run_from_file(&path, &mut container);

    assert!(matches!(outcome, PageOutcome::Failed(CatalogError::Io(_))));
    assert_eq!(container.status(), Some(Status::Error));
    let log = logs.contents();
    assert!(log.contains("missing.csv"), "log was: {}", log);
    assert!(!log.contains("docs.google.com"));
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let url = common::serve_csv(404, "Not Found").await;
    let catalog = CatalogBuilder::new().with_url(url).build().unwrap();

    match catalog.load().await {
        Err(CatalogError::Http(e)) => assert_eq!(e.status().map(|s| s.as_u16()), Some(404)),
        other => panic!("Expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_csv_is_error_not_empty() {
    let url = common::serve_csv(200, b"Product Name,Price\nLamp,1\n\xff\xfe,2\n".to_vec()).await;
    let catalog = CatalogBuilder::new().with_url(url).build().unwrap();
    let mut container = catalog.new_container();

    let outcome = catalog.run(&mut container).await;

    assert!(matches!(outcome, PageOutcome::Failed(CatalogError::Csv(_))));
    assert_eq!(container.status(), Some(Status::Error));
    assert!(container.cards().is_empty());
}

#[tokio::test]
async fn test_load_returns_filtered_records() {
    let url = common::serve_csv(200, common::fixture("products.csv")).await;
    let catalog = CatalogBuilder::new().with_url(url).build().unwrap();

    match catalog.load().await.unwrap() {
        LoadOutcome::Products(records) => {
            assert_eq!(records.len(), 3);
            assert_eq!(records[0].get("Product Name"), Some("Power Bank"));
            assert_eq!(records[2].get("Product Name"), Some("USB Cable"));
        }
        LoadOutcome::Empty => panic!("Expected products"),
    }
}

#[tokio::test]
async fn test_fixture_cards() {
    let url = common::serve_csv(200, common::fixture("products.csv")).await;
    let catalog = CatalogBuilder::new().with_url(url).build().unwrap();
    let mut container = catalog.new_container();

    catalog.run(&mut container).await;
    let cards = container.cards();
    assert_eq!(cards.len(), 3);

    // Power Bank: すべての項目あり
    assert_eq!(cards[0].short_info, "Fast charging");
    assert_eq!(cards[0].price.as_deref(), Some("₹999"));
    assert_eq!(cards[0].cut_off_price.as_deref(), Some("₹1499"));
    assert_eq!(cards[0].offer_tag.as_deref(), Some("33% OFF"));
    assert_eq!(cards[0].link, "https://shop.example.com/powerbank");

    // Desk Lamp: 取り消し価格が価格と同じ
    assert_eq!(cards[1].price.as_deref(), Some("₹499"));
    assert_eq!(cards[1].cut_off_price, None);
    assert_eq!(cards[1].link, "#");
    assert_eq!(cards[1].image_src, "placeholder.png");

    // USB Cable: 画像なし、説明なし
    assert_eq!(cards[2].image_src, "placeholder.png");
    assert_eq!(cards[2].short_info, "");
    assert_eq!(cards[2].offer_tag, None);

    let html = container.to_html().unwrap();
    assert_eq!(html.matches("class=\"offer-tag\"").count(), 1);
    assert_eq!(html.matches("class=\"cut-off-price\"").count(), 1);
}

#[test]
fn test_run_from_reader_with_fixture() {
    let catalog = CatalogBuilder::new().build().unwrap();
    let mut container = catalog.new_container();

    let data = common::fixture("products.csv");
    let outcome = catalog.run_from_reader(data.as_slice(), &mut container);

    assert!(matches!(outcome, PageOutcome::Rendered(3)));
}

#[test]
fn test_render_card_fields() {
    let catalog = CatalogBuilder::new().build().unwrap();
    let record: RowRecord = [
        ("Product Name", "Power Bank"),
        ("Price", "999"),
        ("Cut-Off Price", ""),
        ("Features", "Fast charging; 10000mAh; USB-C"),
    ]
    .into_iter()
    .collect();

    let card = catalog.render_card(&record);

    assert_eq!(
        card.find_by_class("product-short-info").unwrap().text_content(),
        "Fast charging"
    );
    assert_eq!(card.find_by_class("price").unwrap().text_content(), "₹999");
    assert!(card.find_by_class("cut-off-price").is_none());
    assert_eq!(
        card.find_by_class("product-image").unwrap().get_attr("src"),
        Some("placeholder.png")
    );
    assert_eq!(
        card.find_by_class("buy-button").unwrap().get_attr("href"),
        Some("#")
    );
}

#[tokio::test]
async fn test_page_written_to_file() {
    let url = common::serve_csv(200, THREE_ROWS_BLANK_MIDDLE).await;
    let catalog = CatalogBuilder::new()
        .with_url(url)
        .with_page_title("Our Products")
        .build()
        .unwrap();
    let mut container = catalog.new_container();
    catalog.run(&mut container).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.html");
    catalog
        .write_output(&container, std::fs::File::create(&path).unwrap())
        .unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Our Products</title>"));
    assert!(html.contains("<div id=\"product-list\">"));
    assert_eq!(html.matches("class=\"product-card\"").count(), 2);
}

#[tokio::test]
async fn test_json_output_with_custom_settings() {
    let url = common::serve_csv(200, "Product Name,Price\nLamp,5\n").await;
    let catalog = CatalogBuilder::new()
        .with_url(url)
        .with_currency_prefix("$")
        .with_container_id("catalog")
        .with_output_format(OutputFormat::Json)
        .build()
        .unwrap();
    let mut container = catalog.new_container();
    catalog.run(&mut container).await;

    let json = catalog.output_to_string(&container).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["container"], "catalog");
    assert_eq!(value["cards"][0]["price"], "$5");
    assert_eq!(value["cards"][0]["link"], "#");
}
