//! sheetcards - Render a published spreadsheet as HTML product cards
//!
//! このクレートは、「ウェブに公開」されたスプレッドシートをCSVとして取得し、
//! 各行を商品カードのHTML断片に変換してコンテナに配置する機能を提供します。
//!
//! 埋め込む値（商品名、説明、タグ、URL）はすべてエスケープされます。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sheetcards::CatalogBuilder;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // デフォルト設定（固定のCSV URL）でカタログを構築
//!     let catalog = CatalogBuilder::new().build()?;
//!
//!     // 取得・解析・描画を1回実行
//!     let mut container = catalog.new_container();
//!     catalog.run(&mut container).await;
//!
//!     // HTMLページとして出力
//!     catalog.write_output(&container, std::fs::File::create("index.html")?)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ローカルのCSVから描画する場合は`run_from_reader`を使用します:
//!
//! ```rust
//! use sheetcards::{CatalogBuilder, OutputFormat, PageOutcome};
//!
//! # fn main() -> Result<(), sheetcards::CatalogError> {
//! let catalog = CatalogBuilder::new()
//!     .with_output_format(OutputFormat::Fragment)
//!     .build()?;
//! let mut container = catalog.new_container();
//!
//! let csv = "Product Name,Price,Features\nPower Bank,999,Fast charging; 10000mAh\n";
//! let outcome = catalog.run_from_reader(csv.as_bytes(), &mut container);
//! assert!(matches!(outcome, PageOutcome::Rendered(1)));
//!
//! let html = catalog.output_to_string(&container)?;
//! assert!(html.contains("<p class=\"product-short-info\">Fast charging</p>"));
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod container;
mod error;
mod fetch;
mod formatter;
mod markup;
mod output;
mod parser;
mod security;
mod types;

// 公開API
pub use api::{LoadOutcome, OutputFormat, PageOutcome, Status};
pub use builder::{
    Catalog, CatalogBuilder, DEFAULT_CSV_URL, DEFAULT_CURRENCY_PREFIX, DEFAULT_PLACEHOLDER_IMAGE,
};
pub use container::{Container, DEFAULT_CONTAINER_ID};
pub use error::CatalogError;
pub use markup::{escape_attr, escape_text, Element, Node};
pub use types::{CardView, ProductField, RowRecord};
