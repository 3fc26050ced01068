//! Builder Module
//!
//! Fluent Builder APIを提供し、`Catalog`インスタンスを段階的に構築する。

use crate::api::{LoadOutcome, OutputFormat, PageOutcome, Status};
use crate::container::{Container, DEFAULT_CONTAINER_ID};
use crate::error::CatalogError;
use crate::formatter::CardFormatter;
use crate::markup::Element;
use crate::security::SecurityConfig;
use crate::types::{CardView, RowRecord};
use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{error, info, warn};
use url::Url;

/// 商品データの取得元（「ウェブに公開」で発行したCSVのURL）
pub const DEFAULT_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRiruKcaG_uOrw4Jopnd120308aLmHeOvJEVLuNHtqwYVGGYy3D_FGTilfu8KFGq5A4Hqc_9Jh5e-hY/pub?gid=771466171&single=true&output=csv";

/// デフォルトの通貨記号
pub const DEFAULT_CURRENCY_PREFIX: &str = "₹";

/// 画像URLがない場合のプレースホルダー
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "placeholder.png";

/// リーダーから読み込んだ場合にログに記録する読み込み元
const LOCAL_INPUT: &str = "local input";

/// 描画設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct CatalogConfig {
    /// 取得元URL
    pub url: String,

    /// 価格の前に付ける通貨記号
    pub currency_prefix: String,

    /// 画像URLがない場合の画像
    pub placeholder_image: String,

    /// コンテナ要素のid
    pub container_id: String,

    /// 出力フォーマット
    pub output_format: OutputFormat,

    /// ページ出力時の`<title>`
    pub page_title: String,

    /// ページ出力時の外部スタイルシート
    pub stylesheet: String,

    /// 取得時のセキュリティ制限
    pub security: SecurityConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CSV_URL.to_string(),
            currency_prefix: DEFAULT_CURRENCY_PREFIX.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            output_format: OutputFormat::Page,
            page_title: "Products".to_string(),
            stylesheet: "style.css".to_string(),
            security: SecurityConfig::default(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust
/// use sheetcards::{CatalogBuilder, OutputFormat};
///
/// # fn main() -> Result<(), sheetcards::CatalogError> {
/// let catalog = CatalogBuilder::new()
///     .with_currency_prefix("$")
///     .with_output_format(OutputFormat::Fragment)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    /// 内部設定（構築中）
    config: CatalogConfig,

    /// 利用するHTTPクライアント（Noneの場合はデフォルト）
    client: Option<reqwest::Client>,
}

impl CatalogBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 取得元: `DEFAULT_CSV_URL`
    /// - 通貨記号: `₹`
    /// - プレースホルダー画像: `placeholder.png`
    /// - コンテナID: `product-list`
    /// - 出力フォーマット: ページ
    /// - 最大ボディサイズ: 10MB
    pub fn new() -> Self {
        Self::default()
    }

    /// 取得元URLを指定する
    ///
    /// `build()`時にhttp/httpsのURLであることを検証します。
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// 価格の通貨記号を指定する（空文字列も可）
    pub fn with_currency_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.currency_prefix = prefix.into();
        self
    }

    /// 画像URLがない場合のプレースホルダーを指定する
    pub fn with_placeholder_image(mut self, image: impl Into<String>) -> Self {
        self.config.placeholder_image = image.into();
        self
    }

    /// コンテナ要素のidを指定する
    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.config.container_id = id.into();
        self
    }

    /// 出力フォーマットを指定する
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    /// ページ出力時のタイトルを指定する
    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.config.page_title = title.into();
        self
    }

    /// ページ出力時に読み込むスタイルシートを指定する
    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.config.stylesheet = href.into();
        self
    }

    /// レスポンスボディの最大サイズ（バイト）を指定する
    pub fn with_max_body_size(mut self, bytes: u64) -> Self {
        self.config.security.max_body_size = bytes;
        self
    }

    /// HTTPクライアントを指定する
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// 設定を検証し、`Catalog`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `CatalogError::Config(String)`: 設定の検証に失敗した場合
    ///   * URLが解析できない、またはhttp/https以外
    ///   * プレースホルダー画像が空
    ///   * コンテナIDが空、または空白を含む
    ///   * 最大ボディサイズが0
    pub fn build(self) -> Result<Catalog, CatalogError> {
        // 1. URLの検証
        let url = Url::parse(&self.config.url).map_err(|e| {
            CatalogError::Config(format!("Invalid URL '{}': {}", self.config.url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::Config(format!(
                "Unsupported URL scheme '{}' (expected http or https)",
                url.scheme()
            )));
        }

        // 2. 表示設定の検証
        if self.config.placeholder_image.trim().is_empty() {
            return Err(CatalogError::Config(
                "Placeholder image must not be empty".to_string(),
            ));
        }
        if self.config.container_id.is_empty()
            || self.config.container_id.chars().any(char::is_whitespace)
        {
            return Err(CatalogError::Config(format!(
                "Invalid container id: '{}'",
                self.config.container_id
            )));
        }

        // 3. セキュリティ設定の検証
        if self.config.security.max_body_size == 0 {
            return Err(CatalogError::Config(
                "Max body size must be greater than 0".to_string(),
            ));
        }

        Ok(Catalog {
            url,
            client: self.client.unwrap_or_default(),
            formatter: CardFormatter::new(),
            config: self.config,
        })
    }
}

/// 取得・解析・描画のファサード
///
/// # 使用例
///
/// ```rust,no_run
/// use sheetcards::{CatalogBuilder, PageOutcome};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), sheetcards::CatalogError> {
/// let catalog = CatalogBuilder::new().build()?;
/// let mut container = catalog.new_container();
///
/// match catalog.run(&mut container).await {
///     PageOutcome::Rendered(n) => println!("{} products", n),
///     PageOutcome::Empty => println!("no products"),
///     PageOutcome::Failed(e) => eprintln!("{}", e),
/// }
///
/// catalog.write_output(&container, std::io::stdout())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Catalog {
    /// 検証済みの取得元URL
    url: Url,

    /// HTTPクライアント
    client: reqwest::Client,

    /// カードフォーマッター
    formatter: CardFormatter,

    /// 描画設定
    config: CatalogConfig,
}

impl Catalog {
    /// 取得元URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// 設定済みのIDで空のコンテナを生成
    pub fn new_container(&self) -> Container {
        Container::new(self.config.container_id.as_str())
    }

    /// CSVを1回取得し、商品レコードを返す
    ///
    /// # 戻り値
    ///
    /// * `Ok(LoadOutcome::Products)` - 商品名を持つ行が1件以上
    /// * `Ok(LoadOutcome::Empty)` - 解析は成功したが有効な行が0件
    /// * `Err(CatalogError)` - 取得または解析に失敗
    pub async fn load(&self) -> Result<LoadOutcome, CatalogError> {
        let body =
            crate::fetch::fetch_csv(&self.client, &self.url, &self.config.security).await?;
        self.load_from_reader(body.as_slice())
    }

    /// ローカルのCSVデータから商品レコードを読み込む
    pub fn load_from_reader<R: Read>(&self, input: R) -> Result<LoadOutcome, CatalogError> {
        let records = crate::parser::parse_records(input)?;
        let products = crate::parser::retain_products(records);
        Ok(LoadOutcome::from_products(products))
    }

    /// 1件のレコードから表示用の値を導出
    pub fn card_view(&self, record: &RowRecord) -> CardView {
        self.formatter.format(record, &self.config)
    }

    /// 1件のレコードからカード断片を組み立てる
    pub fn render_card(&self, record: &RowRecord) -> Element {
        self.formatter.format_card(record, &self.config)
    }

    /// 読み込み結果をコンテナに反映する
    ///
    /// 成功時は内容を消去してから行順にカードを追加し、
    /// 0件・失敗時はステータス段落1つに置き換えます。
    /// `source`はログに記録する読み込み元（URL、ファイルパスなど）です。
    pub fn render_outcome(
        &self,
        result: Result<LoadOutcome, CatalogError>,
        source: &dyn fmt::Display,
        container: &mut Container,
    ) -> PageOutcome {
        self.apply_outcome(result, source, "Failed to load product data", container)
    }

    fn apply_outcome(
        &self,
        result: Result<LoadOutcome, CatalogError>,
        source: &dyn fmt::Display,
        failure: &'static str,
        container: &mut Container,
    ) -> PageOutcome {
        match result {
            Ok(LoadOutcome::Products(products)) => {
                container.clear();
                for record in &products {
                    container.append(self.card_view(record));
                }
                info!(cards = products.len(), source = %source, "rendered product cards");
                PageOutcome::Rendered(products.len())
            }
            Ok(LoadOutcome::Empty) => {
                warn!(source = %source, "no products found in the sheet");
                container.show_status(Status::Empty);
                PageOutcome::Empty
            }
            Err(e) => {
                error!(source = %source, error = %e, "{}", failure);
                container.show_status(Status::Error);
                PageOutcome::Failed(e)
            }
        }
    }

    /// パイプラインを1回実行する
    ///
    /// 1. コンテナに読み込み中メッセージを表示
    /// 2. CSVを1回取得・解析（リトライなし）
    /// 3. 結果をコンテナに反映
    ///
    /// このメソッドはエラーを返しません。結果は`PageOutcome`で報告されます。
    pub async fn run(&self, container: &mut Container) -> PageOutcome {
        container.show_status(Status::Loading);
        let result = self.load().await;
        self.apply_outcome(result, &self.url, "Failed to fetch product data", container)
    }

    /// ローカルのCSVデータでパイプラインを実行する
    pub fn run_from_reader<R: Read>(&self, input: R, container: &mut Container) -> PageOutcome {
        container.show_status(Status::Loading);
        let result = self.load_from_reader(input);
        self.render_outcome(result, &LOCAL_INPUT, container)
    }

    /// ローカルのCSVファイルでパイプラインを実行する
    ///
    /// ファイルを開けない場合もエラーステータスを表示し、`PageOutcome::Failed`を返します。
    pub fn run_from_file(&self, path: impl AsRef<Path>, container: &mut Container) -> PageOutcome {
        let path = path.as_ref();
        container.show_status(Status::Loading);
        let result = File::open(path)
            .map_err(CatalogError::from)
            .and_then(|file| self.load_from_reader(file));
        self.render_outcome(result, &path.display(), container)
    }

    /// コンテナを設定済みの出力フォーマットで書き出す
    pub fn write_output<W: Write>(
        &self,
        container: &Container,
        mut output: W,
    ) -> Result<(), CatalogError> {
        let formatter = crate::output::OutputFormatter::from_format(self.config.output_format);
        formatter.render(container, &mut output, &self.config)
    }

    /// コンテナを設定済みの出力フォーマットで文字列に変換
    pub fn output_to_string(&self, container: &Container) -> Result<String, CatalogError> {
        let mut buffer = Vec::new();
        self.write_output(container, &mut buffer)?;

        let result = String::from_utf8(buffer).map_err(|e| {
            CatalogError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        Ok(result)
    }
}
