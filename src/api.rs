//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use std::str::FromStr;

use serde::Serialize;

use crate::error::CatalogError;
use crate::types::RowRecord;

/// コンテナに表示するステータスメッセージ
///
/// コンテナはカードの一覧か、以下のいずれか1つの段落を表示します。
/// 新しいステータスは常に以前の内容を置き換えます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// 読み込み中（取得開始前に表示）
    Loading,

    /// 解析は成功したが、有効な行が0件
    Empty,

    /// 取得または解析に失敗
    Error,
}

impl Status {
    /// 段落に表示する文言
    pub fn message(&self) -> &'static str {
        match self {
            Status::Loading => "Loading products...",
            Status::Empty => "No products found in the sheet or the data is empty.",
            Status::Error => "Error loading products. Check console for details.",
        }
    }

    /// 段落の`class`属性
    pub fn class(&self) -> &'static str {
        match self {
            Status::Loading => "loading",
            Status::Empty | Status::Error => "error",
        }
    }
}

/// 読み込み結果
///
/// 取得と解析が完了した場合の結果です。取得・解析の失敗は`Err(CatalogError)`で表します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 商品名を持つレコード（1件以上、スプレッドシートの行順）
    Products(Vec<RowRecord>),

    /// 解析は完了したが、商品名を持つ行が0件
    Empty,
}

impl LoadOutcome {
    /// フィルタ済みレコードから結果を生成
    pub fn from_products(products: Vec<RowRecord>) -> Self {
        if products.is_empty() {
            LoadOutcome::Empty
        } else {
            LoadOutcome::Products(products)
        }
    }
}

/// パイプライン1回分の最終結果
///
/// `Catalog::run`は呼び出し元にエラーを返さず、結果をこの値で報告します。
#[derive(Debug)]
pub enum PageOutcome {
    /// 指定枚数のカードを描画
    Rendered(usize),

    /// 「商品なし」メッセージを表示
    Empty,

    /// エラーメッセージを表示（原因のエラーを保持）
    Failed(CatalogError),
}

impl PageOutcome {
    /// 失敗した場合は`true`
    pub fn is_failure(&self) -> bool {
        matches!(self, PageOutcome::Failed(_))
    }

    /// コンテナに表示されたステータス（カード描画時は`None`）
    pub fn status(&self) -> Option<Status> {
        match self {
            PageOutcome::Rendered(_) => None,
            PageOutcome::Empty => Some(Status::Empty),
            PageOutcome::Failed(_) => Some(Status::Error),
        }
    }
}

/// 出力フォーマット
///
/// 完成したコンテナをどの形式で書き出すかを指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// 完全なHTML5ドキュメント（デフォルト）
    ///
    /// `<head>`に外部スタイルシートへのリンクを含み、`<body>`にコンテナを配置します。
    #[default]
    Page,

    /// コンテナ要素のみ
    ///
    /// # 出力例
    ///
    /// ```html
    /// <div id="product-list">
    ///   <div class="product-card">
    ///     ...
    ///   </div>
    /// </div>
    /// ```
    Fragment,

    /// 導出済みカードデータのJSON
    ///
    /// # 出力例
    ///
    /// ```json
    /// {
    ///   "status": null,
    ///   "cards": [
    ///     {"name": "Power Bank", "price": "₹999", "link": "#", ...}
    ///   ]
    /// }
    /// ```
    Json,
}

impl FromStr for OutputFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "page" | "html" => Ok(OutputFormat::Page),
            "fragment" => Ok(OutputFormat::Fragment),
            "json" => Ok(OutputFormat::Json),
            other => Err(CatalogError::Config(format!(
                "Unknown output format: '{}' (expected page, fragment or json)",
                other
            ))),
        }
    }
}
