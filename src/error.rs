//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// sheetcardsクレート全体で使用するエラー型
///
/// CSVの取得、解析、HTML出力中に発生するすべてのエラーを統一的に扱います。
///
/// # エラーの種類
///
/// - `Http`: ネットワーク/HTTPレベルの失敗（接続失敗、2xx以外のステータスなど）
/// - `Csv`: CSVの解析に失敗したエラー
/// - `Io`: 出力の書き込みやローカルファイル読み込みの失敗
/// - `Json`: JSON出力のシリアライズ失敗
/// - `Config`: `CatalogBuilder::build()`時の設定検証エラー
/// - `SecurityViolation`: レスポンスサイズ制限などへの違反
///
/// # 使用例
///
/// ```rust,no_run
/// use sheetcards::CatalogError;
/// use std::fs::File;
///
/// fn open_sheet(path: &str) -> Result<File, CatalogError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     Ok(file)
/// }
/// ```
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTPリクエストの失敗
    ///
    /// 接続エラー、レスポンスボディの読み込み失敗、2xx以外のステータスコードが含まれます。
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// CSVの解析中に発生したエラー
    ///
    /// 不正なUTF-8、読み込み途中のI/Oエラーなど、`csv`クレートが報告するエラーです。
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// I/O操作中に発生したエラー
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON出力のシリアライズエラー
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// # 例
    ///
    /// ```rust
    /// use sheetcards::{CatalogBuilder, CatalogError};
    ///
    /// let result = CatalogBuilder::new()
    ///     .with_url("ftp://example.com/products.csv")
    ///     .build();
    ///
    /// assert!(matches!(result, Err(CatalogError::Config(_))));
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// レスポンスボディが`max_body_size`を超えた場合などに発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}
