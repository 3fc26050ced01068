//! Fetch Module
//!
//! 公開スプレッドシートのCSVを1回だけ取得する。リトライ・タイムアウト設定は行いません。

use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::error::CatalogError;
use crate::security::SecurityConfig;

/// CSVを取得してボディのバイト列を返す
///
/// リダイレクトは`reqwest`のデフォルトに従って追跡します。
///
/// # 発生し得るエラー
///
/// * `CatalogError::Http` - 接続失敗、2xx以外のステータス、ボディ読み込み失敗
/// * `CatalogError::SecurityViolation` - ボディが`max_body_size`を超えた場合
pub(crate) async fn fetch_csv(
    client: &Client,
    url: &Url,
    security: &SecurityConfig,
) -> Result<Vec<u8>, CatalogError> {
    info!(%url, "fetching product sheet");

    let mut response = client.get(url.clone()).send().await?.error_for_status()?;

    if let Some(length) = response.content_length() {
        if length > security.max_body_size {
            return Err(body_too_large(length, security));
        }
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let received = (body.len() + chunk.len()) as u64;
        if received > security.max_body_size {
            return Err(body_too_large(received, security));
        }
        body.extend_from_slice(&chunk);
    }

    debug!(status = %response.status(), bytes = body.len(), "downloaded product sheet");
    Ok(body)
}

fn body_too_large(size: u64, security: &SecurityConfig) -> CatalogError {
    CatalogError::SecurityViolation(format!(
        "Response body exceeds maximum: {} bytes (max: {} bytes)",
        size, security.max_body_size
    ))
}
