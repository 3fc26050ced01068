//! Security Module
//!
//! セキュリティ対策を実装するモジュール。
//! 巨大なレスポンスによるメモリ枯渇や、危険なスキームを持つURLの埋め込みへの対策を提供します。

/// セキュリティ設定
///
/// 取得処理時のセキュリティ制限を定義します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SecurityConfig {
    /// レスポンスボディの最大サイズ（バイト）
    /// デフォルト: 10MB (10_485_760 bytes)
    pub max_body_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 10_485_760, // 10MB
        }
    }
}

/// `href`/`src`に埋め込むと実行可能になるスキーム
const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// URLの検証
///
/// ブラウザはスキーム前の空白・制御文字を無視し、スキーム中のタブや改行も除去するため、
/// それらを取り除いた上で大文字小文字を区別せずに判定します。
///
/// # 戻り値
///
/// * `true` - 属性値として埋め込んでよい場合
/// * `false` - `javascript:`などの危険なスキームを持つ場合
pub(crate) fn is_safe_url(url: &str) -> bool {
    let normalized: String = url
        .trim_start_matches(|c: char| c.is_whitespace() || c.is_control())
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();

    !UNSAFE_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}
