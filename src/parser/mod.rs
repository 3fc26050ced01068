//! Parser Module
//!
//! `csv`クレートを使用した公開スプレッドシート（CSV）解析の実装。
//! 先頭行をヘッダーとして扱い、各行をヘッダー名でキー付けされたレコードに変換します。

mod records;

pub(crate) use records::{parse_records, retain_products};
