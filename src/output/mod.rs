//! Output Format Module
//!
//! Strategy Patternによる出力フォーマットの抽象化を提供するモジュール。

mod formatters;

use crate::builder::CatalogConfig;
use crate::container::Container;
use crate::error::CatalogError;
use std::io::Write;

pub(crate) use formatters::*;

/// 出力フォーマッター（Strategy Pattern）
///
/// 各出力フォーマット（Page, Fragment, JSON）をenumとして表現します。
#[derive(Debug, Clone, Copy)]
pub(crate) enum OutputFormatter {
    Page,
    Fragment,
    Json,
}

impl OutputFormatter {
    /// 出力フォーマットからフォーマッターを生成
    pub fn from_format(format: crate::api::OutputFormat) -> Self {
        match format {
            crate::api::OutputFormat::Page => OutputFormatter::Page,
            crate::api::OutputFormat::Fragment => OutputFormatter::Fragment,
            crate::api::OutputFormat::Json => OutputFormatter::Json,
        }
    }

    /// コンテナを指定されたフォーマットで出力する
    ///
    /// # 引数
    ///
    /// * `container` - 出力するコンテナ
    /// * `writer` - 出力先のライター
    /// * `config` - ページタイトルやスタイルシートなどの設定
    pub fn render<W: Write>(
        &self,
        container: &Container,
        writer: &mut W,
        config: &CatalogConfig,
    ) -> Result<(), CatalogError> {
        match self {
            OutputFormatter::Page => PageFormatter.render(container, writer, config),
            OutputFormatter::Fragment => FragmentFormatter.render(container, writer),
            OutputFormatter::Json => JsonFormatter.render(container, writer),
        }
    }
}
