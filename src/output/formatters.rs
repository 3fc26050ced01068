//! Output Formatters Implementation
//!
//! 各出力フォーマットの実装を提供するモジュール。

use serde::Serialize;

use crate::api::Status;
use crate::builder::CatalogConfig;
use crate::container::Container;
use crate::error::CatalogError;
use crate::markup::Element;
use crate::types::CardView;
use std::io::Write;

/// 完全なHTML5ドキュメントのフォーマッター
pub(crate) struct PageFormatter;

impl PageFormatter {
    pub fn render<W: Write>(
        &self,
        container: &Container,
        writer: &mut W,
        config: &CatalogConfig,
    ) -> Result<(), CatalogError> {
        let head = Element::new("head")
            .child(Element::void("meta").attr("charset", "UTF-8"))
            .child(
                Element::void("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1.0"),
            )
            .child(Element::new("title").text(config.page_title.as_str()))
            .child(
                Element::void("link")
                    .attr("rel", "stylesheet")
                    .attr("href", config.stylesheet.as_str()),
            );

        let body = Element::new("body").child(container.to_element());

        let html = Element::new("html")
            .attr("lang", "en")
            .child(head)
            .child(body);

        writeln!(writer, "<!DOCTYPE html>")?;
        html.render(writer, 0)?;
        writer.flush()?;
        Ok(())
    }
}

/// コンテナ要素のみのフォーマッター
pub(crate) struct FragmentFormatter;

impl FragmentFormatter {
    pub fn render<W: Write>(
        &self,
        container: &Container,
        writer: &mut W,
    ) -> Result<(), CatalogError> {
        container.render(writer, 0)?;
        writer.flush()?;
        Ok(())
    }
}

/// JSON形式のフォーマッター
pub(crate) struct JsonFormatter;

#[derive(Serialize)]
struct JsonDocument<'a> {
    container: &'a str,
    status: Option<Status>,
    message: Option<&'static str>,
    cards: &'a [CardView],
}

impl JsonFormatter {
    pub fn render<W: Write>(
        &self,
        container: &Container,
        writer: &mut W,
    ) -> Result<(), CatalogError> {
        let status = container.status();
        let document = JsonDocument {
            container: container.id(),
            status,
            message: status.map(|s| s.message()),
            cards: container.cards(),
        };

        serde_json::to_writer_pretty(&mut *writer, &document)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
