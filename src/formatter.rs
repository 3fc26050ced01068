//! Formatter Module
//!
//! 1件のレコードから表示用の値を導出し、カード断片を組み立てるモジュール。
//! 各フィールドの導出は互いに独立で、他の行にも依存しません。

use crate::builder::CatalogConfig;
use crate::markup::Element;
use crate::security::is_safe_url;
use crate::types::{CardView, ProductField, RowRecord};

/// 購入ボタンの文言
const BUY_BUTTON_LABEL: &str = "View / Buy";

/// リンク先がない場合の無効なアンカー
const INERT_LINK: &str = "#";

/// カードフォーマッター
///
/// レコード → `CardView` → `Element`の2段階で変換します。
#[derive(Debug, Default)]
pub(crate) struct CardFormatter;

impl CardFormatter {
    /// 新しいCardFormatterインスタンスを生成
    pub fn new() -> Self {
        Self
    }

    /// レコードから表示用の値を導出
    ///
    /// # 導出ルール
    ///
    /// 1. 価格: `Price`が空でなければ通貨記号を付けて表示
    /// 2. 取り消し価格: `Cut-Off Price`が空でなく、かつ`Price`と文字列として異なる場合のみ表示
    /// 3. 短い説明: `Features`の最初の`;`より前をtrimしたもの
    /// 4. オファータグ: `Offer Tag`が空でなければ表示
    /// 5. 画像: `Image URL`、なければプレースホルダー
    /// 6. リンク: `Buy Link`、なければ`#`
    ///
    /// 価格は書式済みの文字列として扱い、数値としては解釈しません。
    pub fn format(&self, record: &RowRecord, config: &CatalogConfig) -> CardView {
        let price = record.field(ProductField::Price);

        let price_display = price.map(|p| format!("{}{}", config.currency_prefix, p));

        let cut_off_display = record
            .field(ProductField::CutOffPrice)
            .filter(|cut_off| Some(*cut_off) != price)
            .map(|c| format!("{}{}", config.currency_prefix, c));

        let short_info = record
            .field(ProductField::Features)
            .and_then(|f| f.split(';').next())
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        let image_src = record
            .field(ProductField::ImageUrl)
            .filter(|url| is_safe_url(url))
            .unwrap_or(config.placeholder_image.as_str())
            .to_string();

        let link = record
            .field(ProductField::BuyLink)
            .filter(|url| is_safe_url(url))
            .unwrap_or(INERT_LINK)
            .to_string();

        CardView {
            name: record
                .get(ProductField::ProductName.header())
                .unwrap_or_default()
                .to_string(),
            price: price_display,
            cut_off_price: cut_off_display,
            short_info,
            offer_tag: record.field(ProductField::OfferTag).map(str::to_string),
            image_src,
            link,
        }
    }

    /// 導出済みの値からカード断片を組み立てる
    ///
    /// 要素の順序は固定: 画像（＋オファータグ）、商品名、短い説明、価格欄、購入リンク。
    pub fn build_card(&self, view: &CardView) -> Element {
        let image = Element::new("div")
            .class("card-image-container")
            .child(
                Element::void("img")
                    .attr("src", view.image_src.as_str())
                    .attr("alt", view.name.as_str())
                    .class("product-image"),
            )
            .child_opt(
                view.offer_tag
                    .as_deref()
                    .map(|tag| Element::new("div").class("offer-tag").text(tag)),
            );

        let prices = Element::new("div")
            .class("price-section")
            .child_opt(
                view.price
                    .as_deref()
                    .map(|p| Element::new("span").class("price").text(p)),
            )
            .child_opt(
                view.cut_off_price
                    .as_deref()
                    .map(|c| Element::new("span").class("cut-off-price").text(c)),
            );

        let details = Element::new("div")
            .class("card-details")
            .child(
                Element::new("h3")
                    .class("product-name")
                    .text(view.name.as_str()),
            )
            .child(
                Element::new("p")
                    .class("product-short-info")
                    .text(view.short_info.as_str()),
            )
            .child(prices)
            .child(
                Element::new("a")
                    .attr("href", view.link.as_str())
                    .class("buy-button")
                    .text(BUY_BUTTON_LABEL),
            );

        Element::new("div")
            .class("product-card")
            .child(image)
            .child(details)
    }

    /// レコードから直接カード断片を組み立てる
    pub fn format_card(&self, record: &RowRecord, config: &CatalogConfig) -> Element {
        self.build_card(&self.format(record, config))
    }
}
