//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use std::collections::HashMap;

use serde::Serialize;

/// 認識する列（ヘッダー名は大文字小文字・綴りとも完全一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    /// 必須。trim後に空の行は破棄される
    ProductName,
    Price,
    CutOffPrice,
    /// セミコロン区切り。先頭の要素のみ使用
    Features,
    OfferTag,
    ImageUrl,
    BuyLink,
}

impl ProductField {
    /// すべての認識列
    pub const ALL: [ProductField; 7] = [
        ProductField::ProductName,
        ProductField::Price,
        ProductField::CutOffPrice,
        ProductField::Features,
        ProductField::OfferTag,
        ProductField::ImageUrl,
        ProductField::BuyLink,
    ];

    /// スプレッドシート上のヘッダー名
    pub fn header(&self) -> &'static str {
        match self {
            ProductField::ProductName => "Product Name",
            ProductField::Price => "Price",
            ProductField::CutOffPrice => "Cut-Off Price",
            ProductField::Features => "Features",
            ProductField::OfferTag => "Offer Tag",
            ProductField::ImageUrl => "Image URL",
            ProductField::BuyLink => "Buy Link",
        }
    }
}

/// スプレッドシート1行分のレコード（ヘッダー名 → セル値）
///
/// 読み込みのたびに新しく生成され、描画パスが所有します。
/// 存在しないヘッダーの参照は「値なし」として扱われます。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    fields: HashMap<String, String>,
}

impl RowRecord {
    /// 空のレコードを生成
    pub fn new() -> Self {
        Self::default()
    }

    /// 値を設定する（同じヘッダーが既にあれば上書き）
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(header.into(), value.into());
    }

    /// ヘッダー名で生の値を取得
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields.get(header).map(String::as_str)
    }

    /// 認識列の値を取得（空文字列は`None`）
    pub fn field(&self, field: ProductField) -> Option<&str> {
        self.get(field.header()).filter(|v| !v.is_empty())
    }

    /// 商品名がtrim後に空でないか
    pub fn has_product_name(&self) -> bool {
        self.get(ProductField::ProductName.header())
            .is_some_and(|name| !name.trim().is_empty())
    }

    /// すべてのセルが空か
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|v| v.is_empty())
    }

    /// 列数
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// 列を1つも持たないか
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RowRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RowRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// 1枚のカードに表示する導出済みの値
///
/// 描画前の中間表現で、エスケープはまだ適用されていません。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// 商品名（レコードの値そのまま）
    pub name: String,

    /// 通貨記号付きの価格
    pub price: Option<String>,

    /// 通貨記号付きの取り消し価格（価格と同じ場合は`None`）
    pub cut_off_price: Option<String>,

    /// Featuresの先頭要素
    pub short_info: String,

    /// 画像上に重ねるラベル
    pub offer_tag: Option<String>,

    /// 画像のsrc（フォールバック適用済み）
    pub image_src: String,

    /// 購入リンク（フォールバック適用済み）
    pub link: String,
}
