//! Container Module
//!
//! カードまたはステータス段落を保持する出力先。
//! パイプラインには`&mut Container`として明示的に渡され、各フェーズは以前の内容を完全に置き換えてから書き込みます。

use std::io::Write;

use crate::api::Status;
use crate::error::CatalogError;
use crate::formatter::CardFormatter;
use crate::markup::Element;
use crate::types::CardView;

/// デフォルトのコンテナID
pub const DEFAULT_CONTAINER_ID: &str = "product-list";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Blank,
    Status(Status),
    Cards(Vec<CardView>),
}

/// 表示コンテナ
///
/// 状態は「空」「ステータス段落1つ」「カードの列」のいずれか1つです。
/// カードは導出済みの`CardView`として保持し、出力時に断片へ変換します。
///
/// # 使用例
///
/// ```rust
/// use sheetcards::{Container, Status};
///
/// let mut container = Container::default();
/// container.show_status(Status::Loading);
/// assert_eq!(container.status(), Some(Status::Loading));
///
/// container.clear();
/// assert_eq!(container.status(), None);
/// assert!(container.cards().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    content: Content,
}

impl Default for Container {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_ID)
    }
}

impl Container {
    /// 指定したIDで空のコンテナを生成
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: Content::Blank,
        }
    }

    /// コンテナのID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// 内容をステータス段落1つに置き換える
    pub fn show_status(&mut self, status: Status) {
        self.content = Content::Status(status);
    }

    /// 内容を消去し、カードを受け付ける状態にする
    pub fn clear(&mut self) {
        self.content = Content::Cards(Vec::new());
    }

    /// カードを末尾に追加
    ///
    /// ステータス表示中に呼ばれた場合は、ステータスを消去してから追加します。
    pub fn append(&mut self, card: CardView) {
        if let Content::Cards(cards) = &mut self.content {
            cards.push(card);
        } else {
            self.content = Content::Cards(vec![card]);
        }
    }

    /// 表示中のステータス
    pub fn status(&self) -> Option<Status> {
        match self.content {
            Content::Status(status) => Some(status),
            _ => None,
        }
    }

    /// 表示中のカード
    pub fn cards(&self) -> &[CardView] {
        match &self.content {
            Content::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// コンテナ要素に変換
    pub fn to_element(&self) -> Element {
        let root = Element::new("div").attr("id", self.id.as_str());
        match &self.content {
            Content::Blank => root,
            Content::Status(status) => {
                root.child(Element::new("p").class(status.class()).text(status.message()))
            }
            Content::Cards(cards) => {
                let formatter = CardFormatter::new();
                cards
                    .iter()
                    .fold(root, |el, card| el.child(formatter.build_card(card)))
            }
        }
    }

    /// HTMLとして出力
    pub fn render<W: Write>(&self, writer: &mut W, depth: usize) -> Result<(), CatalogError> {
        self.to_element().render(writer, depth)
    }

    /// HTML文字列に変換
    pub fn to_html(&self) -> Result<String, CatalogError> {
        self.to_element().to_html()
    }
}
