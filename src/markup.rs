//! Markup Module
//!
//! HTML断片を木構造で組み立てるビルダーを提供するモジュール。
//! タグ名・属性名は`&'static str`に限定し、埋め込む値（テキスト・属性値）は出力時に必ずエスケープします。

use std::borrow::Cow;
use std::io::Write;

use crate::error::CatalogError;

/// インデント1段分
const INDENT: &str = "  ";

/// ノード（要素またはテキスト）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// HTML要素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
    /// 閉じタグを持たない要素（`<img>`など）
    void: bool,
}

impl Element {
    /// 通常の要素を生成
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
            void: false,
        }
    }

    /// 空要素（閉じタグなし）を生成
    pub fn void(tag: &'static str) -> Self {
        Self {
            void: true,
            ..Self::new(tag)
        }
    }

    /// 属性を追加
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// `class`属性を追加
    pub fn class(self, class: &'static str) -> Self {
        self.attr("class", class)
    }

    /// 子要素を追加
    ///
    /// 空要素に対しては何もしません。
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        if !self.void {
            self.children.push(node.into());
        }
        self
    }

    /// `Some`の場合のみ子要素を追加
    pub fn child_opt(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    /// テキストノードを追加
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// タグ名
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// 属性値を取得（エスケープ前）
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// 子ノード
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// 指定した`class`を持つ子孫要素を深さ優先で検索
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.get_attr("class") == Some(class) {
            return Some(self);
        }
        self.children.iter().find_map(|node| match node {
            Node::Element(e) => e.find_by_class(class),
            Node::Text(_) => None,
        })
    }

    /// 子孫のテキストを連結して返す（エスケープ前）
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => out.push_str(&e.text_content()),
            }
        }
        out
    }

    /// インデント付きでHTMLを出力
    ///
    /// 子がテキストのみ（または空）の要素は1行で出力し、
    /// 子要素を含む場合は子を1段深くインデントして改行区切りで出力します。
    pub fn render<W: Write>(&self, writer: &mut W, depth: usize) -> Result<(), CatalogError> {
        let pad = INDENT.repeat(depth);
        write!(writer, "{}<{}", pad, self.tag)?;
        for (name, value) in &self.attrs {
            write!(writer, " {}=\"{}\"", name, escape_attr(value))?;
        }
        write!(writer, ">")?;

        if self.void {
            writeln!(writer)?;
            return Ok(());
        }

        let inline = self.children.iter().all(|n| matches!(n, Node::Text(_)));
        if inline {
            for node in &self.children {
                if let Node::Text(t) = node {
                    write!(writer, "{}", escape_text(t))?;
                }
            }
            writeln!(writer, "</{}>", self.tag)?;
            return Ok(());
        }

        writeln!(writer)?;
        for node in &self.children {
            match node {
                Node::Element(e) => e.render(writer, depth + 1)?,
                Node::Text(t) => writeln!(writer, "{}{}{}", pad, INDENT, escape_text(t))?,
            }
        }
        writeln!(writer, "{}</{}>", pad, self.tag)?;
        Ok(())
    }

    /// HTML文字列に変換
    pub fn to_html(&self) -> Result<String, CatalogError> {
        let mut buffer = Vec::new();
        self.render(&mut buffer, 0)?;
        String::from_utf8(buffer)
            .map_err(|e| CatalogError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}

/// テキストノード用のエスケープ
pub fn escape_text(s: &str) -> Cow<'_, str> {
    escape(s, false)
}

/// 属性値用のエスケープ（引用符も置換）
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape(s, true)
}

fn escape(s: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| match c {
        '&' | '<' | '>' => true,
        '"' | '\'' => quotes,
        _ => false,
    };

    if !s.chars().any(needs_escape) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            '\'' if quotes => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
