//! CSV → RowRecord変換

use std::collections::{HashMap, HashSet};
use std::io::Read;

use tracing::debug;

use crate::error::CatalogError;
use crate::types::RowRecord;

/// CSVを解析してレコード列を返す
///
/// # 処理内容
///
/// 1. 先頭行をヘッダーとして読み込む（先頭のUTF-8 BOMは除去、重複した名前は2列目以降を改名）
/// 2. 以降の各行をヘッダー名 → 値のレコードに変換（行順を保持）
/// 3. 完全に空の行（すべてのセルが空）はスキップ
///
/// 列数が揃っていない行も受け付けます。ヘッダーより短い行は不足分の列を持たず、
/// 長い行の余剰セルは無視されます。
///
/// # 戻り値
///
/// * `Ok(Vec<RowRecord>)` - 解析に成功した場合（ヘッダーのみなら空）
/// * `Err(CatalogError::Csv)` - 不正なUTF-8などで解析できない場合
pub(crate) fn parse_records<R: Read>(input: R) -> Result<Vec<RowRecord>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = unique_headers(reader.headers()?.iter().enumerate().map(|(idx, h)| {
        if idx == 0 {
            h.trim_start_matches('\u{FEFF}')
        } else {
            h
        }
    }));

    let mut records = Vec::new();
    let mut blank_rows = 0usize;

    for result in reader.records() {
        let row = result?;
        let record: RowRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(h, v)| (h.as_str(), v))
            .collect();

        if record.is_blank() {
            blank_rows += 1;
            continue;
        }
        records.push(record);
    }

    debug!(
        columns = headers.len(),
        rows = records.len(),
        blank_rows,
        "parsed CSV"
    );

    Ok(records)
}

/// 重複したヘッダー名に連番を付けて一意にする
///
/// 最初の列が元の名前を保持し、2列目以降は`Price_1`, `Price_2`のように改名されます。
fn unique_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut counts: HashMap<&'a str, usize> = HashMap::new();
    let mut headers = Vec::new();

    for header in raw {
        let mut name = header.to_string();
        while seen.contains(&name) {
            let count = counts.entry(header).or_insert(0);
            *count += 1;
            name = format!("{}_{}", header, count);
        }
        seen.insert(name.clone());
        headers.push(name);
    }

    headers
}

/// 商品名を持つレコードだけを残す（順序は保持）
pub(crate) fn retain_products(records: Vec<RowRecord>) -> Vec<RowRecord> {
    let total = records.len();
    let products: Vec<RowRecord> = records
        .into_iter()
        .filter(RowRecord::has_product_name)
        .collect();

    if products.len() < total {
        debug!(
            dropped = total - products.len(),
            "dropped rows without a product name"
        );
    }

    products
}
