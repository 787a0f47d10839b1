use crate::common::{card_fill, card_text, fmt_int, fmt_ratio, fmt_won, html_escape};
use crate::dataset::RankedRow;

/// Render one colored card per ranked region, or an empty-state note.
pub(crate) fn render_cards(ranked: &[RankedRow]) -> String {
    if ranked.is_empty() {
        return r#"<p class="empty">선택한 업종의 추천 행정동이 없습니다.</p>"#.to_string();
    }

    let mut out = String::new();
    for row in ranked {
        let m = &row.metrics;
        let text = card_text(row.rank);
        out.push_str(&format!(
            r#"<div class="card" style="background-color: {fill}; color: {text};">
<strong class="card-title">{rank}위 | {region}</strong>
<ul>
<li>예상 매출: {sales}</li>
<li>서울 대비 매출: {ratio}</li>
<li>점포 수: {stores}개</li>
<li>총 직장인구: {workers}명</li>
<li>총 유동인구: {floating}명</li>
</ul>
</div>
"#,
            fill = card_fill(row.rank),
            rank = row.rank,
            region = html_escape(&m.region_name),
            sales = fmt_won(m.expected_sales_per_store),
            ratio = fmt_ratio(m.performance_index),
            stores = fmt_int(m.store_count),
            workers = fmt_int(m.worker_population),
            floating = fmt_int(m.floating_population),
        ));
    }
    out
}
