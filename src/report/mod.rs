//! Analysis report: recommendation cards followed by the category narrative.

mod cards;
mod narrative;

pub use narrative::Narrative;

use crate::common::html_escape;
use crate::dataset::RankedRow;

/// Render the report column for `category` as an HTML fragment.
pub fn render_report(ranked: &[RankedRow], category: &str) -> String {
    format!(
        r#"<section class="report">
<h3>📌 선택 업종: {category}</h3>
<h4>추천 행정동</h4>
{cards}<hr>
<h3>📊 창업 인사이트</h3>
{narrative}
</section>
"#,
        category = html_escape(category),
        cards = cards::render_cards(ranked),
        narrative = Narrative::for_category(category).to_html(),
    )
}
