use crate::common::{map_fill, BACKGROUND_FILL};
use crate::dataset::Annotation;

/// Paint settings for one region on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub weight: f64,
    pub fill_opacity: f64,
}

/// Top-5 regions get their rank color with a black outline; everything
/// else is drawn as a faint gray backdrop.
pub fn style_for(annotation: &Annotation) -> RegionStyle {
    match *annotation {
        Annotation::Top5 { rank, .. } => RegionStyle {
            fill: map_fill(rank),
            stroke: "black",
            weight: 1.5,
            fill_opacity: 0.7,
        },
        Annotation::Background => RegionStyle {
            fill: BACKGROUND_FILL,
            stroke: "gray",
            weight: 0.5,
            fill_opacity: 0.2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top5_style_uses_rank_color() {
        let style = style_for(&Annotation::Top5 { rank: 2, sales: 0, stores: 0 });
        assert_eq!(style, RegionStyle { fill: "#E67E22", stroke: "black", weight: 1.5, fill_opacity: 0.7 });
    }

    #[test]
    fn background_style_is_neutral() {
        let style = style_for(&Annotation::Background);
        assert_eq!(style, RegionStyle { fill: "#f0f0f0", stroke: "gray", weight: 0.5, fill_opacity: 0.2 });
    }

    #[test]
    fn out_of_range_rank_uses_first_color() {
        assert_eq!(style_for(&Annotation::Top5 { rank: 7, sales: 0, stores: 0 }).fill, "#CC0000");
    }
}
