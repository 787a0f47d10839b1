use geo::MultiPolygon;
use serde_json::{Map, Value};

/// Rank annotation attached to a region by the geometry join.
///
/// `Background` stands for "no data": it is never rendered as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Annotation {
    #[default]
    Background,
    Top5 { rank: u32, sales: i64, stores: i64 },
}

impl Annotation {
    #[inline]
    pub fn is_top5(&self) -> bool { matches!(self, Annotation::Top5 { .. }) }

    #[inline]
    pub fn rank(&self) -> Option<u32> {
        match *self {
            Annotation::Top5 { rank, .. } => Some(rank),
            Annotation::Background => None,
        }
    }

    #[inline]
    pub fn sales(&self) -> Option<i64> {
        match *self {
            Annotation::Top5 { sales, .. } => Some(sales),
            Annotation::Background => None,
        }
    }

    #[inline]
    pub fn stores(&self) -> Option<i64> {
        match *self {
            Annotation::Top5 { stores, .. } => Some(stores),
            Annotation::Background => None,
        }
    }
}

/// A named administrative boundary (행정동) from the boundary collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Full administrative path, e.g. "서울특별시 강남구 삼성1동".
    pub full_admin_name: String,
    pub geometry: MultiPolygon<f64>,
    /// Remaining feature properties, kept for GeoJSON export.
    pub properties: Map<String, Value>,
    pub annotation: Annotation,
}

impl Region {
    pub fn new(full_admin_name: impl Into<String>, geometry: MultiPolygon<f64>) -> Self {
        Self {
            full_admin_name: full_admin_name.into(),
            geometry,
            properties: Map::new(),
            annotation: Annotation::Background,
        }
    }

    /// Join key: the last whitespace-delimited token of the admin name.
    /// Distinct paths sharing a trailing token collide.
    pub fn short_name(&self) -> &str {
        self.full_admin_name.split_whitespace().next_back().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_takes_trailing_token() {
        let region = Region::new("서울특별시 강남구 삼성1동", MultiPolygon(vec![]));
        assert_eq!(region.short_name(), "삼성1동");

        let region = Region::new("삼성1동", MultiPolygon(vec![]));
        assert_eq!(region.short_name(), "삼성1동");
    }

    #[test]
    fn short_name_of_blank_name_is_empty() {
        assert_eq!(Region::new("", MultiPolygon(vec![])).short_name(), "");
        assert_eq!(Region::new("   ", MultiPolygon(vec![])).short_name(), "");
    }

    #[test]
    fn background_has_no_values() {
        let annotation = Annotation::default();
        assert!(!annotation.is_top5());
        assert_eq!(annotation.rank(), None);
        assert_eq!(annotation.sales(), None);
        assert_eq!(annotation.stores(), None);
    }
}
