//! Category-specific analysis text shown under the recommendation cards.

/// A headed list of bullet points. Bullets are trusted HTML.
struct Section {
    heading: &'static str,
    bullets: &'static [&'static str],
}

/// Analysis narrative for a category. Categories without hand-written
/// analysis get [`Narrative::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narrative {
    KoreanRestaurant,
    CoffeeBeverage,
    Bakery,
    Generic,
}

impl Narrative {
    /// Exact match on the category label; total over all strings.
    pub fn for_category(category: &str) -> Self {
        match category {
            "한식음식점" => Narrative::KoreanRestaurant,
            "커피-음료" => Narrative::CoffeeBeverage,
            "제과점" => Narrative::Bakery,
            _ => Narrative::Generic,
        }
    }

    fn sections(self) -> &'static [Section] {
        match self {
            Narrative::KoreanRestaurant => KOREAN_RESTAURANT,
            Narrative::CoffeeBeverage => COFFEE_BEVERAGE,
            Narrative::Bakery => BAKERY,
            Narrative::Generic => GENERIC,
        }
    }

    /// Render as an HTML fragment.
    pub fn to_html(self) -> String {
        let mut out = String::from(r#"<div class="narrative">"#);
        for section in self.sections() {
            if !section.heading.is_empty() {
                out.push_str(&format!("<h4>{}</h4>", section.heading));
            }
            out.push_str("<ul>");
            for bullet in section.bullets {
                out.push_str(&format!("<li>{bullet}</li>"));
            }
            out.push_str("</ul>");
        }
        out.push_str("</div>");
        out
    }
}

const KOREAN_RESTAURANT: &[Section] = &[
    Section {
        heading: "🥇 삼성1동을 추천하는 이유",
        bullets: &[
            "<strong>압도적인 매출 규모:</strong> 삼성1동의 점포당 실제 매출은 약 1억 7,567만 원으로, 서울시 평균(약 7,651만 원)의 <strong>2.25배</strong>에 달하는 압도적인 1위 상권입니다.",
            "<strong>추천 포인트:</strong> 코엑스와 테헤란로를 중심으로 한 거대 오피스 상권으로, 직장인들의 평일 점심 수요와 저녁 회식 수요가 끊이지 않는 탄탄한 배후 수요를 자랑합니다. 271개라는 많은 점포가 있음에도 불구하고 점포당 매출이 1위라는 것은, 그만큼 상권 전체에서 소비되는 '한식 파이' 자체가 거대하다는 것을 의미합니다.",
        ],
    },
    Section {
        heading: "💡 TOP 5 입지 데이터 인사이트",
        bullets: &[
            "<strong>강남권 오피스/학원가의 강세:</strong> 삼성1동, 대치4동, 수서동 등 강남권 상권이 TOP 3를 휩쓸었습니다. 창업 시 초기 임대료 등 고정비 부담이 클 수 있으나, <strong>서울 평균 대비 2배에 가까운 높은 매출 잠재력을 보유하고 있어 장기적인 ROI(투자 대비 수익률) 측면에서 매우 유리</strong>한 입지입니다.",
            "<strong>수서동의 숨은 잠재력:</strong> 수서동의 경우 점포 수가 67개로 비교적 적음에도 불구하고 점포당 매출이 1억 5천만 원을 훌쩍 넘습니다. 경쟁 점포 수가 적어 신규 진입 시 안정적인 시장 점유율을 확보할 수 있는 '알짜 상권'으로 분석됩니다.",
        ],
    },
];

const COFFEE_BEVERAGE: &[Section] = &[
    Section {
        heading: "🥇 소공동을 추천하는 이유",
        bullets: &[
            "<strong>초격차의 매출 퍼포먼스:</strong> 소공동의 점포당 실제 매출은 약 1억 6,056만 원으로, 서울시 카페 평균(약 3,796만 원)의 무려 <strong>4.13배</strong>를 기록하고 있습니다.",
            "<strong>추천 포인트:</strong> 서울의 핵심 중심업무지구(CBD)로, 대기업 본사와 관공서가 밀집해 있어 아침 출근 시간과 점심시간의 테이크아웃 커피 회전율이 극도로 높습니다. 테이크아웃 위주의 소형 평수 매장으로 창업할 경우, 평당 매출 효율을 극대화할 수 있는 최적의 입지입니다.",
        ],
    },
    Section {
        heading: "💡 TOP 5 입지 데이터 인사이트",
        bullets: &[
            "<strong>'점포 수'와 '매출'의 반비례가 만드는 기회:</strong> 2위 잠실2동(28개), 3위 수서동(19개)은 점포 수가 매우 적은 데 반해 서울시 평균의 3.4~4배에 달하는 경이로운 매출을 보입니다. 이는 해당 지역에 대형 복합시설(역사, 쇼핑몰 등) 내부 입점 매장이 많거나, 진입 장벽이 높아 소수 매장이 수요를 독식하고 있음을 시사합니다. 상가 매물이 나온다면 권리금을 감수하더라도 최우선으로 선점해야 할 '하이리턴' 상권입니다.",
            "<strong>수서동의 크로스오버:</strong> 수서동은 한식음식점에 이어 커피-음료 업종에서도 TOP 3에 올랐습니다. SRT 역사 및 주변 오피스 개발로 인한 유동 인구 증가가 F&amp;B 전반의 매출을 강하게 견인하고 있으므로, 식음료 창업을 고려하는 분들이라면 가장 눈여겨봐야 할 행정동입니다.",
        ],
    },
];

const BAKERY: &[Section] = &[
    Section {
        heading: "🥇 구로5동을 추천하는 이유",
        bullets: &[
            "<strong>안정적인 고수익 창출:</strong> 구로5동의 예상 점포당 매출은 약 1억 7,518만 원으로, 서울시 제과점 평균(약 4,804만 원)을 훌쩍 뛰어넘는 <strong>3.64배</strong>의 압도적인 성과를 보여줍니다.",
            "<strong>추천 포인트:</strong> 구로5동은 직장인 유동 인구가 많은 상업/업무지구와 대규모 주거단지가 혼합된 복합 상권입니다. 출퇴근길 식사 대용 빵 소비와 주말 가족 단위의 디저트 수요를 동시에 흡수할 수 있어, 주중과 주말의 매출 편차가 적고 안정적인 고수익을 기대할 수 있는 최적의 입지입니다.",
        ],
    },
    Section {
        heading: "💡 TOP 5 입지 데이터 인사이트",
        bullets: &[
            "<strong>소수 정예가 이끄는 '과점형' 하이리턴 상권:</strong> 제과점 TOP 5 지역의 가장 큰 특징은 <strong>점포 수가 7~16개로 매우 적다는 점</strong>입니다. 반면 매출은 서울 평균의 3.4배 이상을 기록하고 있습니다. 이는 제과점 업종 특성상 초기 설비(오븐, 제빵 공간 등) 투자비용이 커 진입 장벽이 높지만, 일단 상권 내에 자리 잡으면 경쟁 심화 없이 해당 지역의 수요를 독식할 수 있다는 것을 의미합니다.",
            "<strong>확실한 배후 수요를 낀 상권의 강세:</strong> 건대입구역이라는 거대 대학/유흥 상권을 낀 2위 화양동, 탄탄한 학원가와 구매력 높은 주거지를 갖춘 3위 대치1동, 전형적인 대단지 아파트 밀집 지역인 4위 창4동 등 타겟 고객층이 명확한 곳이 상위권을 차지했습니다. 제과점 창업 시에는 유동 인구의 단순 수치보다는 '빵을 소비할 확실한 목적을 가진 배후 세대(학생, 가족, 1인 가구 등)'가 얼마나 탄탄한지 파악하는 것이 핵심입니다.",
        ],
    },
];

const GENERIC: &[Section] = &[
    Section {
        heading: "",
        bullets: &[
            "상위 5개 행정동은 모두 유동인구와 소비지수가 높은 지역으로 나타났습니다.",
            "특히 1위 지역은 서울 평균 대비 매출이 높게 분석되었습니다.",
            "이는 상권 집중도와 접근성이 영향을 준 것으로 판단됩니다.",
            "창업 시 초기 고정비를 고려하되, 매출 잠재력이 높아 ROI 측면에서 유리합니다.",
        ],
    },
];
