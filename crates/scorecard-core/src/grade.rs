use crate::style::Color;

/// Letter grade derived from a weighted score. Thresholds are inclusive
/// lower bounds and are not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    BPlus,
    B,
    CPlus,
    CMinus,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::A
        } else if score >= 80.0 {
            Grade::BPlus
        } else if score >= 70.0 {
            Grade::B
        } else if score >= 60.0 {
            Grade::CPlus
        } else if score >= 50.0 {
            Grade::CMinus
        } else if score >= 40.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::CMinus => "C-",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Grade::A => Color::Green,
            Grade::BPlus | Grade::B => Color::Cyan,
            Grade::CPlus | Grade::CMinus => Color::Yellow,
            Grade::D | Grade::F => Color::Red,
        }
    }
}
