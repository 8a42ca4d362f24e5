//! The six "For Good" causes a user can direct their karma toward.

use serde::Deserialize;
use serde::Serialize;

/// A supported cause, identified by its two-letter code.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, strum::EnumIs, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum CauseId {
    EC, // Environmental Conservation
    HH, // Human Health
    HC, // Humanitarian Crisis
    HW, // Human Welfare
    MH, // Mental Health
    AW, // Animal Welfare
}

impl CauseId {
    /// Full display name, e.g. "Environmental Conservation".
    pub fn name(&self) -> &'static str {
        match self {
            Self::EC => "Environmental Conservation",
            Self::HH => "Human Health",
            Self::HC => "Humanitarian Crisis",
            Self::HW => "Human Welfare",
            Self::MH => "Mental Health",
            Self::AW => "Animal Welfare",
        }
    }

    /// Short name that fits a badge or tab.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::EC => "Environment",
            Self::HH => "Health",
            Self::HC => "Humanitarian",
            Self::HW => "Welfare",
            Self::MH => "Mental Health",
            Self::AW => "Animals",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::EC => "Protecting our planet through conservation efforts, reforestation, and sustainable practices.",
            Self::HH => "Supporting medical research, healthcare access, and disease prevention worldwide.",
            Self::HC => "Providing emergency relief and support to communities affected by disasters and conflicts.",
            Self::HW => "Improving quality of life through education, housing, and community development.",
            Self::MH => "Promoting mental wellness, therapy access, and reducing stigma around mental health.",
            Self::AW => "Protecting animals through rescue, rehabilitation, and habitat preservation.",
        }
    }

    /// Emoji used wherever the cause needs an icon.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::EC => "🌍",
            Self::HH => "❤️",
            Self::HC => "🤝",
            Self::HW => "🏠",
            Self::MH => "🧠",
            Self::AW => "🐾",
        }
    }

    /// Accent color as a CSS hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Self::EC => "#22C55E",
            Self::HH => "#EF4444",
            Self::HC => "#3B82F6",
            Self::HW => "#8B5CF6",
            Self::MH => "#06B6D4",
            Self::AW => "#F97316",
        }
    }

    /// One-line statement of what a contribution does.
    pub fn impact(&self) -> &'static str {
        match self {
            Self::EC => "Every Supernova plants 1 tree",
            Self::HH => "Fund medical research & care",
            Self::HC => "Deliver emergency supplies",
            Self::HW => "Build homes & schools",
            Self::MH => "Fund therapy & support",
            Self::AW => "Rescue & care for animals",
        }
    }

    /// Lifetime amount raised for the cause, in whole dollars.
    pub fn total_raised(&self) -> u64 {
        match self {
            Self::EC => 2_450_000,
            Self::HH => 3_200_000,
            Self::HC => 1_890_000,
            Self::HW => 2_100_000,
            Self::MH => 1_560_000,
            Self::AW => 1_780_000,
        }
    }

    /// Count of users currently supporting the cause.
    pub fn active_users(&self) -> u64 {
        match self {
            Self::EC => 45_000,
            Self::HH => 52_000,
            Self::HC => 38_000,
            Self::HW => 41_000,
            Self::MH => 67_000,
            Self::AW => 49_000,
        }
    }
}

/// Formats a dollar amount compactly for stat lines: "$2.5M", "$845K",
/// or "$120" below a thousand.
pub fn format_money(amount: u64) -> String {
    if amount >= 1_000_000 {
        format!("${:.1}M", amount as f64 / 1_000_000.0)
    } else if amount >= 1_000 {
        format!("${}K", amount / 1_000)
    } else {
        format!("${amount}")
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(CauseId::from_str("EC").unwrap(), CauseId::EC);
        assert_eq!(CauseId::from_str("aw").unwrap(), CauseId::AW);
        assert!(CauseId::from_str("XX").is_err());
    }

    #[test]
    fn six_causes_with_distinct_colors() {
        let colors: std::collections::HashSet<_> = CauseId::iter().map(|c| c.color()).collect();
        assert_eq!(CauseId::iter().count(), 6);
        assert_eq!(colors.len(), 6);
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(2_450_000), "$2.5M");
        assert_eq!(format_money(845_000), "$845K");
        assert_eq!(format_money(999), "$999");
    }
}
