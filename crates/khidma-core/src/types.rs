// SPDX-License-Identifier: MIT
//
// Core domain types for the Khidma services portal.

use serde::{Deserialize, Serialize};

/// Accent color assigned to a category (and to testimonial avatars).
///
/// The original site built Tailwind class names by string concatenation
/// (`bg-{color}-600` and friends); here every accent is an explicit variant
/// with fixed style lookups, so no dynamic identifier ever gets constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accent {
    Sky,
    Emerald,
    Amber,
    Teal,
    Indigo,
    Rose,
    Lime,
    Blue,
}

/// Palette used for testimonial avatars, in the original site's order.
const AVATAR_PALETTE: [Accent; 7] = [
    Accent::Sky,
    Accent::Emerald,
    Accent::Amber,
    Accent::Teal,
    Accent::Indigo,
    Accent::Rose,
    Accent::Lime,
];

impl Accent {
    /// Strong tone — buttons, headings, active nav entries.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Sky => "#0284c7",
            Self::Emerald => "#059669",
            Self::Amber => "#d97706",
            Self::Teal => "#0d9488",
            Self::Indigo => "#4f46e5",
            Self::Rose => "#e11d48",
            Self::Lime => "#65a30d",
            Self::Blue => "#2563eb",
        }
    }

    /// Light tone — card backgrounds, avatar circles.
    pub fn soft(&self) -> &'static str {
        match self {
            Self::Sky => "#e0f2fe",
            Self::Emerald => "#d1fae5",
            Self::Amber => "#fef3c7",
            Self::Teal => "#ccfbf1",
            Self::Indigo => "#e0e7ff",
            Self::Rose => "#ffe4e6",
            Self::Lime => "#ecfccb",
            Self::Blue => "#dbeafe",
        }
    }

    /// Dark tone — text placed on the light tone.
    pub fn contrast(&self) -> &'static str {
        match self {
            Self::Sky => "#075985",
            Self::Emerald => "#065f46",
            Self::Amber => "#92400e",
            Self::Teal => "#115e59",
            Self::Indigo => "#3730a3",
            Self::Rose => "#9f1239",
            Self::Lime => "#3f6212",
            Self::Blue => "#1e40af",
        }
    }

    /// Pick a stable avatar accent for a display name.
    ///
    /// Uses the original site's char-code hash (`hash * 31 + code` over the
    /// name) so the same person always gets the same color.
    pub fn for_name(name: &str) -> Self {
        let mut hash: i32 = 0;
        for ch in name.chars() {
            hash = hash
                .wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(ch as i32);
        }
        AVATAR_PALETTE[(hash.unsigned_abs() as usize) % AVATAR_PALETTE.len()]
    }
}

/// A single service offered by the office.
///
/// Belongs to exactly one category; services are never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Display name, e.g. "تجديد جواز السفر".
    pub name: String,
    /// One-sentence description shown on the card and searched against.
    pub description: String,
    /// Accent inherited by the service card.
    pub accent: Accent,
}

/// A titled group of services; one page section per category.
///
/// Identity is `id` (also the section anchor); immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    /// Stable section identifier, e.g. "passports".
    pub id: String,
    /// Section heading.
    pub title: String,
    /// Services in display order.
    pub services: Vec<Service>,
}

/// A customer testimonial shown in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub city: String,
    /// Star rating, 1–5.
    pub rating: u8,
    pub review: String,
}

impl Testimonial {
    /// Avatar initials — first letters of the first two words of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }

    /// Avatar accent derived from the name.
    pub fn accent(&self) -> Accent {
        Accent::for_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        let t = Testimonial {
            name: "فهد المطيري".into(),
            city: "الرياض".into(),
            rating: 5,
            review: String::new(),
        };
        assert_eq!(t.initials(), "فا");
    }

    #[test]
    fn initials_of_single_word_name() {
        let t = Testimonial {
            name: "سيد".into(),
            city: "جدة".into(),
            rating: 4,
            review: String::new(),
        };
        assert_eq!(t.initials(), "س");
    }

    #[test]
    fn accent_for_name_is_stable() {
        assert_eq!(Accent::for_name("نورة القحطاني"), Accent::for_name("نورة القحطاني"));
    }

    #[test]
    fn accent_for_empty_name_does_not_panic() {
        let _ = Accent::for_name("");
    }

    #[test]
    fn every_accent_has_all_three_tones() {
        for accent in [
            Accent::Sky,
            Accent::Emerald,
            Accent::Amber,
            Accent::Teal,
            Accent::Indigo,
            Accent::Rose,
            Accent::Lime,
            Accent::Blue,
        ] {
            assert!(accent.color().starts_with('#'));
            assert!(accent.soft().starts_with('#'));
            assert!(accent.contrast().starts_with('#'));
        }
    }
}
