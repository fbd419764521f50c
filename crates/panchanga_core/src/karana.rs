//! Karana (half-tithi) classification.
//!
//! A karana is half a tithi: one 6-degree step of the Moon-Sun
//! elongation, sixty per synodic month. Four fixed karanas occupy set
//! slots around the new moon (slot 0 and slots 57-59); the seven movable
//! karanas repeat in a cycle through the other 56 slots.

use serde::{Deserialize, Serialize};

/// Span of one karana: 360/60 = 6 degrees of elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The 11 distinct karana names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    // Movable, repeating in cycle through slots 1-56.
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    // Fixed, one slot each per month.
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// The seven movable karanas in cycle order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    /// Sanskrit name of the karana.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Whether this karana keeps a fixed slot in the month.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

/// Karana occupying a given monthly slot (0..59).
///
/// Slot 0 (first half of Shukla Pratipada) is Kimstughna; slots 57-59
/// (around Amavasya) are Shakuni, Chatushpada, Naga. The movable seven
/// cycle through slots 1-56 starting from Bava.
pub const fn karana_for_slot(slot: u8) -> Karana {
    match slot {
        0 => Karana::Kimstughna,
        57 => Karana::Shakuni,
        58 => Karana::Chatushpada,
        59 => Karana::Naga,
        s => MOVABLE_KARANAS[((s - 1) % 7) as usize],
    }
}

/// Result of a karana lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KaranaInfo {
    /// The karana.
    pub karana: Karana,
    /// 0-based slot within the synodic month (0..59).
    pub karana_index: u8,
}

/// Determine the karana from the Moon-Sun elongation.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let elong = elongation_deg.rem_euclid(360.0);
    let idx = ((elong / KARANA_SEGMENT_DEG).floor() as u8).min(59);
    KaranaInfo {
        karana: karana_for_slot(idx),
        karana_index: idx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_slots() {
        assert_eq!(karana_for_slot(0), Karana::Kimstughna);
        assert_eq!(karana_for_slot(57), Karana::Shakuni);
        assert_eq!(karana_for_slot(58), Karana::Chatushpada);
        assert_eq!(karana_for_slot(59), Karana::Naga);
    }

    #[test]
    fn movable_cycle() {
        assert_eq!(karana_for_slot(1), Karana::Bava);
        assert_eq!(karana_for_slot(7), Karana::Vishti);
        assert_eq!(karana_for_slot(8), Karana::Bava);
        // Last movable slot before the fixed tail.
        assert_eq!(karana_for_slot(56), Karana::Vishti);
    }

    #[test]
    fn vishti_every_seventh() {
        for slot in (7..=56).step_by(7) {
            assert_eq!(karana_for_slot(slot as u8), Karana::Vishti, "slot {slot}");
        }
    }

    #[test]
    fn from_elongation() {
        assert_eq!(karana_from_elongation(0.0).karana, Karana::Kimstughna);
        assert_eq!(karana_from_elongation(5.99).karana_index, 0);
        assert_eq!(karana_from_elongation(6.0).karana, Karana::Bava);
        assert_eq!(karana_from_elongation(359.0).karana, Karana::Naga);
    }

    #[test]
    fn fixed_flags() {
        assert!(Karana::Kimstughna.is_fixed());
        assert!(Karana::Naga.is_fixed());
        assert!(!Karana::Bava.is_fixed());
        assert!(!Karana::Vishti.is_fixed());
    }

    #[test]
    fn half_tithi_relationship() {
        // Two karana slots per tithi.
        for elong in [0.0, 36.0, 123.0, 270.0, 354.0] {
            let k = karana_from_elongation(elong);
            let tithi_idx = (elong / 12.0).floor() as u8;
            assert_eq!(k.karana_index / 2, tithi_idx, "elong {elong}");
        }
    }
}
