//! The built-in festival catalog.
//!
//! Month constraints use purnimanta names, so Krishna-paksha entries
//! read the way North Indian almanacs list them (Maha Shivaratri in
//! Phalguna, Karva Chauth in Kartika).

use crate::rules::{FestivalRule, Observance, RuleKind};
use panchanga_core::{Masa, Tithi};

const fn lunar(
    id: &'static str,
    name: &'static str,
    tithi: Tithi,
    masa: Masa,
    description: &'static str,
) -> FestivalRule {
    FestivalRule {
        id,
        name,
        kind: RuleKind::Lunar {
            tithi,
            masa: Some(masa),
        },
        observance: Observance::FirstDay,
        description,
    }
}

/// All built-in rules, in rough seasonal order starting from the
/// winter sankranti.
pub const FESTIVALS: [FestivalRule; 24] = [
    FestivalRule {
        id: "makar_sankranti",
        name: "Makar Sankranti",
        kind: RuleKind::Solar {
            longitude_deg: 270.0,
        },
        observance: Observance::FirstDay,
        description: "The Sun enters sidereal Makara; harvest festival of the northward turn.",
    },
    lunar(
        "vasant_panchami",
        "Vasant Panchami",
        Tithi::ShuklaPanchami,
        Masa::Magha,
        "Worship of Saraswati at the onset of spring.",
    ),
    lunar(
        "maha_shivaratri",
        "Maha Shivaratri",
        Tithi::KrishnaChaturdashi,
        Masa::Phalguna,
        "Night vigil for Shiva on the waning fourteenth.",
    ),
    lunar(
        "holi",
        "Holi",
        Tithi::Purnima,
        Masa::Phalguna,
        "Festival of colors on the Phalguna full moon.",
    ),
    lunar(
        "ugadi",
        "Ugadi",
        Tithi::ShuklaPratipada,
        Masa::Chaitra,
        "Lunar new year; first day of Chaitra.",
    ),
    lunar(
        "rama_navami",
        "Rama Navami",
        Tithi::ShuklaNavami,
        Masa::Chaitra,
        "Birth of Rama on the bright ninth of Chaitra.",
    ),
    lunar(
        "hanuman_jayanti",
        "Hanuman Jayanti",
        Tithi::Purnima,
        Masa::Chaitra,
        "Birth of Hanuman on the Chaitra full moon.",
    ),
    lunar(
        "akshaya_tritiya",
        "Akshaya Tritiya",
        Tithi::ShuklaTritiya,
        Masa::Vaishakha,
        "Unwaning third; auspicious for beginnings.",
    ),
    lunar(
        "vat_savitri",
        "Vat Savitri",
        Tithi::Amavasya,
        Masa::Jyeshtha,
        "Vow of Savitri kept at the banyan on the Jyeshtha new moon.",
    ),
    lunar(
        "rath_yatra",
        "Rath Yatra",
        Tithi::ShuklaDvitiya,
        Masa::Ashadha,
        "Chariot procession of Jagannatha.",
    ),
    lunar(
        "guru_purnima",
        "Guru Purnima",
        Tithi::Purnima,
        Masa::Ashadha,
        "Honoring the guru on the Ashadha full moon.",
    ),
    lunar(
        "naga_panchami",
        "Naga Panchami",
        Tithi::ShuklaPanchami,
        Masa::Shravana,
        "Serpent worship on the bright fifth of Shravana.",
    ),
    lunar(
        "naga_panchami_krishna",
        "Naga Panchami (Krishna)",
        Tithi::KrishnaPanchami,
        Masa::Shravana,
        "Regional serpent worship on the waning fifth.",
    ),
    lunar(
        "raksha_bandhan",
        "Raksha Bandhan",
        Tithi::Purnima,
        Masa::Shravana,
        "The rakhi tie on the Shravana full moon.",
    ),
    lunar(
        "krishna_janmashtami",
        "Krishna Janmashtami",
        Tithi::KrishnaAshtami,
        Masa::Bhadrapada,
        "Birth of Krishna on the waning eighth.",
    ),
    lunar(
        "ganesh_chaturthi",
        "Ganesh Chaturthi",
        Tithi::ShuklaChaturthi,
        Masa::Bhadrapada,
        "Installation of Ganesha on the bright fourth.",
    ),
    lunar(
        "navaratri",
        "Navaratri",
        Tithi::ShuklaPratipada,
        Masa::Ashvina,
        "First of the nine nights of the goddess.",
    ),
    lunar(
        "durga_puja",
        "Durga Puja",
        Tithi::ShuklaShashthi,
        Masa::Ashvina,
        "Bodhana of Durga on the bright sixth.",
    ),
    lunar(
        "dussehra",
        "Dussehra",
        Tithi::ShuklaDashami,
        Masa::Ashvina,
        "Vijayadashami; victory of Rama over Ravana.",
    ),
    lunar(
        "kojagara_puja",
        "Kojagara Puja",
        Tithi::Purnima,
        Masa::Ashvina,
        "Night of Lakshmi on the sharad full moon.",
    ),
    lunar(
        "karva_chauth",
        "Karva Chauth",
        Tithi::KrishnaChaturthi,
        Masa::Kartika,
        "Fast from sunrise to moonrise on the waning fourth.",
    ),
    lunar(
        "govardhana_puja",
        "Govardhana Puja",
        Tithi::ShuklaPratipada,
        Masa::Kartika,
        "Annakuta offering on the day after Diwali.",
    ),
    lunar(
        "diwali",
        "Diwali",
        Tithi::Amavasya,
        Masa::Kartika,
        "Festival of lights on the Kartika new moon.",
    ),
    lunar(
        "chhath_puja",
        "Chhath Puja",
        Tithi::ShuklaShashthi,
        Masa::Kartika,
        "Offerings to Surya at the riverbank.",
    ),
];

/// Look up a built-in rule by its id.
pub fn rule_by_id(id: &str) -> Option<&'static FestivalRule> {
    FESTIVALS.iter().find(|r| r.id == id)
}
