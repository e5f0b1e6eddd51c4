//! # Name tables of the Panchang elements
//!
//! Fixed lookup tables for the five calendar elements and their attributes:
//! the 27 Nakshatras (with ruling planet and presiding deity), the 27 Yogas
//! (with their traditional meaning), the 7 movable and 4 fixed Karanas, the
//! 12 Rashis (with classical element and ruling planet), the 15 Tithi names
//! per fortnight, the 12 lunar months, and the 7 weekdays.
//!
//! Everything here is constant data; the index arithmetic that selects into
//! these tables lives in [`crate::elements`].

use serde::Serialize;

// -------------------------------------------------------------------------------------------------
// Nakshatra
// -------------------------------------------------------------------------------------------------

/// The 27 lunar mansions from Ashwini to Revati, 13°20' each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in zodiacal order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Ruling planet (Vimshottari lord) of the nakshatra.
    ///
    /// The nine lords repeat in the fixed Ketu → Venus → Sun → Moon → Mars →
    /// Rahu → Jupiter → Saturn → Mercury sequence.
    pub const fn lord(self) -> &'static str {
        const LORD_CYCLE: [&str; 9] = [
            "Ketu", "Venus", "Sun", "Moon", "Mars", "Rahu", "Jupiter", "Saturn", "Mercury",
        ];
        LORD_CYCLE[self as usize % 9]
    }

    /// Presiding deity of the nakshatra.
    pub const fn deity(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini Kumaras",
            Self::Bharani => "Yama",
            Self::Krittika => "Agni",
            Self::Rohini => "Prajapati",
            Self::Mrigashira => "Soma",
            Self::Ardra => "Rudra",
            Self::Punarvasu => "Aditi",
            Self::Pushya => "Brihaspati",
            Self::Ashlesha => "Nagas",
            Self::Magha => "Pitris",
            Self::PurvaPhalguni => "Bhaga",
            Self::UttaraPhalguni => "Aryaman",
            Self::Hasta => "Savitar",
            Self::Chitra => "Vishvakarma",
            Self::Swati => "Vayu",
            Self::Vishakha => "Indra-Agni",
            Self::Anuradha => "Mitra",
            Self::Jyeshtha => "Indra",
            Self::Mula => "Nirriti",
            Self::PurvaAshadha => "Apas",
            Self::UttaraAshadha => "Vishvadevas",
            Self::Shravana => "Vishnu",
            Self::Dhanishtha => "Vasus",
            Self::Shatabhisha => "Varuna",
            Self::PurvaBhadrapada => "Aja Ekapada",
            Self::UttaraBhadrapada => "Ahir Budhnya",
            Self::Revati => "Pushan",
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Yoga
// -------------------------------------------------------------------------------------------------

/// The 27 yogas of the summed Sun+Moon longitude, 13°20' each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order (0 = Vishkambha, 26 = Vaidhriti).
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    /// Sanskrit name of the yoga.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// Traditional meaning associated with the yoga.
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Vishkambha => "Supported",
            Self::Priti => "Fondness",
            Self::Ayushman => "Long-lived",
            Self::Saubhagya => "Good fortune",
            Self::Shobhana => "Splendour",
            Self::Atiganda => "Danger",
            Self::Sukarma => "Virtuous",
            Self::Dhriti => "Determination",
            Self::Shula => "Pain",
            Self::Ganda => "Obstacle",
            Self::Vriddhi => "Growth",
            Self::Dhruva => "Constant",
            Self::Vyaghata => "Beating",
            Self::Harshana => "Joyful",
            Self::Vajra => "Diamond",
            Self::Siddhi => "Success",
            Self::Vyatipata => "Calamity",
            Self::Variyan => "Comfort",
            Self::Parigha => "Obstruction",
            Self::Shiva => "Auspicious",
            Self::Siddha => "Accomplished",
            Self::Sadhya => "Amenable",
            Self::Shubha => "Bright",
            Self::Shukla => "White",
            Self::Brahma => "Creative",
            Self::Indra => "Chief",
            Self::Vaidhriti => "Poor support",
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Karana
// -------------------------------------------------------------------------------------------------

/// The eleven karana names: seven movable, four fixed.
///
/// The movable seven cycle through half-tithi positions 2..57 of the lunar
/// month; the fixed four occupy the absolute positions 58, 59, 60 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// The seven movable karanas in their repeating order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
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
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Whether this is one of the four fixed karanas.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

/// Karana at a 1-based half-tithi position of the lunar month (1..=60).
///
/// Position 1 is Kimstughna, positions 58/59/60 are Shakuni, Chatushpada and
/// Naga; every other position cycles through the seven movable karanas
/// starting with Bava at position 2.
pub const fn karana_at_position(position: u8) -> Karana {
    match position {
        1 => Karana::Kimstughna,
        58 => Karana::Shakuni,
        59 => Karana::Chatushpada,
        60 => Karana::Naga,
        p => MOVABLE_KARANAS[(p as usize - 2) % 7],
    }
}

// -------------------------------------------------------------------------------------------------
// Rashi
// -------------------------------------------------------------------------------------------------

/// Classical element of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

/// The 12 zodiacal signs, 30° each, occupied by the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in zodiacal order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Classical element of the rashi (fire/earth/air/water repeating).
    pub const fn element(self) -> RashiElement {
        const ELEMENT_CYCLE: [RashiElement; 4] = [
            RashiElement::Fire,
            RashiElement::Earth,
            RashiElement::Air,
            RashiElement::Water,
        ];
        ELEMENT_CYCLE[self as usize % 4]
    }

    /// Ruling planet of the rashi.
    pub const fn ruling_planet(self) -> &'static str {
        match self {
            Self::Mesha | Self::Vrischika => "Mars",
            Self::Vrishabha | Self::Tula => "Venus",
            Self::Mithuna | Self::Kanya => "Mercury",
            Self::Karka => "Moon",
            Self::Simha => "Sun",
            Self::Dhanu | Self::Meena => "Jupiter",
            Self::Makara | Self::Kumbha => "Saturn",
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Tithi names and Paksha
// -------------------------------------------------------------------------------------------------

/// Lunar fortnight: waxing (Shukla) or waning (Krishna).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 14 ordinal tithi names shared by both fortnights.
///
/// The 15th of each fortnight carries its own name: Purnima in the waxing
/// half, Amavasya in the waning half. See [`tithi_name`].
pub const TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// Name of a tithi by its absolute 1..=30 index in the lunar month.
///
/// Index 15 is Purnima (full moon), index 30 is Amavasya (new moon); every
/// other index maps to the shared ordinal names within its fortnight.
pub const fn tithi_name(index: u8) -> &'static str {
    match index {
        15 => "Purnima",
        30 => "Amavasya",
        i => TITHI_NAMES[((i - 1) % 15) as usize],
    }
}

// -------------------------------------------------------------------------------------------------
// Masa (lunar month)
// -------------------------------------------------------------------------------------------------

/// The 12 lunar months, Chaitra through Phalguna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashwina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

/// All 12 masas in calendar order (0 = Chaitra, 11 = Phalguna).
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashwina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    /// Sanskrit name of the masa.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashwina => "Ashwina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// Masa named for the rashi the Sun occupies (0 = Mesha → Chaitra).
    pub const fn from_sun_rashi_index(rashi_index: u8) -> Masa {
        ALL_MASAS[rashi_index as usize % 12]
    }
}

// -------------------------------------------------------------------------------------------------
// Vaar (weekday)
// -------------------------------------------------------------------------------------------------

/// The seven weekdays, Sunday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Vaar {
    Ravivar,
    Somvar,
    Mangalvar,
    Budhvar,
    Guruvar,
    Shukravar,
    Shanivar,
}

/// All 7 vaars in week order (0 = Ravivar/Sunday, 6 = Shanivar/Saturday).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivar,
    Vaar::Somvar,
    Vaar::Mangalvar,
    Vaar::Budhvar,
    Vaar::Guruvar,
    Vaar::Shukravar,
    Vaar::Shanivar,
];

impl Vaar {
    /// Weekday from its 0-based index (0 = Sunday).
    pub const fn from_index(index: u8) -> Vaar {
        ALL_VAARS[index as usize % 7]
    }

    /// 0-based week index of the weekday (Sunday = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sanskrit name of the weekday.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivar => "Ravivar",
            Self::Somvar => "Somvar",
            Self::Mangalvar => "Mangalvar",
            Self::Budhvar => "Budhvar",
            Self::Guruvar => "Guruvar",
            Self::Shukravar => "Shukravar",
            Self::Shanivar => "Shanivar",
        }
    }

    /// English name of the weekday.
    pub const fn english(self) -> &'static str {
        match self {
            Self::Ravivar => "Sunday",
            Self::Somvar => "Monday",
            Self::Mangalvar => "Tuesday",
            Self::Budhvar => "Wednesday",
            Self::Guruvar => "Thursday",
            Self::Shukravar => "Friday",
            Self::Shanivar => "Saturday",
        }
    }

    /// Ruling planet (day lord) of the weekday.
    pub const fn lord(self) -> &'static str {
        match self {
            Self::Ravivar => "Sun",
            Self::Somvar => "Moon",
            Self::Mangalvar => "Mars",
            Self::Budhvar => "Mercury",
            Self::Guruvar => "Jupiter",
            Self::Shukravar => "Venus",
            Self::Shanivar => "Saturn",
        }
    }
}
