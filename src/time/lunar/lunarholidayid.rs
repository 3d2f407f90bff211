use std::fmt;

use serde::{
    Serialize,
    Deserialize
};

/// Holidays anchored to a fixed day of the Islamic calendar.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum LunarHolidayId {
    IslamicNewYear,
    Ashura,
    MawlidAnNabi,
    IsraAndMiraj,
    RamadanBeginning,
    EidAlFitr,
    ArafahDay,
    EidAlAdha
}

impl LunarHolidayId {
    pub const ALL: [LunarHolidayId; 8] = [
        LunarHolidayId::IslamicNewYear,
        LunarHolidayId::Ashura,
        LunarHolidayId::MawlidAnNabi,
        LunarHolidayId::IsraAndMiraj,
        LunarHolidayId::RamadanBeginning,
        LunarHolidayId::EidAlFitr,
        LunarHolidayId::ArafahDay,
        LunarHolidayId::EidAlAdha
    ];

    /// Hijri (month, day) of the holiday.
    pub const fn hijri_month_day(&self) -> (u32, u32) {
        match self {
            LunarHolidayId::IslamicNewYear   => (1, 1),
            LunarHolidayId::Ashura           => (1, 10),
            LunarHolidayId::MawlidAnNabi     => (3, 12),
            LunarHolidayId::IsraAndMiraj     => (7, 27),
            LunarHolidayId::RamadanBeginning => (9, 1),
            LunarHolidayId::EidAlFitr        => (10, 1),
            LunarHolidayId::ArafahDay        => (12, 9),
            LunarHolidayId::EidAlAdha        => (12, 10)
        }
    }
}

impl fmt::Display for LunarHolidayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LunarHolidayId::IslamicNewYear   => "Islamic New Year",
            LunarHolidayId::Ashura           => "Ashura",
            LunarHolidayId::MawlidAnNabi     => "Mawlid an-Nabi",
            LunarHolidayId::IsraAndMiraj     => "Isra and Mi'raj",
            LunarHolidayId::RamadanBeginning => "Beginning of Ramadan",
            LunarHolidayId::EidAlFitr        => "Eid al-Fitr",
            LunarHolidayId::ArafahDay        => "Day of Arafah",
            LunarHolidayId::EidAlAdha        => "Eid al-Adha"
        };
        write!(f, "{}", name)
    }
}
