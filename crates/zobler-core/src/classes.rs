//! Modified Zobler classification tables.
//!
//! Soil units are FAO/UNESCO Soil Map of the World codes; each label keeps the
//! FAO symbol prefix (e.g. `"AF FERRIC ACRISOL"`). Continent codes follow the
//! contizob.half first column. Both tables are indexed directly by code.

/// Label for every soil code 0–107, indexed by code.
pub const SOIL_TYPES: [&str; 108] = [
    "WATER",                        // 0
    "AF FERRIC ACRISOL",            // 1
    "AG GLEYIC ACRISOL",            // 2
    "AH HUMIC ACRISOL",             // 3
    "AO ORTHIC ACRISOL",            // 4
    "AP PLINTHIC ACRISOL",          // 5
    "BC CHROMIC CAMBISOL",          // 6
    "BD DYSTRIC CAMBISOL",          // 7
    "BE EUTRIC CAMBISOL",           // 8
    "BF FERRALIC CAMBISOL",         // 9
    "BG GLEYIC CAMBISOL",           // 10
    "BH HUMIC CAMBISOL",            // 11
    "BK CALCIC CAMBISOL",           // 12
    "BV VERTIC CAMBISOL",           // 13
    "BX GELIC CAMBISOL",            // 14
    "CG GLOSSIC CHERNOZEM",         // 15
    "CH HAPLIC CHERNOZEM",          // 16
    "CK CALCIC CHERNOZEM",          // 17
    "CL LUVIC CHERNOZEM",           // 18
    "DD DYSTRIC PODZOLUVISOL",      // 19
    "DE EUTRIC PODZOLUVISOL",       // 20
    "DG GLEYIC PODZOLUVISOL",       // 21
    "E RENDZINA",                   // 22
    "FA ACRIC FERRALSOL",           // 23
    "FH HUMIC FERRALSOL",           // 24
    "FO ORTHIC FERRALSOL",          // 25
    "FP PLINTHIC FERRALSOL",        // 26
    "FR RHODIC FERRALSOL",          // 27
    "FX XANTHIC FERRALSOL",         // 28
    "GC CALCARIC GLEYSOL",          // 29
    "GD DYSTRIC GLEYSOL",           // 30
    "GE EUTRIC GLEYSOL",            // 31
    "GH HUMIC GLEYSOL",             // 32
    "GM MOLLIC GLEYSOL",            // 33
    "GP PLINTHIC GLEYSOL",          // 34
    "GX GELIC GLEYSOL",             // 35
    "HC CALCARIC PHAEOZEM",         // 36
    "HG GLEYIC PHAEOZEM",           // 37
    "HH HAPLIC PHAEOZEM",           // 38
    "HL LUVIC PHAEOZEM",            // 39
    "I LITHOSOL",                   // 40
    "JC CALCARIC FLUVISOL",         // 41
    "JD DYSTRIC FLUVISOL",          // 42
    "JE EUTRIC FLUVISOL",           // 43
    "JT THIONIC FLUVISOL",          // 44
    "KH HAPLIC KASTANOZEM",         // 45
    "KK CALCIC KASTANOZEM",         // 46
    "KL LUVIC KASTANOZEM",          // 47
    "LA ALBIC LUVISOL",             // 48
    "LC CHROMIC LUVISOL",           // 49
    "LF FERRIC LUVISOL",            // 50
    "LG GLEYIC LUVISOL",            // 51
    "LK CALCIC LUVISOL",            // 52
    "LO ORTHIC LUVISOL",            // 53
    "LP PLINTHIC LUVISOL",          // 54
    "LV VERTIC LUVISOL",            // 55
    "MG GLEYIC GREYZEM",            // 56
    "MO ORTHIC GREYZEM",            // 57
    "ND DYSTRIC NITOSOL",           // 58
    "NE EUTRIC NITOSOL",            // 59
    "NH HUMIC NITOSOL",             // 60
    "OD DYSTRIC HISTOSOL",          // 61
    "OE EUTRIC HISTOSOL",           // 62
    "OX GELIC HISTOSOL",            // 63
    "PF FERRIC PODZOL",             // 64
    "PG GLEYIC PODZOL",             // 65
    "PH HUMIC PODZOL",              // 66
    "PL LEPTIC PODZOL",             // 67
    "PO ORTHIC PODZOL",             // 68
    "PP PLACIC PODZOL",             // 69
    "QA ALBIC ARENOSOL",            // 70
    "QC CAMBIC ARENOSOL",           // 71
    "QF FERRALIC ARENOSOL",         // 72
    "QL LUVIC ARENOSOL",            // 73
    "RC CALCARIC REGOSOL",          // 74
    "RD DYSTRIC REGOSOL",           // 75
    "RE EUTRIC REGOSOL",            // 76
    "RX GELIC REGOSOL",             // 77
    "SG GLEYIC SOLONETZ",           // 78
    "SM MOLLIC SOLONETZ",           // 79
    "SO ORTHIC SOLONETZ",           // 80
    "TH HUMIC ANDOSOL",             // 81
    "TM MOLLIC ANDOSOL",            // 82
    "TO OCHRIC ANDOSOL",            // 83
    "TV VITRIC ANDOSOL",            // 84
    "U RANKER",                     // 85
    "VC CHROMIC VERTISOL",          // 86
    "VP PELLIC VERTISOL",           // 87
    "WD DYSTRIC PLANOSOL",          // 88
    "WE EUTRIC PLANOSOL",           // 89
    "WH HUMIC PLANOSOL",            // 90
    "WM MOLLIC PLANOSOL",           // 91
    "WS SOLODIC PLANOSOL",          // 92
    "WX GELIC PLANOSOL",            // 93
    "XH HAPLIC XEROSOL",            // 94
    "XK CALCIC XEROSOL",            // 95
    "XL LUVIC XEROSOL",             // 96
    "XY GYPSIC XEROSOL",            // 97
    "YH HAPLIC YERMOSOL",           // 98
    "YK CALCIC YERMOSOL",           // 99
    "YL LUVIC YERMOSOL",            // 100
    "YT TAKYRIC YERMOSOL",          // 101
    "YY GYPSIC YERMOSOL",           // 102
    "ZG GLEYIC SOLONCHAK",          // 103
    "ZM MOLLIC SOLONCHAK",          // 104
    "ZO ORTHIC SOLONCHAK",          // 105
    "ZT TAKYRIC SOLONCHAK",         // 106
    "ICE GLACIER/ICE",              // 107
];

/// Label for every continent code 0–10, indexed by code.
/// Code 1 is reserved in the source data and keeps its documented label.
pub const CONTINENTS: [&str; 11] = [
    "OCEAN",       // 0
    "not used",    // 1
    "NAMERICA",    // 2
    "MEXICEAM",    // 3
    "SAMERICA",    // 4
    "EUROPE",      // 5
    "AFRICA",      // 6
    "SCASIA",      // 7
    "NCASIA",      // 8
    "SEASIA",      // 9
    "AUSTRALI",    // 10
];

/// Soil label for `code`, `None` outside 0–107.
pub fn soil_label(code: i32) -> Option<&'static str> {
    lookup(&SOIL_TYPES, code)
}

/// Continent label for `code`, `None` outside 0–10.
pub fn continent_label(code: i32) -> Option<&'static str> {
    lookup(&CONTINENTS, code)
}

#[inline]
fn lookup(table: &[&'static str], code: i32) -> Option<&'static str> {
    usize::try_from(code).ok().and_then(|i| table.get(i)).copied()
}

/// Both labels for one cell. `None` is the unknown sentinel and is exported
/// as an empty CSV field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    pub continent: Option<&'static str>,
    pub soil: Option<&'static str>,
}

impl Annotation {
    pub fn of(continent_code: i32, soil_code: i32) -> Self {
        Self {
            continent: continent_label(continent_code),
            soil: soil_label(soil_code),
        }
    }
}
