//! Icelandic postal codes and the localities they belong to.
//!
//! A code maps to its display form "code Locality"; codes not in the table
//! resolve to nothing rather than an error, matching how address forms treat
//! an unknown or foreign code.

/// Postal code table, ordered by code.
const POSTAL_CODES: &[(&str, &str)] = &[
    ("101", "Reykjavík"),
    ("103", "Reykjavík"),
    ("104", "Reykjavík"),
    ("105", "Reykjavík"),
    ("107", "Reykjavík"),
    ("108", "Reykjavík"),
    ("109", "Reykjavík"),
    ("110", "Reykjavík"),
    ("111", "Reykjavík"),
    ("112", "Reykjavík"),
    ("113", "Reykjavík"),
    ("116", "Reykjavík"),
    ("170", "Seltjarnarnes"),
    ("190", "Vogar"),
    ("200", "Kópavogur"),
    ("201", "Kópavogur"),
    ("203", "Kópavogur"),
    ("210", "Garðabær"),
    ("220", "Hafnarfjörður"),
    ("221", "Hafnarfjörður"),
    ("225", "Álftanes"),
    ("230", "Reykjanesbær"),
    ("240", "Grindavík"),
    ("245", "Sandgerði"),
    ("250", "Garður"),
    ("260", "Reykjanesbær"),
    ("270", "Mosfellsbær"),
    ("300", "Akranes"),
    ("310", "Borgarnes"),
    ("340", "Stykkishólmur"),
    ("350", "Grundarfjörður"),
    ("355", "Ólafsvík"),
    ("360", "Hellissandur"),
    ("370", "Búðardalur"),
    ("400", "Ísafjörður"),
    ("415", "Bolungarvík"),
    ("450", "Patreksfjörður"),
    ("460", "Tálknafjörður"),
    ("465", "Bíldudalur"),
    ("470", "Þingeyri"),
    ("510", "Hólmavík"),
    ("530", "Hvammstangi"),
    ("540", "Blönduós"),
    ("545", "Skagaströnd"),
    ("550", "Sauðárkrókur"),
    ("560", "Varmahlíð"),
    ("565", "Hofsós"),
    ("580", "Siglufjörður"),
    ("600", "Akureyri"),
    ("603", "Akureyri"),
    ("610", "Grenivík"),
    ("620", "Dalvík"),
    ("625", "Ólafsfjörður"),
    ("640", "Húsavík"),
    ("650", "Laugar"),
    ("660", "Mývatn"),
    ("670", "Kópasker"),
    ("675", "Raufarhöfn"),
    ("680", "Þórshöfn"),
    ("690", "Vopnafjörður"),
    ("700", "Egilsstaðir"),
    ("710", "Seyðisfjörður"),
    ("730", "Reyðarfjörður"),
    ("735", "Eskifjörður"),
    ("740", "Neskaupstaður"),
    ("750", "Fáskrúðsfjörður"),
    ("755", "Stöðvarfjörður"),
    ("760", "Breiðdalsvík"),
    ("765", "Djúpivogur"),
    ("780", "Höfn"),
    ("800", "Selfoss"),
    ("810", "Hveragerði"),
    ("815", "Þorlákshöfn"),
    ("820", "Eyrarbakki"),
    ("825", "Stokkseyri"),
    ("840", "Laugarvatn"),
    ("845", "Flúðir"),
    ("850", "Hella"),
    ("860", "Hvolsvöllur"),
    ("870", "Vík"),
    ("880", "Kirkjubæjarklaustur"),
    ("900", "Vestmannaeyjar"),
];

/// Locality name for a postal code, `None` when the code is unknown.
pub fn locality_for(code: &str) -> Option<&'static str> {
    POSTAL_CODES
        .binary_search_by_key(&code, |(c, _)| c)
        .ok()
        .map(|index| POSTAL_CODES[index].1)
}
