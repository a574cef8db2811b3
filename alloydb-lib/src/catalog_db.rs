use crate::catalog::AlloyFamily;
use crate::element::Element::{self, *};

/// Embedded reference alloy table (GOST grades).
///
/// Each entry: (name, family, nominal composition in wt%)
pub(crate) const ALLOYS: &[(&str, AlloyFamily, &[(Element, f64)])] = &[
    // Brasses
    ("Латунь Л63", AlloyFamily::Brass, &[(Cu, 62.0), (Zn, 38.0)]),
    ("Латунь Л68", AlloyFamily::Brass, &[(Cu, 68.0), (Zn, 32.0)]),
    ("Латунь Л80", AlloyFamily::Brass, &[(Cu, 80.0), (Zn, 20.0)]),
    ("Латунь Л90", AlloyFamily::Brass, &[(Cu, 90.0), (Zn, 10.0)]),
    (
        "Латунь ЛС59-1",
        AlloyFamily::Brass,
        &[(Cu, 59.0), (Pb, 1.5), (Zn, 39.5)],
    ),
    (
        "Латунь ЛЖМц59-1-1",
        AlloyFamily::Brass,
        &[(Cu, 59.0), (Fe, 1.0), (Mn, 1.0), (Zn, 39.0)],
    ),
    // Bronzes
    (
        "Бронза БрОЦС5-5-5",
        AlloyFamily::Bronze,
        &[(Cu, 85.0), (Sn, 5.0), (Zn, 5.0), (Pb, 5.0)],
    ),
    ("Бронза БрОФ10-1", AlloyFamily::Bronze, &[(Cu, 89.0), (Sn, 10.0)]),
    ("Бронза БрА7", AlloyFamily::Bronze, &[(Cu, 93.0), (Al, 7.0)]),
    (
        "Бронза БрАЖ9-4",
        AlloyFamily::Bronze,
        &[(Cu, 87.0), (Al, 9.0), (Fe, 4.0)],
    ),
    (
        "Бронза БрКМц3-1",
        AlloyFamily::Bronze,
        &[(Cu, 96.0), (Si, 3.0), (Mn, 1.0)],
    ),
    // Copper-nickel
    ("Мельхиор МН19", AlloyFamily::CopperNickel, &[(Cu, 81.0), (Ni, 19.0)]),
    (
        "Нейзильбер МНЦ15-20",
        AlloyFamily::CopperNickel,
        &[(Cu, 65.0), (Ni, 15.0), (Zn, 20.0)],
    ),
    (
        "Куниаль МНА13-3",
        AlloyFamily::CopperNickel,
        &[(Cu, 84.0), (Ni, 13.0), (Al, 3.0)],
    ),
    // Copper
    ("Медь М1", AlloyFamily::Copper, &[(Cu, 99.9)]),
    // Aluminum
    (
        "Дюралюминий Д16",
        AlloyFamily::Aluminum,
        &[(Al, 93.0), (Cu, 4.4), (Mg, 1.5), (Mn, 0.6), (Fe, 0.5)],
    ),
    (
        "Дюралюминий Д1",
        AlloyFamily::Aluminum,
        &[(Al, 94.0), (Cu, 4.3), (Mg, 0.6), (Mn, 0.6), (Fe, 0.5)],
    ),
    ("Сплав АМг6", AlloyFamily::Aluminum, &[(Al, 93.2), (Mg, 6.2), (Mn, 0.6)]),
    ("Силумин АК12", AlloyFamily::Aluminum, &[(Al, 88.0), (Si, 12.0)]),
    // Titanium
    ("Титан ВТ1-0", AlloyFamily::Titanium, &[(Ti, 99.5), (Fe, 0.25)]),
    (
        "Титан ВТ6",
        AlloyFamily::Titanium,
        &[(Ti, 89.0), (Al, 6.0), (Fe, 0.3)],
    ),
    // Steels
    (
        "Сталь Ст3",
        AlloyFamily::Steel,
        &[(Fe, 98.5), (C, 0.2), (Mn, 0.5), (Si, 0.2)],
    ),
    (
        "Сталь 45",
        AlloyFamily::Steel,
        &[(Fe, 98.2), (C, 0.45), (Mn, 0.65), (Si, 0.27)],
    ),
    (
        "Сталь 40Х",
        AlloyFamily::Steel,
        &[(Fe, 97.4), (C, 0.4), (Cr, 0.95), (Mn, 0.65), (Si, 0.27)],
    ),
    (
        "Сталь У8",
        AlloyFamily::Steel,
        &[(Fe, 98.7), (C, 0.8), (Mn, 0.25), (Si, 0.25)],
    ),
    (
        "Сталь 12Х18Н10Т",
        AlloyFamily::StainlessSteel,
        &[(Fe, 68.0), (Cr, 18.0), (Ni, 10.0), (Mn, 2.0), (Ti, 0.6), (C, 0.12)],
    ),
    (
        "Сталь 95Х18",
        AlloyFamily::StainlessSteel,
        &[(Fe, 80.0), (Cr, 18.0), (C, 0.95), (Mn, 0.8)],
    ),
    // Precious
    (
        "Серебро Ср925",
        AlloyFamily::Precious,
        &[(Ag, 92.5), (Cu, 7.5)],
    ),
    (
        "Золото Зл585",
        AlloyFamily::Precious,
        &[(Au, 58.5), (Ag, 20.0), (Cu, 21.5)],
    ),
];
