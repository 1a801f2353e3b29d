//! Reference Julian Dates from Meeus, *Astronomical Algorithms*, ch. 7.

use bodygraph_time::{UtcTime, calendar_to_jd, jd_to_calendar};

#[test]
fn sputnik_launch() {
    let jd = calendar_to_jd(1957, 10, 4.81);
    assert!((jd - 2_436_116.31).abs() < 1e-6, "got {jd}");
}

#[test]
fn gregorian_examples() {
    assert_eq!(calendar_to_jd(1987, 1, 27.0), 2_446_822.5);
    assert_eq!(calendar_to_jd(1988, 6, 19.5), 2_447_332.0);
    assert_eq!(calendar_to_jd(1600, 1, 1.0), 2_305_447.5);
}

#[test]
fn julian_calendar_example() {
    let jd = calendar_to_jd(837, 4, 10.3);
    assert!((jd - 2_026_871.8).abs() < 1e-6, "got {jd}");
}

#[test]
fn inverse_of_meeus_example_7c() {
    let (y, m, d) = jd_to_calendar(2_436_116.31);
    assert_eq!((y, m), (1957, 10));
    assert!((d - 4.81).abs() < 1e-6, "got {d}");
}

#[test]
fn reference_birth_instants() {
    let einstein = UtcTime::new(1879, 3, 14, 10, 30, 0.0).to_jd_ut();
    assert!((einstein - 2_407_422.937_5).abs() < 1e-6, "got {einstein}");

    let sao_paulo = UtcTime::new(1973, 6, 2, 6, 55, 0.0).to_jd_ut();
    assert!((sao_paulo - 2_441_835.788_194).abs() < 1e-5, "got {sao_paulo}");
}
