//! Golden luck-cycle schedules over a three-year solar-term table.

use std::path::Path;

use ganzhi_base::{BaseError, Gender, LuckDirection, SolarTerm, TenGodRelation};
use ganzhi_core::{SolarTermProvider, TableSolarTerms};
use ganzhi_search::{
    SearchError, chart_report_for, direction, four_pillars_for, generate, luck_schedule,
    starting_offset,
};
use ganzhi_time::CivilTime;

const TERMS_PATH: &str = "tests/data/solar_terms_1996_1998.json";

fn provider() -> TableSolarTerms {
    TableSolarTerms::load(Path::new(TERMS_PATH)).unwrap()
}

fn t(s: &str) -> CivilTime {
    s.parse().unwrap()
}

fn names(cycles: &[ganzhi_base::LuckCycle]) -> Vec<String> {
    cycles.iter().map(|c| c.pillar.to_string()).collect()
}

#[test]
fn reference_birth_pillars() {
    let chart = four_pillars_for(&provider(), &t("1997-01-21 16:30:00")).unwrap();
    assert_eq!(chart.to_string(), "丙子 辛丑 癸亥 庚申");
}

#[test]
fn male_yang_year_steps_forward() {
    let p = provider();
    let birth = t("1997-01-21 16:30");
    assert_eq!(
        direction(&p, &birth, Gender::Male).unwrap(),
        LuckDirection::Forward
    );

    let start = starting_offset(&p, &birth, Gender::Male).unwrap();
    assert_eq!(start.reference_term, SolarTerm::LiChun);
    assert_eq!(start.minutes, 19_352);
    assert_eq!(start.age, 4.48);
    assert_eq!(start.start_date, t("2001-07-13 16:30"));

    let cycles = generate(&p, &birth, Gender::Male, 8).unwrap();
    assert_eq!(
        names(&cycles),
        vec!["癸亥", "甲子", "乙丑", "丙寅", "丁卯", "戊辰", "己巳", "庚午"]
    );
    let ages: Vec<f64> = cycles.iter().map(|c| c.start_age).collect();
    assert_eq!(
        ages,
        vec![4.48, 14.48, 24.48, 34.48, 44.48, 54.48, 64.48, 74.48]
    );
    assert_eq!(cycles[7].start_date, t("2071-07-13 16:30"));
    assert_eq!(cycles[0].ten_gods.stem, TenGodRelation::DayMaster);
    assert_eq!(cycles[3].ten_gods.stem.symbol(), "正财");
    assert_eq!(cycles[3].ten_gods.branch.symbol(), "伤官");
}

#[test]
fn female_yang_year_steps_backward() {
    let p = provider();
    let birth = t("1997-01-21 16:30");
    let schedule = luck_schedule(&p, &birth, Gender::Female, 4).unwrap();
    assert_eq!(schedule.direction, LuckDirection::Reverse);
    assert_eq!(schedule.start.reference_term, SolarTerm::XiaoHan);
    assert_eq!(schedule.start.minutes, 23_046);
    assert_eq!(schedule.start.age, 5.33);
    assert_eq!(schedule.start.start_date, t("2002-05-19 16:30"));
    assert_eq!(names(&schedule.cycles), vec!["癸亥", "壬戌", "辛酉", "庚申"]);
    assert_eq!(schedule.cycles[3].start_age, 35.33);
}

#[test]
fn window_crosses_into_next_year() {
    let p = provider();
    let birth = t("1997-12-31 12:00");
    let chart = four_pillars_for(&p, &birth).unwrap();
    assert_eq!(chart.to_string(), "丁丑 壬子 丁未 丙午");

    // 丁 is yin: female steps forward to 1998 小寒.
    let fwd = starting_offset(&p, &birth, Gender::Female).unwrap();
    assert_eq!(fwd.direction, LuckDirection::Forward);
    assert_eq!(fwd.reference_term, SolarTerm::XiaoHan);
    assert_eq!(fwd.reference_time.year(), 1998);
    assert_eq!(fwd.minutes, 7_818);
    assert_eq!(fwd.age, 1.81);
    assert_eq!(fwd.start_date, t("1999-10-21 12:00"));

    let rev = starting_offset(&p, &birth, Gender::Male).unwrap();
    assert_eq!(rev.reference_term, SolarTerm::DaXue);
    assert_eq!(rev.minutes, 34_615);
    assert_eq!(rev.age, 8.01);
    assert_eq!(rev.start_date, t("2006-01-03 12:00"));

    let cycles = generate(&p, &birth, Gender::Male, 3).unwrap();
    assert_eq!(names(&cycles), vec!["丁未", "丙午", "乙巳"]);
}

#[test]
fn qi_terms_never_anchor_the_start() {
    // 大寒 1997-01-20 lies between birth and 小寒 but is not a Jie term.
    let start = starting_offset(&provider(), &t("1997-01-21 16:30"), Gender::Female).unwrap();
    assert_ne!(start.reference_term, SolarTerm::DaHan);
}

#[test]
fn missing_neighbour_year_has_no_reference_term() {
    let only_1997 = TableSolarTerms::from_sets([provider().solar_terms(1997).unwrap()]);
    let err = starting_offset(&only_1997, &t("1997-12-31 12:00"), Gender::Female).unwrap_err();
    assert!(matches!(
        err,
        SearchError::Base(BaseError::NoReferenceTerm(_))
    ));
}

#[test]
fn report_and_schedule_serialize() {
    let p = provider();
    let birth = t("1997-01-21 16:30");

    let report = chart_report_for(&p, &birth).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["pillars"][2], "癸亥");
    assert_eq!(json["wuxing"]["水"], 3);
    assert_eq!(json["wuxing_full"]["水"], 7);
    assert_eq!(json["combinations"]["dominant"], "水三会");
    assert_eq!(json["ten_gods"]["year"][0][1], "正财");
    assert_eq!(json["ten_god_frequency"]["正印"], 2);

    let schedule = luck_schedule(&p, &birth, Gender::Male, 2).unwrap();
    let json = serde_json::to_value(&schedule).unwrap();
    assert_eq!(json["direction"], "forward");
    assert_eq!(json["gender"], "male");
    assert_eq!(json["start"]["reference_term"], "立春");
    assert_eq!(json["cycles"][1]["pillar"]["stem"], "甲");
    assert_eq!(json["cycles"][1]["start_date"], "2011-07-13 16:30:00");
}
