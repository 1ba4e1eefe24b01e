mod common;

use common::{calc, rejects};
use serde_json::{json, Value};

fn bpp(findings: [&str; 5]) -> Value {
    json!({
        "fetal_breathing": findings[0],
        "fetal_movement": findings[1],
        "fetal_tone": findings[2],
        "amniotic_fluid": findings[3],
        "nonstress_test": findings[4],
    })
}

#[test]
fn fetal_bpp_all_normal() {
    let r = calc("fetal_bpp", bpp(["normal"; 5]));
    assert_eq!(r.result.as_i64(), Some(10));
    assert_eq!(r.unit, "points");
    assert_eq!(r.stage, "Normal");
    assert_eq!(r.extra("oligohydramnios").unwrap(), false);
}

#[test]
fn fetal_bpp_eight_depends_on_fluid() {
    let r = calc("fetal_bpp", bpp(["abnormal", "normal", "normal", "normal", "normal"]));
    assert_eq!(r.result.as_i64(), Some(8));
    assert_eq!(r.stage, "Normal");

    let r = calc("fetal_bpp", bpp(["normal", "normal", "normal", "abnormal", "normal"]));
    assert_eq!(r.result.as_i64(), Some(8));
    assert_eq!(r.stage, "Abnormal");
    assert_eq!(r.stage_description, "Oligohydramnios with otherwise normal profile");
    assert_eq!(r.extra("oligohydramnios").unwrap(), true);
}

#[test]
fn fetal_bpp_six_and_below() {
    let r = calc("fetal_bpp", bpp(["abnormal", "abnormal", "normal", "normal", "normal"]));
    assert_eq!(r.stage, "Equivocal");

    let r = calc("fetal_bpp", bpp(["abnormal", "abnormal", "normal", "abnormal", "normal"]));
    assert_eq!(r.result.as_i64(), Some(4));
    assert_eq!(r.stage_description, "Abnormal biophysical profile");

    let r = calc("fetal_bpp", bpp(["abnormal"; 5]));
    assert_eq!(r.result.as_i64(), Some(0));
    assert_eq!(r.stage_description, "Severely abnormal biophysical profile");
}

#[test]
fn fetal_bpp_rejects_unknown_finding() {
    rejects("fetal_bpp", bpp(["normal", "normal", "normal", "reduced", "normal"]));
}
