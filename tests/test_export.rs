use approx::assert_abs_diff_eq;
use sofips::base::DEFAULT_TEST_DIR;
use sofips::prelude::*;
use sofips::util::{format_direction_table, write_direction_table, write_spectrum_table, TsvOptions};
use std::fs;

// TEST GOAL
//
// These tests verify the files written for structural-analysis programs and the
// JSON files used to store the parameters and the curve

fn evaluate() -> SpectrumCurve {
    let mut params = SpectrumParameters::new();
    params
        .set_soil("S2")
        .unwrap()
        .set_usage_category("B")
        .unwrap()
        .set_reduction_composed(Direction::X, "rc-dual", "regular", "regular")
        .unwrap()
        .set_reduction_composed(Direction::Y, "rc-walls", "regular", "torsional")
        .unwrap();
    SpectrumEvaluator::new(CodeRuleTable::e030()).evaluate(&params).unwrap()
}

#[test]
fn test_spectrum_table_files() -> Result<(), StrError> {
    let curve = evaluate();
    let path = format!("{}/test_export_full.tsv", DEFAULT_TEST_DIR);
    let options = TsvOptions {
        precision: 4,
        header: true,
    };
    write_spectrum_table(&curve, &options, &path)?;
    let text = fs::read_to_string(&path).map_err(|_| "cannot read file")?;
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 602);
    assert_eq!(lines[0], "T(s)\tSa_Elastic(g)\tSa_X(g)\tSa_Y(g)");
    for line in &lines[1..] {
        let row: Vec<f64> = line.split('\t').map(|s| s.parse().unwrap()).collect();
        assert_eq!(row.len(), 4);
    }

    for direction in Direction::all() {
        let path = format!("{}/test_export_{}.txt", DEFAULT_TEST_DIR, direction);
        write_direction_table(&curve, direction, &path)?;
        let text = fs::read_to_string(&path).map_err(|_| "cannot read file")?;
        assert_eq!(text, format_direction_table(&curve, direction));
        assert_eq!(text.lines().count(), 601);
        let last: Vec<&str> = text.lines().last().unwrap().split('\t').collect();
        assert_eq!(last[0], "6.0000");
        assert_eq!(last[1].split('.').nth(1).unwrap().len(), 6);
    }
    Ok(())
}

#[test]
fn test_json_files() -> Result<(), StrError> {
    let mut params = SpectrumParameters::new();
    params
        .set_zone(2)
        .unwrap()
        .set_soil("S3")
        .unwrap()
        .set_usage_factor(1.25)
        .unwrap()
        .set_reduction_composed(Direction::Y, "masonry", "mass", "regular")
        .unwrap()
        .set_period_axis(3.0, 0.02)
        .unwrap();
    let path = format!("{}/test_export_parameters.json", DEFAULT_TEST_DIR);
    params.write_json(&path)?;
    let read = SpectrumParameters::read_json(&path)?;
    assert_eq!(read, params);

    let curve = SpectrumEvaluator::new(CodeRuleTable::e030()).evaluate(&read).unwrap();
    assert_eq!(curve.len(), 151);
    let path = format!("{}/test_export_curve.json", DEFAULT_TEST_DIR);
    curve.write_json(&path)?;
    let read = SpectrumCurve::read_json(&path)?;
    assert_eq!(read.summary(), curve.summary());
    assert_eq!(read.len(), curve.len());
    assert_abs_diff_eq!(read.summary().y.r, 2.7, epsilon = 1e-15);
    Ok(())
}

#[test]
fn test_partial_json_takes_defaults() -> Result<(), StrError> {
    let path = format!("{}/test_export_partial.json", DEFAULT_TEST_DIR);
    fs::create_dir_all(DEFAULT_TEST_DIR).map_err(|_| "cannot create directory")?;
    fs::write(&path, r#"{ "zone": 3, "soil": "S0" }"#).map_err(|_| "cannot write file")?;
    let params = SpectrumParameters::read_json(&path)?;
    assert_eq!(params.zone, 3);
    assert_eq!(params.soil, "S0");
    assert_eq!(params.usage, Usage::Category("C".to_string()));
    assert_eq!(params.axis, PeriodAxis::new());
    Ok(())
}
