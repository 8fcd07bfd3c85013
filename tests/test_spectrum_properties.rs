use proptest::prelude::*;
use sofips::prelude::*;

// TEST GOAL
//
// These tests verify properties of the spectral shape and of the design spectra that
// must hold for any breakpoints, reduction coefficients, and sampling of the period axis

const SOILS: [&str; 4] = ["S0", "S1", "S2", "S3"];

fn jump(t: f64, tp: f64, tl: f64) -> f64 {
    let eps = 1e-9 * t;
    f64::abs(amplification_factor(t - eps, tp, tl) - amplification_factor(t + eps, tp, tl))
}

proptest! {
    #[test]
    fn amplification_factor_is_continuous(tp in 0.05f64..2.0, gap in 0.1f64..5.0) {
        let tl = tp + gap;
        prop_assert!(jump(0.2 * tp, tp, tl) < 1e-6);
        prop_assert!(jump(tp, tp, tl) < 1e-6);
        prop_assert!(jump(tl, tp, tl) < 1e-6);
        prop_assert_eq!(amplification_factor(tp, tp, tl), 2.5);
    }

    #[test]
    fn amplification_factor_is_bounded(t in 0.0f64..10.0, tp in 0.05f64..2.0, gap in 0.1f64..5.0) {
        let tl = tp + gap;
        let c = amplification_factor(t, tp, tl);
        prop_assert!(c > 0.0 && c <= 2.5);
        if t <= tp {
            prop_assert!(c >= 1.0);
        }
    }

    #[test]
    fn amplification_factor_decreases_after_tp(
        tp in 0.05f64..2.0,
        gap in 0.1f64..5.0,
        a in 0.001f64..10.0,
        b in 0.001f64..10.0,
    ) {
        let tl = tp + gap;
        let t1 = tp + f64::min(a, b);
        let t2 = tp + f64::max(a, b) + 1e-3;
        prop_assert!(amplification_factor(t2, tp, tl) < amplification_factor(t1, tp, tl));
    }

    #[test]
    fn period_axis_covers_the_range(t_max in 0.0f64..10.0, dt in 0.001f64..0.5) {
        let mut axis = PeriodAxis::new();
        axis.set_range(t_max, dt).unwrap();
        let periods = axis.periods().unwrap();
        prop_assert_eq!(periods.len(), axis.npoint().unwrap());
        prop_assert_eq!(periods[0], 0.0);
        let last = periods[periods.len() - 1];
        prop_assert!(last <= t_max + 1e-8);
        prop_assert!(t_max - last < dt + 1e-12);
    }

    #[test]
    fn design_is_elastic_over_reduction(
        zone in 1u32..=4,
        soil in 0usize..4,
        rx in 1.0f64..12.0,
        ry in 1.0f64..12.0,
    ) {
        let mut params = SpectrumParameters::new();
        params
            .set_zone(zone).unwrap()
            .set_soil(SOILS[soil]).unwrap()
            .set_reduction(Direction::X, rx).unwrap()
            .set_reduction(Direction::Y, ry).unwrap()
            .set_period_axis(4.0, 0.05).unwrap();
        let curve = SpectrumEvaluator::new(CodeRuleTable::e030()).evaluate(&params).unwrap();
        prop_assert_eq!(curve.len(), 81);
        for p in curve.samples() {
            prop_assert!(f64::abs(p.design_x - p.elastic / rx) <= 1e-15);
            prop_assert!(f64::abs(p.design_y - p.elastic / ry) <= 1e-15);
        }
    }
}
