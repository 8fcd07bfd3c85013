/// Defines the branches of the amplification factor C(T)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShapeBranch {
    /// Linear ascending branch: `T < 0.2 TP`
    Ascending,

    /// Constant acceleration plateau: `0.2 TP ≤ T ≤ TP`
    Plateau,

    /// Constant velocity branch: `TP < T < TL`
    Velocity,

    /// Constant displacement branch: `T ≥ TL`
    Displacement,
}

/// Returns the branch of C(T) containing the period T
///
/// The boundary policy is:
///
/// * strict `<` at `0.2 TP` (the breakpoint itself belongs to the plateau)
/// * inclusive `≤` at `TP` (the breakpoint itself belongs to the plateau)
/// * strict `<` at `TL` (the breakpoint itself belongs to the displacement branch)
///
/// C(T) is continuous at all three breakpoints, thus this policy only matters for
/// bit-exact comparisons.
pub fn shape_branch(t: f64, tp: f64, tl: f64) -> ShapeBranch {
    if t < 0.2 * tp {
        ShapeBranch::Ascending
    } else if t <= tp {
        ShapeBranch::Plateau
    } else if t < tl {
        ShapeBranch::Velocity
    } else {
        ShapeBranch::Displacement
    }
}

/// Calculates the seismic amplification factor C(T)
///
/// ```text
///        ⎧ 1 + 7.5 T/TP       if  T < 0.2 TP
///        ⎪ 2.5                if  0.2 TP ≤ T ≤ TP
/// C(T) = ⎨ 2.5 TP/T           if  TP < T < TL
///        ⎪      TP TL
///        ⎩ 2.5 ——————         if  T ≥ TL
///               T²
/// ```
///
/// # Input
///
/// * `t` -- period T ≥ 0 (s)
/// * `tp` -- period TP > 0 at the end of the plateau (s)
/// * `tl` -- period TL > TP at the beginning of the displacement branch (s)
pub fn amplification_factor(t: f64, tp: f64, tl: f64) -> f64 {
    match shape_branch(t, tp, tl) {
        ShapeBranch::Ascending => 1.0 + 7.5 * (t / tp),
        ShapeBranch::Plateau => 2.5,
        ShapeBranch::Velocity => 2.5 * (tp / t),
        ShapeBranch::Displacement => 2.5 * (tp * tl) / (t * t),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
