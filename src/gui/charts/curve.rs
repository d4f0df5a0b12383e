//! 単調3次補間（x方向に単調）によるSVGパス生成

use std::fmt::Write;

fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// 内側の点の接線
fn slope3(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    let s0 = if h0 != 0.0 { (p1.1 - p0.1) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (p2.1 - p1.1) / h1 } else { 0.0 };
    if h0 + h1 == 0.0 {
        return 0.0;
    }
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let slope = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if slope.is_finite() {
        slope
    } else {
        0.0
    }
}

/// 端点の接線（隣の接線から求める）
fn slope2(p0: (f64, f64), p1: (f64, f64), t: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h != 0.0 {
        (3.0 * (p1.1 - p0.1) / h - t) / 2.0
    } else {
        t
    }
}

fn tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let mut t = vec![0.0; n];
    for i in 1..n - 1 {
        t[i] = slope3(points[i - 1], points[i], points[i + 1]);
    }
    t[0] = slope2(points[0], points[1], t[1]);
    t[n - 1] = slope2(points[n - 2], points[n - 1], t[n - 2]);
    t
}

/// `M` を含まない区間部分を書き出す
fn write_segments(out: &mut String, points: &[(f64, f64)]) {
    match points.len() {
        0 | 1 => {}
        2 => {
            let _ = write!(out, "L{:.2},{:.2}", points[1].0, points[1].1);
        }
        _ => {
            let t = tangents(points);
            for i in 0..points.len() - 1 {
                let (x0, y0) = points[i];
                let (x1, y1) = points[i + 1];
                let dx = (x1 - x0) / 3.0;
                let _ = write!(
                    out,
                    "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                    x0 + dx,
                    y0 + dx * t[i],
                    x1 - dx,
                    y1 - dx * t[i + 1],
                    x1,
                    y1
                );
            }
        }
    }
}

/// 点列を通る線のパス。空なら空文字列
pub fn monotone_line_path(points: &[(f64, f64)]) -> String {
    let Some(&(x, y)) = points.first() else {
        return String::new();
    };
    let mut out = format!("M{:.2},{:.2}", x, y);
    write_segments(&mut out, points);
    out
}

/// 上側の線と下側の線で囲む領域のパス（両者は同じ長さのx順の点列）
pub fn monotone_area_path(upper: &[(f64, f64)], lower: &[(f64, f64)]) -> String {
    if upper.is_empty() || lower.is_empty() {
        return String::new();
    }

    let mut out = monotone_line_path(upper);
    let reversed: Vec<(f64, f64)> = lower.iter().rev().copied().collect();
    let _ = write!(out, "L{:.2},{:.2}", reversed[0].0, reversed[0].1);
    write_segments(&mut out, &reversed);
    out.push('Z');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single_point() {
        assert_eq!(monotone_line_path(&[]), "");
        assert_eq!(monotone_line_path(&[(1.0, 2.0)]), "M1.00,2.00");
    }

    #[test]
    fn test_two_points_is_straight_line() {
        assert_eq!(
            monotone_line_path(&[(0.0, 0.0), (10.0, 5.0)]),
            "M0.00,0.00L10.00,5.00"
        );
    }

    #[test]
    fn test_collinear_points_stay_on_line() {
        let path = monotone_line_path(&[(0.0, 0.0), (3.0, 3.0), (6.0, 6.0)]);
        assert_eq!(
            path,
            "M0.00,0.00C1.00,1.00,2.00,2.00,3.00,3.00C4.00,4.00,5.00,5.00,6.00,6.00"
        );
    }

    #[test]
    fn test_local_extremum_has_flat_tangent() {
        // 山の頂点では接線が水平になり、行き過ぎない
        let points = [(0.0, 0.0), (3.0, 10.0), (6.0, 0.0)];
        let t = tangents(&points);
        assert_eq!(t[1], 0.0);
        let path = monotone_line_path(&points);
        assert!(path.contains("2.00,10.00,3.00,10.00"));
    }

    #[test]
    fn test_area_path_closes() {
        let upper = [(0.0, 0.0), (10.0, 5.0)];
        let lower = [(0.0, 20.0), (10.0, 20.0)];
        assert_eq!(
            monotone_area_path(&upper, &lower),
            "M0.00,0.00L10.00,5.00L10.00,20.00L0.00,20.00Z"
        );
    }
}
