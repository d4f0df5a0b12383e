//! チャート描画領域（外枠とマージン）

/// SVG viewBox の幅。実際の表示幅はCSSで伸縮させる
pub const CHART_WIDTH: f64 = 800.0;
pub const CHART_HEIGHT: f64 = 300.0;

/// y軸目盛りの数
pub const Y_TICK_COUNT: usize = 5;
/// グリッド線の数
pub const GRID_TICK_COUNT: usize = 10;
/// y軸上限に足す余白の割合
pub const Y_HEADROOM: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl ChartFrame {
    pub fn new(margin: Margin) -> Self {
        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            margin,
        }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// 描画グループの平行移動
    pub fn inner_transform(&self) -> String {
        format!("translate({},{})", self.margin.left, self.margin.top)
    }
}

/// 軸の目盛り1つ（位置は描画領域内の座標）
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}
