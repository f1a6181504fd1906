use alluvial_core::RankKey;
use alluvial_core::geom::{Point, point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.include(x, y);
        }
        Some(b)
    }

    pub fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl LayoutPoint {
    pub fn to_point(self) -> Point {
        point(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// The vertical segment one `(column, value)` occupies on its column axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandLayout {
    pub column: usize,
    pub column_name: String,
    pub value: String,
    pub x: f64,
    /// Top edge; bands grow downwards, so `top <= 0`.
    pub top: f64,
    pub height: f64,
    pub count: u64,
    /// Position within the column, 0 = topmost.
    pub position: usize,
    pub is_first: bool,
    pub is_last: bool,
}

impl BandLayout {
    pub fn bottom(&self) -> f64 {
        self.top - self.height
    }

    pub fn center_y(&self) -> f64 {
        self.top - self.height / 2.0
    }
}

/// One aggregated group drawn as a ribbon across every column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowLayout {
    /// Draw order.
    pub index: usize,
    /// Index of the group in natural (lexicographic) order.
    pub group: usize,
    pub values: Vec<String>,
    pub count: u64,
    /// `count / total_count`.
    pub height: f64,
    /// Top edge of the ribbon at each column axis.
    pub anchors: Vec<LayoutPoint>,
    pub rank: RankKey,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelRole {
    /// Leftmost column; label sits left of the diagram.
    Leading,
    /// Rightmost column; label sits right of the diagram.
    Trailing,
    /// Topmost band of an interior column; label sits above the diagram.
    Top,
    /// Bottommost band of an interior column; label sits below the diagram.
    Bottom,
    Inline,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelLayout {
    pub column: usize,
    pub value: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub role: LabelRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlluvialLayout {
    pub bounds: Option<Bounds>,
    pub columns: Vec<String>,
    pub total_count: u64,
    pub margin: f64,
    pub bands: Vec<BandLayout>,
    pub flows: Vec<FlowLayout>,
}

impl AlluvialLayout {
    pub fn bands_in_column(&self, column: usize) -> impl Iterator<Item = &BandLayout> {
        self.bands.iter().filter(move |b| b.column == column)
    }

    pub fn band(&self, column: usize, value: &str) -> Option<&BandLayout> {
        self.bands
            .iter()
            .find(|b| b.column == column && b.value == value)
    }
}
