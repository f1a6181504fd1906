use crate::ribbon::{DEFAULT_SAMPLES, DEFAULT_SMOOTHING, MAX_SAMPLES, RibbonStyle};
use crate::{Error, Result};
use alluvial_core::{AlluvialConfig, ColorSpec, OrderScope, Palette, PreferredOrder};
use serde_json::{Value, json};

pub const DEFAULT_MARGIN: f64 = 0.05;
pub const DEFAULT_LABEL_PAD: f64 = 0.02;

/// Everything one draw call needs besides the records and the surface.
#[derive(Debug, Clone)]
pub struct DrawOptions {
    /// Ordered column names; at least two.
    pub columns: Vec<String>,
    /// Vertical gap between neighbouring bands of a column.
    pub margin: f64,
    pub preferred_order: PreferredOrder,
    pub order_scope: OrderScope,
    pub color: ColorSpec,
    pub smoothing: f64,
    pub samples: usize,
    pub show_labels: bool,
    pub show_counts: bool,
    pub label_pad: f64,
}

impl DrawOptions {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            margin: DEFAULT_MARGIN,
            preferred_order: PreferredOrder::default(),
            order_scope: OrderScope::default(),
            color: ColorSpec::default(),
            smoothing: DEFAULT_SMOOTHING,
            samples: DEFAULT_SAMPLES,
            show_labels: true,
            show_counts: false,
            label_pad: DEFAULT_LABEL_PAD,
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_preferred_order(mut self, preferred_order: PreferredOrder) -> Self {
        self.preferred_order = preferred_order;
        self
    }

    pub fn with_order_scope(mut self, order_scope: OrderScope) -> Self {
        self.order_scope = order_scope;
        self
    }

    pub fn with_color(mut self, color: ColorSpec) -> Self {
        self.color = color;
        self
    }

    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    pub fn with_counts(mut self, show_counts: bool) -> Self {
        self.show_counts = show_counts;
        self
    }

    pub fn with_label_pad(mut self, label_pad: f64) -> Self {
        self.label_pad = label_pad;
        self
    }

    /// Sample count is clamped to [`MAX_SAMPLES`].
    pub fn ribbon_style(&self) -> RibbonStyle {
        RibbonStyle {
            smoothing: self.smoothing,
            samples: self.samples.min(MAX_SAMPLES),
        }
    }

    pub fn from_config<I, S>(columns: I, config: &AlluvialConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::new(columns);
        options.apply_config(config)?;
        Ok(options)
    }

    /// Every option as config keys, so it can serve as the base a user config is merged over.
    ///
    /// `ColorSpec::ByFunction` has no JSON form and is left out, as is the default color.
    pub fn to_config(&self) -> AlluvialConfig {
        let mut config = AlluvialConfig::empty_object();
        config.set_value("layout.margin", json!(self.margin));
        config.set_value("layout.orderScope", json!(self.order_scope.as_str()));
        let preferred: Vec<[&str; 2]> = self
            .preferred_order
            .entries()
            .iter()
            .map(|(c, v)| [c.as_str(), v.as_str()])
            .collect();
        config.set_value("layout.preferredOrder", json!(preferred));
        config.set_value("ribbon.smoothing", json!(self.smoothing));
        config.set_value("ribbon.samples", json!(self.samples));
        config.set_value("labels.show", json!(self.show_labels));
        config.set_value("labels.showCounts", json!(self.show_counts));
        config.set_value("labels.pad", json!(self.label_pad));

        match &self.color {
            ColorSpec::Constant(c) => config.set_value("color.constant", json!(c)),
            ColorSpec::ByPalette { column, palette } => {
                let palette = match palette {
                    Palette::Named(name) => json!(name),
                    Palette::Colors(colors) => json!(colors),
                };
                config.set_value("color.palette", palette);
                if let Some(column) = column {
                    config.set_value("color.colorBy", json!(column));
                }
            }
            ColorSpec::Default | ColorSpec::ByFunction(_) => {}
        }
        config
    }

    /// Overrides fields present in `config`; absent keys keep their current values.
    ///
    /// Recognized keys: `layout.margin`, `layout.orderScope`, `layout.preferredOrder`,
    /// `ribbon.smoothing`, `ribbon.samples`, `labels.show`, `labels.showCounts`, `labels.pad`,
    /// `color.constant`, `color.palette`, `color.colorBy`.
    pub fn apply_config(&mut self, config: &AlluvialConfig) -> Result<()> {
        if let Some(v) = config.get_f64("layout.margin") {
            self.margin = v;
        }
        if let Some(raw) = config.get_str("layout.orderScope") {
            self.order_scope = OrderScope::parse(raw).ok_or_else(|| Error::InvalidConfig {
                path: "layout.orderScope".to_string(),
                message: format!("expected \"column\" or \"global\", got {raw:?}"),
            })?;
        }
        if let Some(v) = config.get_value("layout.preferredOrder") {
            self.preferred_order = parse_preferred_order(v);
        }
        if let Some(v) = config.get_f64("ribbon.smoothing") {
            self.smoothing = v;
        }
        if let Some(v) = config.get_usize("ribbon.samples") {
            if v > MAX_SAMPLES {
                return Err(Error::InvalidConfig {
                    path: "ribbon.samples".to_string(),
                    message: format!("at most {MAX_SAMPLES} samples per curve, got {v}"),
                });
            }
            self.samples = v;
        }
        if let Some(v) = config.get_bool("labels.show") {
            self.show_labels = v;
        }
        if let Some(v) = config.get_bool("labels.showCounts") {
            self.show_counts = v;
        }
        if let Some(v) = config.get_f64("labels.pad") {
            self.label_pad = v;
        }

        if let Some(c) = config.get_str("color.constant") {
            self.color = ColorSpec::constant(c);
        } else {
            let palette = match config.get_value("color.palette") {
                None => None,
                Some(Value::String(name)) => Some(Palette::Named(name.clone())),
                Some(Value::Array(_)) => config.get_str_list("color.palette").map(Palette::Colors),
                Some(other) => {
                    return Err(Error::InvalidConfig {
                        path: "color.palette".to_string(),
                        message: format!("expected a palette name or color list, got {other}"),
                    });
                }
            };
            let column = config.get_str("color.colorBy").map(str::to_string);
            if palette.is_some() || column.is_some() {
                self.color = ColorSpec::ByPalette {
                    column,
                    palette: palette.unwrap_or_default(),
                };
            }
        }
        Ok(())
    }
}

/// Accepts `[["column", "value"], ...]` or `[{"column": .., "value": ..}, ...]`; malformed
/// entries are skipped.
fn parse_preferred_order(value: &Value) -> PreferredOrder {
    let Some(items) = value.as_array() else {
        tracing::warn!("layout.preferredOrder is not an array; ignoring it");
        return PreferredOrder::default();
    };

    let mut order = PreferredOrder::new();
    for item in items {
        let pair = match item {
            Value::Array(pair) => match pair.as_slice() {
                [Value::String(c), Value::String(v)] => Some((c, v)),
                _ => None,
            },
            Value::Object(map) => match (map.get("column"), map.get("value")) {
                (Some(Value::String(c)), Some(Value::String(v))) => Some((c, v)),
                _ => None,
            },
            _ => None,
        };
        match pair {
            Some((c, v)) => order.push(c.as_str(), v.as_str()),
            None => tracing::debug!(entry = %item, "skipping malformed preferred-order entry"),
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preferred_order_accepts_pairs_and_objects() {
        let order = parse_preferred_order(&json!([
            ["a", "x"],
            {"column": "b", "value": "y"},
            ["broken"],
            42
        ]));
        assert_eq!(
            order.entries(),
            &[
                ("a".to_string(), "x".to_string()),
                ("b".to_string(), "y".to_string())
            ]
        );
    }
}
