//! JSON shapes written by the CLI.

use serde::Serialize;
use trigon::{Figure, TriangleResult};

/// Serialized `TriangleResult`, field for field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultJson {
    pub is_triangle: bool,
    pub triangle_type: String,
    pub angles: [f64; 3],
    pub area: f64,
    pub perimeter: f64,
}

impl From<&TriangleResult> for ResultJson {
    fn from(r: &TriangleResult) -> Self {
        Self {
            is_triangle: r.is_triangle,
            triangle_type: r.triangle_type.clone(),
            angles: r.angles,
            area: r.area,
            perimeter: r.perimeter,
        }
    }
}

/// Output of `trigon analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub result: ResultJson,
}

/// One evaluated CSV row: inputs, outcome, and when it was computed.
///
/// Exactly one of `result` / `error` is present.
#[derive(Debug, Serialize)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub side1: Option<f64>,
    pub side2: Option<f64>,
    pub side3: Option<f64>,
    #[serde(flatten)]
    pub result: Option<ResultJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct EdgeLabel {
    pub at: [f64; 2],
    pub text: String,
}

/// Output of `trigon figure`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FigureJson {
    Invalid {
        invalid: bool,
    },
    Triangle {
        vertices: [[f64; 2]; 3],
        scale: f64,
        labels: Vec<EdgeLabel>,
    },
}

impl From<&Figure> for FigureJson {
    fn from(fig: &Figure) -> Self {
        match fig {
            Figure::Invalid => FigureJson::Invalid { invalid: true },
            Figure::Triangle(p) => {
                let vertices = p.vertices.map(|v| [v.x, v.y]);
                let labels = p
                    .edge_midpoints()
                    .iter()
                    .zip(p.sides.as_array())
                    .map(|(m, len)| EdgeLabel {
                        at: [m.x, m.y],
                        text: format!("{len:.1}"),
                    })
                    .collect();
                FigureJson::Triangle {
                    vertices,
                    scale: p.scale,
                    labels,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use trigon::{analyze, place, Sides};

    #[test]
    fn analyze_output_flattens_result_fields() {
        let r = analyze(3.0, 4.0, 5.0).unwrap();
        let out = AnalyzeOutput {
            label: Some("ada".into()),
            result: ResultJson::from(&r),
        };
        let v: Value = serde_json::to_value(&out).unwrap();
        assert_eq!(v["label"], "ada");
        assert_eq!(v["is_triangle"], true);
        assert_eq!(v["triangle_type"], "Scalene Right");
        assert_eq!(v["perimeter"], 12.0);
        assert_eq!(v["angles"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn error_record_omits_result_fields() {
        let rec = Record {
            label: None,
            side1: Some(0.0),
            side2: Some(4.0),
            side3: None,
            result: None,
            error: Some("bad".into()),
            created_at: "2024-01-01T00:00:00+00:00".into(),
        };
        let v: Value = serde_json::to_value(&rec).unwrap();
        assert!(v.get("is_triangle").is_none());
        assert!(v.get("label").is_none());
        assert_eq!(v["side3"], Value::Null);
        assert_eq!(v["error"], "bad");
    }

    #[test]
    fn invalid_figure_is_a_marker() {
        let fig = place(Sides::new(1.0, 1.0, 3.0), 5.0).unwrap();
        let v = serde_json::to_value(FigureJson::from(&fig)).unwrap();
        assert_eq!(v, json!({ "invalid": true }));
    }

    #[test]
    fn triangle_figure_labels_carry_input_lengths() {
        let fig = place(Sides::new(30.0, 40.0, 50.0), 5.0).unwrap();
        let v = serde_json::to_value(FigureJson::from(&fig)).unwrap();
        assert_eq!(v["scale"], 0.1);
        let texts: Vec<&str> = v["labels"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, ["30.0", "40.0", "50.0"]);
    }
}
