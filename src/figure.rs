//! A module for describing network figures in Plotly's JSON schema.
//!
//! The figure holds two scatter traces: the edges as line segments and the nodes as markers
//! colored by a centrality score. Rendering is left to plotly.js, either by handing it
//! [`Figure::to_json`] or by opening the page produced by [`Figure::write_html`].

use std::{fs, path::Path};

use serde::Serialize;

use crate::{
    config::FigureConfig,
    error::{NetworkError, Result},
    layout::Position,
};

/// plotly.js bundle loaded by the standalone HTML page.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Title of the colorbar next to the node markers.
pub const COLORBAR_TITLE: &str = "Node Connections";

/// Always holds two traces, serialized in drawing order: edges below nodes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
    data: Vec<Scatter>,
    layout: Layout,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scatter {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// `None` entries break the line between consecutive segments.
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    pub mode: &'static str,
    pub hoverinfo: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Line {
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub showscale: bool,
    pub colorscale: String,
    pub reversescale: bool,
    pub color: Vec<f64>,
    pub size: f64,
    pub colorbar: ColorBar,
    pub line: Line,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorBar {
    pub thickness: f64,
    pub title: ColorBarTitle,
    pub xanchor: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorBarTitle {
    pub text: &'static str,
    pub side: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub showlegend: bool,
    pub hovermode: &'static str,
    pub margin: Margin,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

/// Text placed in paper coordinates, `(0, 0)` being the bottom left of the plot area.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub showarrow: bool,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Font {
    pub size: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Margin {
    pub b: u32,
    pub l: u32,
    pub r: u32,
    pub t: u32,
}

/// A bare axis: no grid, zero line or tick labels.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Axis {
    pub showgrid: bool,
    pub zeroline: bool,
    pub showticklabels: bool,
}

impl Figure {
    /// Assembles the figure for vertices placed at `positions` and colored by `scores`.
    ///
    /// `labels`, `positions` and `scores` are indexed alike and `edges` refers to those indices.
    pub(crate) fn new(
        labels: Vec<String>,
        positions: &[Position],
        edges: impl IntoIterator<Item = (usize, usize)>,
        scores: Vec<f64>,
        config: &FigureConfig,
    ) -> Self {
        debug_assert_eq!(labels.len(), positions.len());
        debug_assert_eq!(scores.len(), positions.len());

        let (mut edge_x, mut edge_y) = (Vec::new(), Vec::new());
        for (i, j) in edges {
            let (from, to) = (positions[i], positions[j]);
            edge_x.extend([Some(from.x), Some(to.x), None]);
            edge_y.extend([Some(from.y), Some(to.y), None]);
        }

        let edge_trace = Scatter {
            kind: "scatter",
            x: edge_x,
            y: edge_y,
            mode: "lines",
            hoverinfo: "none",
            text: None,
            line: Some(Line {
                width: 0.5,
                color: Some("#888"),
            }),
            marker: None,
        };

        let node_trace = Scatter {
            kind: "scatter",
            x: positions.iter().map(|p| Some(p.x)).collect(),
            y: positions.iter().map(|p| Some(p.y)).collect(),
            mode: "markers",
            hoverinfo: "text",
            text: Some(labels),
            line: None,
            marker: Some(Marker {
                showscale: true,
                colorscale: config.colorscale.clone(),
                reversescale: true,
                color: scores,
                size: config.marker_size,
                colorbar: ColorBar {
                    thickness: 15.0,
                    title: ColorBarTitle {
                        text: COLORBAR_TITLE,
                        side: "right",
                    },
                    xanchor: "left",
                },
                line: Line {
                    width: 2.0,
                    color: None,
                },
            }),
        };

        Self {
            data: vec![edge_trace, node_trace],
            layout: Layout {
                title: Title {
                    text: config.title.clone(),
                    font: Font { size: 16.0 },
                },
                showlegend: false,
                hovermode: "closest",
                margin: Margin {
                    b: 20,
                    l: 5,
                    r: 5,
                    t: 40,
                },
                xaxis: Axis::default(),
                yaxis: Axis::default(),
                annotations: config
                    .credit
                    .iter()
                    .map(|text| Annotation {
                        text: text.clone(),
                        showarrow: false,
                        xref: "paper",
                        yref: "paper",
                        x: 0.005,
                        y: -0.002,
                    })
                    .collect(),
            },
        }
    }

    /// Both traces, edges first.
    pub fn data(&self) -> &[Scatter] {
        &self.data
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The edge layer.
    pub fn edge_trace(&self) -> &Scatter {
        &self.data[0]
    }

    /// The node layer.
    pub fn node_trace(&self) -> &Scatter {
        &self.data[1]
    }

    /// Serializes the figure as Plotly figure JSON (`{"data": [...], "layout": {...}}`).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Renders a standalone page drawing the figure with plotly.js.
    pub fn to_html(&self) -> Result<String> {
        // A label containing `</script>` would otherwise end the script element early.
        let json = self.to_json()?.replace("</", "<\\/");

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<script src="{PLOTLY_CDN}"></script>
</head>
<body>
<div id="figure" style="width:100%;height:100vh;"></div>
<script>
const figure = {json};
Plotly.newPlot("figure", figure.data, figure.layout);
</script>
</body>
</html>
"#
        ))
    }

    /// Writes [`Figure::to_html`] to `path`.
    pub fn write_html(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_html()?).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn figure() -> Figure {
        figure_with(&FigureConfig::default())
    }

    fn figure_with(config: &FigureConfig) -> Figure {
        let positions = [
            Position { x: 0.0, y: 0.0 },
            Position { x: 1.0, y: 0.5 },
        ];

        Figure::new(
            vec!["a".into(), "b".into()],
            &positions,
            [(0, 1), (1, 0)],
            vec![1.0, 0.5],
            config,
        )
    }

    #[test]
    fn edge_segments() {
        let figure = figure();
        let edges = figure.edge_trace();

        assert_eq!(
            edges.x,
            vec![Some(0.0), Some(1.0), None, Some(1.0), Some(0.0), None]
        );
        assert_eq!(
            edges.y,
            vec![Some(0.0), Some(0.5), None, Some(0.5), Some(0.0), None]
        );
    }

    #[test]
    fn node_markers() {
        let figure = figure();
        let nodes = figure.node_trace();

        assert_eq!(nodes.x, vec![Some(0.0), Some(1.0)]);
        assert_eq!(nodes.text, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(nodes.marker.as_ref().unwrap().color, vec![1.0, 0.5]);
    }

    #[test]
    fn json_schema() {
        let value: Value = serde_json::from_str(&figure().to_json().unwrap()).unwrap();

        assert_eq!(value["data"][0]["mode"], "lines");
        assert_eq!(value["data"][0]["x"][2], Value::Null);
        assert_eq!(value["data"][0]["line"], json!({"width": 0.5, "color": "#888"}));
        assert!(value["data"][0].get("marker").is_none());

        let marker = &value["data"][1]["marker"];
        assert_eq!(marker["colorscale"], "YlGnBu");
        assert_eq!(marker["reversescale"], true);
        assert_eq!(marker["colorbar"]["title"]["text"], COLORBAR_TITLE);
        assert_eq!(marker["line"], json!({"width": 2.0}));

        assert_eq!(value["layout"]["hovermode"], "closest");
        assert_eq!(value["layout"]["xaxis"]["showgrid"], false);
        assert!(value["layout"].get("annotations").is_none());
    }

    #[test]
    fn traces_in_drawing_order() {
        let figure = figure();

        assert_eq!(figure.data().len(), 2);
        assert_eq!(figure.data()[0].mode, "lines");
        assert_eq!(figure.data()[1].mode, "markers");
        assert_eq!(figure.edge_trace(), &figure.data()[0]);
        assert_eq!(figure.node_trace(), &figure.data()[1]);
    }

    #[test]
    fn credit_annotation() {
        let config = FigureConfig {
            credit: Some("Recipe: <a href='https://plotly.com/'>plotly</a>".into()),
            ..Default::default()
        };
        let figure = figure_with(&config);

        assert_eq!(figure.layout().annotations.len(), 1);

        let value: Value = serde_json::from_str(&figure.to_json().unwrap()).unwrap();
        let annotation = &value["layout"]["annotations"][0];
        assert_eq!(annotation["xref"], "paper");
        assert_eq!(annotation["yref"], "paper");
        assert_eq!(annotation["showarrow"], false);
        assert_eq!(annotation["x"], 0.005);
        assert_eq!(annotation["y"], -0.002);
    }

    #[test]
    fn html_escapes_script_end() {
        let mut figure = figure();
        figure.data[1].text = Some(vec!["</script>".into(), "b".into()]);

        let html = figure.to_html().unwrap();
        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains(PLOTLY_CDN));
    }

    #[test]
    fn write_html() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.html");

        figure().write_html(&path).unwrap();
        assert!(fs::read_to_string(path).unwrap().contains("Plotly.newPlot"));
    }
}
