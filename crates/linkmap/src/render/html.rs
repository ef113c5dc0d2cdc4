//! Self-contained interactive HTML page for the mindmap.
//!
//! The page embeds the node and edge data as JSON and runs a small force
//! relaxation on a canvas. The view is pannable (drag the background),
//! zoomable (wheel), and nodes can be repositioned by dragging. Marker
//! fill encodes connectivity on a sequential scale, with a side colorbar.

use chrono::Utc;
use serde::Serialize;

use crate::graph::MindmapGraph;

/// Title of the interactive page.
pub const INTERACTIVE_TITLE: &str = "Mindmap des Issues Jira (Déplaçable)";

/// Title of the connectivity colorbar.
pub const COLORBAR_TITLE: &str = "Node Connections";

#[derive(Serialize)]
struct NodeData {
    id: usize,
    label: String,
    degree: usize,
}

#[derive(Serialize)]
struct EdgeData {
    source: usize,
    target: usize,
    label: &'static str,
}

#[derive(Serialize)]
struct GraphData {
    nodes: Vec<NodeData>,
    edges: Vec<EdgeData>,
}

/// Escapes text for safe interpolation into HTML content.
fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Serializes the graph for embedding inside a `<script>` element.
///
/// `</` is escaped so label text can never terminate the script element
/// early.
fn graph_data(graph: &MindmapGraph) -> String {
    let data = GraphData {
        nodes: graph
            .nodes()
            .map(|(index, node)| NodeData {
                id: index.index(),
                label: node.label.clone(),
                degree: graph.degree(index),
            })
            .collect(),
        edges: graph
            .edges()
            .map(|(source, target, label)| EdgeData {
                source: source.index(),
                target: target.index(),
                label: label.as_str(),
            })
            .collect(),
    };
    serde_json::to_string(&data)
        .expect("graph data has no non-serializable values")
        .replace("</", "<\\/")
}

const STYLE: &str = r##"
body{font-family:system-ui,-apple-system,Segoe UI,Roboto,Arial;margin:24px;max-width:1280px}
.muted{color:#57606a}
code{background:#f6f8fa;border:1px solid #d0d7de;border-radius:6px;padding:1px 6px}
#view{display:flex;gap:16px;align-items:flex-start;margin-top:12px}
#mindmap{border:1px solid #d0d7de;border-radius:10px;background:#fff;cursor:grab}
#colorbar{display:flex;gap:8px;align-items:stretch;height:320px}
#colorbar .bar{width:16px;border:1px solid #d0d7de;border-radius:4px;background:linear-gradient(to top,#ffffd9,#c7e9b4,#7fcdbb,#41b6c4,#225ea8,#081d58)}
#colorbar .labels{display:flex;flex-direction:column;justify-content:space-between;font-size:12px;color:#57606a}
#colorbar .title{writing-mode:vertical-rl;font-size:12px;color:#57606a;align-self:center}
"##;

const SCRIPT: &str = r##"
(function () {
  const view = document.getElementById("mindmap");
  const ctx = view.getContext("2d");

  const nodes = GRAPH.nodes.map(function (n, i) {
    const angle = (2 * Math.PI * i) / Math.max(GRAPH.nodes.length, 1);
    const radius = 60 + 18 * Math.sqrt(GRAPH.nodes.length);
    return {
      label: n.label,
      degree: n.degree,
      x: view.width / 2 + radius * Math.cos(angle),
      y: view.height / 2 + radius * Math.sin(angle),
    };
  });
  const edges = GRAPH.edges;

  const maxDegree = nodes.reduce(function (m, n) { return Math.max(m, n.degree); }, 0);
  document.getElementById("degree-max").textContent = String(maxDegree);
  document.getElementById("degree-min").textContent = "0";

  const STOPS = ["#ffffd9", "#c7e9b4", "#7fcdbb", "#41b6c4", "#225ea8", "#081d58"];
  function channel(a, b, t) { return Math.round(a + (b - a) * t); }
  function nodeColor(degree) {
    const t = maxDegree > 0 ? degree / maxDegree : 0;
    const span = (STOPS.length - 1) * t;
    const i = Math.min(Math.floor(span), STOPS.length - 2);
    const f = span - i;
    const a = STOPS[i], b = STOPS[i + 1];
    const r = channel(parseInt(a.slice(1, 3), 16), parseInt(b.slice(1, 3), 16), f);
    const g = channel(parseInt(a.slice(3, 5), 16), parseInt(b.slice(3, 5), 16), f);
    const bl = channel(parseInt(a.slice(5, 7), 16), parseInt(b.slice(5, 7), 16), f);
    return "rgb(" + r + "," + g + "," + bl + ")";
  }

  // Force relaxation in the Fruchterman-Reingold style; a few ticks per
  // frame until the layout cools, then the view is fully interactive.
  const k = Math.sqrt((view.width * view.height) / Math.max(nodes.length, 1));
  let temperature = view.width / 8;
  let dragged = null;

  function tick() {
    const disp = nodes.map(function () { return { x: 0, y: 0 }; });
    for (let i = 0; i < nodes.length; i++) {
      for (let j = i + 1; j < nodes.length; j++) {
        let dx = nodes[i].x - nodes[j].x;
        let dy = nodes[i].y - nodes[j].y;
        const d = Math.sqrt(dx * dx + dy * dy) || 0.01;
        const force = (k * k) / d;
        dx /= d; dy /= d;
        disp[i].x += dx * force; disp[i].y += dy * force;
        disp[j].x -= dx * force; disp[j].y -= dy * force;
      }
    }
    edges.forEach(function (e) {
      if (e.source === e.target) return;
      const a = nodes[e.source], b = nodes[e.target];
      let dx = a.x - b.x;
      let dy = a.y - b.y;
      const d = Math.sqrt(dx * dx + dy * dy) || 0.01;
      const force = (d * d) / k;
      dx /= d; dy /= d;
      disp[e.source].x -= dx * force; disp[e.source].y -= dy * force;
      disp[e.target].x += dx * force; disp[e.target].y += dy * force;
    });
    nodes.forEach(function (n, i) {
      if (n === dragged) return;
      const d = Math.sqrt(disp[i].x * disp[i].x + disp[i].y * disp[i].y) || 0.01;
      const step = Math.min(d, temperature);
      n.x += (disp[i].x / d) * step;
      n.y += (disp[i].y / d) * step;
    });
    temperature = Math.max(temperature * 0.95, 0.5);
  }

  let scale = 1, panX = 0, panY = 0;

  function drawEdge(e) {
    const a = nodes[e.source], b = nodes[e.target];
    ctx.strokeStyle = "#888";
    ctx.beginPath();
    if (a === b) {
      ctx.arc(a.x + 12, a.y - 12, 10, 0, 2 * Math.PI);
      ctx.stroke();
      return;
    }
    ctx.moveTo(a.x, a.y);
    ctx.lineTo(b.x, b.y);
    ctx.stroke();

    const dx = b.x - a.x, dy = b.y - a.y;
    const d = Math.sqrt(dx * dx + dy * dy) || 0.01;
    const ux = dx / d, uy = dy / d;
    const tipX = b.x - ux * 10, tipY = b.y - uy * 10;
    ctx.fillStyle = "#888";
    ctx.beginPath();
    ctx.moveTo(tipX, tipY);
    ctx.lineTo(tipX - ux * 8 - uy * 4, tipY - uy * 8 + ux * 4);
    ctx.lineTo(tipX - ux * 8 + uy * 4, tipY - uy * 8 - ux * 4);
    ctx.closePath();
    ctx.fill();

    ctx.fillStyle = "#c0392b";
    ctx.font = "10px system-ui";
    ctx.textAlign = "center";
    ctx.fillText(e.label, (a.x + b.x) / 2, (a.y + b.y) / 2 - 4);
  }

  function drawNode(n) {
    ctx.beginPath();
    ctx.arc(n.x, n.y, 8, 0, 2 * Math.PI);
    ctx.fillStyle = nodeColor(n.degree);
    ctx.fill();
    ctx.strokeStyle = "#333";
    ctx.stroke();
    ctx.fillStyle = "#222";
    ctx.font = "12px system-ui";
    ctx.textAlign = "center";
    ctx.fillText(n.label, n.x, n.y - 14);
  }

  function draw() {
    ctx.setTransform(1, 0, 0, 1, 0, 0);
    ctx.clearRect(0, 0, view.width, view.height);
    ctx.setTransform(scale, 0, 0, scale, panX, panY);
    ctx.lineWidth = 1 / scale;
    edges.forEach(drawEdge);
    nodes.forEach(drawNode);
  }

  function toWorld(px, py) {
    return { x: (px - panX) / scale, y: (py - panY) / scale };
  }

  let panning = false, lastX = 0, lastY = 0;

  view.addEventListener("mousedown", function (ev) {
    const rect = view.getBoundingClientRect();
    const p = toWorld(ev.clientX - rect.left, ev.clientY - rect.top);
    dragged = null;
    for (const n of nodes) {
      const dx = n.x - p.x, dy = n.y - p.y;
      if (dx * dx + dy * dy <= 100) { dragged = n; break; }
    }
    panning = !dragged;
    lastX = ev.clientX;
    lastY = ev.clientY;
  });

  window.addEventListener("mousemove", function (ev) {
    if (dragged) {
      const rect = view.getBoundingClientRect();
      const p = toWorld(ev.clientX - rect.left, ev.clientY - rect.top);
      dragged.x = p.x;
      dragged.y = p.y;
      draw();
    } else if (panning) {
      panX += ev.clientX - lastX;
      panY += ev.clientY - lastY;
      lastX = ev.clientX;
      lastY = ev.clientY;
      draw();
    }
  });

  window.addEventListener("mouseup", function () {
    dragged = null;
    panning = false;
  });

  view.addEventListener("wheel", function (ev) {
    ev.preventDefault();
    const rect = view.getBoundingClientRect();
    const px = ev.clientX - rect.left, py = ev.clientY - rect.top;
    const factor = ev.deltaY < 0 ? 1.1 : 1 / 1.1;
    panX = px - (px - panX) * factor;
    panY = py - (py - panY) * factor;
    scale *= factor;
    draw();
  });

  let ticksLeft = 300;
  function frame() {
    for (let i = 0; i < 4 && ticksLeft > 0; i++) { tick(); ticksLeft--; }
    draw();
    if (ticksLeft > 0) requestAnimationFrame(frame);
  }
  frame();
})();
"##;

/// Renders the mindmap as a self-contained interactive HTML page.
#[must_use]
pub fn to_html(graph: &MindmapGraph) -> String {
    format!(
        r##"<!doctype html>
<html lang="fr">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width,initial-scale=1">
  <title>{title}</title>
  <style>{style}</style>
</head>
<body>
  <h1>{title}</h1>
  <div class="muted">nodes: <code>{node_count}</code> · edges: <code>{edge_count}</code> · généré {generated}</div>
  <div id="view">
    <canvas id="mindmap" width="1200" height="800"></canvas>
    <div id="colorbar">
      <div class="bar"></div>
      <div class="labels"><span id="degree-max"></span><span id="degree-min"></span></div>
      <div class="title">{colorbar_title}</div>
    </div>
  </div>
  <p class="muted">Glissez le fond pour déplacer la vue, la molette pour zoomer, un nœud pour le repositionner.</p>
  <script>const GRAPH = {data};</script>
  <script>{script}</script>
</body>
</html>
"##,
        title = html_escape(INTERACTIVE_TITLE),
        style = STYLE,
        node_count = graph.node_count(),
        edge_count = graph.edge_count(),
        generated = Utc::now().format("%Y-%m-%d %H:%M UTC"),
        colorbar_title = html_escape(COLORBAR_TITLE),
        data = graph_data(graph),
        script = SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::mindmap::build_mindmap;
    use linkmap_table::{IssueRow, LinkColumn};

    fn sample_graph() -> MindmapGraph {
        let rows = vec![
            IssueRow {
                record_number: 1,
                key: "A".to_string(),
                summary: "Fix bug".to_string(),
                link_fields: vec![(LinkColumn::OutwardBlocks, "B".to_string())],
            },
            IssueRow {
                record_number: 2,
                key: "B".to_string(),
                summary: "Root cause".to_string(),
                link_fields: vec![],
            },
        ];
        build_graph(&build_mindmap(&rows))
    }

    #[test]
    fn page_carries_title_and_colorbar() {
        let html = to_html(&sample_graph());

        assert!(html.contains("Mindmap des Issues Jira (Déplaçable)"));
        assert!(html.contains("Node Connections"));
        assert!(html.contains("degree-max"));
    }

    #[test]
    fn node_and_edge_data_are_embedded() {
        let html = to_html(&sample_graph());

        assert!(html.contains("\"label\":\"A: Fix bug\""));
        assert!(html.contains("\"label\":\"B: Root cause\""));
        assert!(html.contains("\"label\":\"is blocked by\""));
        assert!(html.contains("\"source\":0"));
        assert!(html.contains("\"target\":1"));
    }

    #[test]
    fn degrees_reach_the_page() {
        let html = to_html(&sample_graph());
        // Both endpoints of the single edge have degree 1.
        assert!(html.contains("\"degree\":1"));
    }

    #[test]
    fn script_terminator_in_labels_is_neutralized() {
        let rows = vec![
            IssueRow {
                record_number: 1,
                key: "A".to_string(),
                summary: "sneaky </script> summary".to_string(),
                link_fields: vec![(LinkColumn::InwardRelates, "A".to_string())],
            },
        ];
        let html = to_html(&build_graph(&build_mindmap(&rows)));

        assert!(!html.contains("sneaky </script>"));
        assert!(html.contains("sneaky <\\/script>"));
    }

    #[test]
    fn empty_graph_still_renders_a_page() {
        let html = to_html(&MindmapGraph::default());
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("\"nodes\":[]"));
    }
}
