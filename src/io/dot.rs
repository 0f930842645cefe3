//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw (colored) nodes and
//! undirected edges labelled with their weights.
//!
//! For example, drawing a graph whose spanning tree edges are colored red can be achieved via
//! ```
//! use seqgraph::{prelude::*, algo::*, io::*};
//!
//! let graph = seqgraph::build(&[2, 2, 2]).unwrap();
//! let tree = graph.minimum_spanning_tree();
//!
//! let mut writer = Vec::new();
//! let dot_writer = DotWriter::default();
//! dot_writer.start_graph(&mut writer).unwrap();
//! dot_writer.write_nodes(&mut writer, graph.vertices(), Some(DotColor::LightBlue)).unwrap();
//! dot_writer.write_weighted_edges(&mut writer, graph.weighted_edges(), None).unwrap();
//! dot_writer
//!     .write_weighted_edges(&mut writer, tree.weighted_edges().map(|(e, w)| (e, Some(w))), Some(DotColor::Red))
//!     .unwrap();
//! dot_writer.finish_graph(&mut writer).unwrap();
//!
//! let dot = String::from_utf8(writer).unwrap();
//! assert!(dot.starts_with("graph {"));
//! ```
//!
//! Note that for nodes, the latest coloring is the one that will be applied in a visualizer,
//! whereas for edges, each new colored edge adds another edge to the graph.
use std::fmt::Display;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Increment nodes by 1 before writing
    inc_nodes: bool,
    /// Prefix of a node (default: 'v')
    prefix: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            inc_nodes: false,
            prefix: "v".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, nodes are written 1-based
    pub fn inc_nodes(mut self, inc_nodes: bool) -> Self {
        self.inc_nodes = inc_nodes;
        self
    }

    /// Set the prefix of a node (`v` by default). Can also be changed while drawing to draw
    /// additional subgraphs apart from the original graph.
    pub fn node_prefix<S>(self, prefix: S) -> DotWriter
    where
        S: Into<String>,
    {
        DotWriter {
            inc_nodes: self.inc_nodes,
            prefix: prefix.into(),
        }
    }

    /// Writes the opening brackets of the (undirected) graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "graph {{")
    }

    /// Formats a node depending on `self.prefix, self.inc_nodes`
    fn format_node(&self, u: Node) -> String {
        let u = u + self.inc_nodes as Node;
        format!("{}{u}", self.prefix)
    }

    /// Declares nodes labelled with their number, optionally filled with `color`.
    /// Declaring nodes is needed for isolated nodes to show up at all.
    pub fn write_nodes<W, I>(&self, writer: &mut W, nodes: I, color: Option<DotColor>) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Node>,
    {
        let fill = if let Some(c) = color {
            &format!(", style=filled, fillcolor={c}")
        } else {
            ""
        };

        for u in nodes.into_iter() {
            let label = u + self.inc_nodes as Node;
            write!(writer, "{}[label={label}{fill}];", self.format_node(u))?;
        }
        writeln!(writer)
    }

    /// Writes edges to `writer`; edges with a weight get it as label.
    pub fn write_weighted_edges<W, I>(
        &self,
        writer: &mut W,
        edges: I,
        color: Option<DotColor>,
    ) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = (Edge, Option<Weight>)>,
    {
        for (Edge(u, v), weight) in edges.into_iter() {
            let attributes = match (weight, color) {
                (Some(w), Some(c)) => format!("[label={w}, color={c}]"),
                (Some(w), None) => format!("[label={w}]"),
                (None, Some(c)) => format!("[color={c}]"),
                (None, None) => String::new(),
            };

            write!(
                writer,
                "{}--{}{attributes};",
                self.format_node(u),
                self.format_node(v)
            )?;
        }
        writeln!(writer)
    }

    /// Writes a list of colored nodes to `writer`.
    /// This method should only be needed when wanting to color additional nodes which is why
    /// `color` is not optional.
    pub fn color_nodes<W, I>(&self, writer: &mut W, nodes: I, color: DotColor) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Node>,
    {
        for u in nodes.into_iter() {
            write!(
                writer,
                "{}[style=filled, fillcolor={color}];",
                self.format_node(u)
            )?;
        }
        writeln!(writer)
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl GraphWriter<WeightedGraph> for DotWriter {
    fn try_write_graph<W>(&self, graph: &WeightedGraph, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer)?;
        self.write_nodes(&mut writer, graph.vertices(), Some(DotColor::LightBlue))?;
        self.write_weighted_edges(&mut writer, graph.weighted_edges(), None)?;
        self.finish_graph(&mut writer)
    }
}

/// Spanning trees are drawn with their spanned nodes only
impl GraphWriter<SpanningTree> for DotWriter {
    fn try_write_graph<W>(&self, tree: &SpanningTree, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer)?;
        self.write_nodes(&mut writer, tree.spanned_nodes(), Some(DotColor::LightGreen))?;
        self.write_weighted_edges(
            &mut writer,
            tree.weighted_edges().map(|(e, w)| (e, Some(w))),
            None,
        )?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl<G> DotWrite for G
where
    DotWriter: GraphWriter<G>,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Selection of the colors in Svg-Dot taken from
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Crimson,
    DarkGreen,
    Gold,
    Gray,
    Green,
    LightBlue,
    LightGray,
    LightGreen,
    LightSalmon,
    Orange,
    Purple,
    Red,
    SkyBlue,
    White,
    Yellow,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::*;

    fn write_to_string<G>(graph: &G) -> String
    where
        G: DotWrite,
    {
        let mut buffer = Vec::new();
        graph.try_write_dot(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn weighted_graph() {
        let mut graph = WeightedGraph::from_edges(3, [(0, 1), (1, 2)]);
        graph.set_weight(1, 2, 7).unwrap();

        assert_eq!(
            write_to_string(&graph),
            "graph {\n\
             v0[label=0, style=filled, fillcolor=lightblue];\
             v1[label=1, style=filled, fillcolor=lightblue];\
             v2[label=2, style=filled, fillcolor=lightblue];\n\
             v0--v1;v1--v2[label=7];\n\
             }\n"
        );
    }

    #[test]
    fn spanning_tree_of_disconnected_graph() {
        let graph = WeightedGraph::from_weighted_edges(4, [((0, 1), 3), ((2, 3), 1)]);
        let tree = graph.minimum_spanning_tree();

        assert_eq!(
            write_to_string(&tree),
            "graph {\n\
             v0[label=0, style=filled, fillcolor=lightgreen];\
             v1[label=1, style=filled, fillcolor=lightgreen];\n\
             v0--v1[label=3];\n\
             }\n"
        );
    }

    #[test]
    fn custom_writer() {
        let mut buffer = Vec::new();
        let writer = DotWriter::new().inc_nodes(true).node_prefix("u");
        writer.start_graph(&mut buffer).unwrap();
        writer
            .write_weighted_edges(&mut buffer, [(Edge(0, 1), Some(-2))], Some(DotColor::Red))
            .unwrap();
        writer.color_nodes(&mut buffer, [1], DotColor::Gold).unwrap();
        writer.finish_graph(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "graph {\nu1--u2[label=-2, color=red];\nu2[style=filled, fillcolor=gold];\n}\n"
        );
    }
}
