//! Instance persistence.
//!
//! Text format, one value per line:
//!
//! ```text
//! <num_nodes>
//! <num_edges>
//! <u> <v>        (num_edges lines)
//! <num_conflicts>
//! <u> <v>        (num_conflicts lines)
//! ```
//!
//! JSON uses the serde representation of [`DdspcInput`].

use std::fs;
use std::path::Path;

use super::DdspcInput;
use crate::ddspc::NodeId;
use crate::error::DdspcError;

/// Parses the text format. Blank lines are skipped.
pub fn from_text(text: &str) -> Result<DdspcInput, DdspcError> {
    let mut reader = LineReader::new(text);
    let num_nodes = reader.count("node count")?;
    let num_edges = reader.count("edge count")?;
    let edges = reader.pairs(num_edges)?;
    let num_conflicts = reader.count("conflict count")?;
    let conflicts = reader.pairs(num_conflicts)?;
    Ok(DdspcInput {
        num_nodes,
        edges,
        conflicts,
        instance_name: None,
    })
}

/// non-blank lines with their 1-based line numbers
struct LineReader<'a> {
    lines: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last: usize,
}

impl<'a> LineReader<'a> {
    fn new(text: &'a str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());
        Self {
            lines: Box::new(lines),
            last: 0,
        }
    }

    fn next_line(&mut self, what: &str) -> Result<(usize, &'a str), DdspcError> {
        match self.lines.next() {
            Some((no, line)) => {
                self.last = no;
                Ok((no, line))
            }
            None => Err(DdspcError::parse(self.last + 1, format!("missing {what}"))),
        }
    }

    fn count(&mut self, what: &str) -> Result<usize, DdspcError> {
        let (no, line) = self.next_line(what)?;
        line.parse()
            .map_err(|_| DdspcError::parse(no, format!("expected {what}, got '{line}'")))
    }

    fn pairs(&mut self, count: usize) -> Result<Vec<(NodeId, NodeId)>, DdspcError> {
        (0..count)
            .map(|_| {
                let (no, line) = self.next_line("node pair")?;
                let mut it = line.split_whitespace().map(str::parse::<NodeId>);
                match (it.next(), it.next(), it.next()) {
                    (Some(Ok(u)), Some(Ok(v)), None) => Ok((u, v)),
                    _ => Err(DdspcError::parse(
                        no,
                        format!("expected two node ids, got '{line}'"),
                    )),
                }
            })
            .collect()
    }
}

/// Renders the text format.
pub fn to_text(input: &DdspcInput) -> String {
    let mut res = format!("{}\n{}\n", input.num_nodes, input.edges.len());
    for (u, v) in &input.edges {
        res += &format!("{u} {v}\n");
    }
    res += &format!("{}\n", input.conflicts.len());
    for (u, v) in &input.conflicts {
        res += &format!("{u} {v}\n");
    }
    res
}

/// Reads a text instance; the file stem becomes the instance name.
pub fn load_text(path: impl AsRef<Path>) -> Result<DdspcInput, DdspcError> {
    let path = path.as_ref();
    let mut input = from_text(&fs::read_to_string(path)?)?;
    input.instance_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned());
    Ok(input)
}

/// Writes a text instance.
pub fn save_text(input: &DdspcInput, path: impl AsRef<Path>) -> Result<(), DdspcError> {
    fs::write(path, to_text(input))?;
    Ok(())
}

/// Reads a JSON instance.
#[cfg(feature = "serde")]
pub fn load_json(path: impl AsRef<Path>) -> Result<DdspcInput, DdspcError> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

/// Writes a JSON instance (pretty-printed).
#[cfg(feature = "serde")]
pub fn save_json(input: &DdspcInput, path: impl AsRef<Path>) -> Result<(), DdspcError> {
    fs::write(path, serde_json::to_string_pretty(input)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text() {
        let text = "5\n5\n0 1\n1 2\n2 3\n3 4\n4 0\n2\n0 2\n1 3\n";
        let input = from_text(text).unwrap();
        assert_eq!(input.num_nodes, 5);
        assert_eq!(input.edges, DdspcInput::example_01().edges);
        assert_eq!(input.conflicts, vec![(0, 2), (1, 3)]);
    }

    #[test]
    fn test_text_roundtrip_example() {
        let input = DdspcInput::example_02();
        let parsed = from_text(&to_text(&input)).unwrap();
        assert_eq!(parsed.edges, input.edges);
        assert_eq!(parsed.conflicts, input.conflicts);
        assert_eq!(parsed.num_nodes, input.num_nodes);
    }

    #[test]
    fn test_parse_errors_report_line() {
        let err = from_text("3\n1\n0 x\n0\n").unwrap_err();
        assert!(matches!(err, DdspcError::Parse { line: 3, .. }), "{err}");

        let err = from_text("3\n2\n0 1\n").unwrap_err();
        assert!(matches!(err, DdspcError::Parse { .. }));

        let err = from_text("abc\n").unwrap_err();
        assert!(matches!(err, DdspcError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_file_roundtrip_sets_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cycle5.txt");
        save_text(&DdspcInput::example_01(), &path).unwrap();

        let loaded = load_text(&path).unwrap();
        assert_eq!(loaded.instance_name.as_deref(), Some("cycle5"));
        assert_eq!(loaded.edges.len(), 5);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_text("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, DdspcError::Io(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.json");
        let input = DdspcInput::example_02();
        save_json(&input, &path).unwrap();
        assert_eq!(load_json(&path).unwrap(), input);
    }
}
