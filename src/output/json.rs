//! JSON output formatting

use std::io;

use crate::tree::Node;

/// Serialize a tree as pretty-printed JSON.
pub fn to_json(node: &Node) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &Node) -> io::Result<()> {
    let json = to_json(node).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_is_valid_and_parseable() {
        let tree = Node::dir("R", vec![Node::file("a.txt"), Node::dir("B", vec![])]);
        let json = to_json(&tree).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["name"], "R");
        assert_eq!(parsed["children"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["children"][1]["type"], "dir");
        assert_eq!(parsed["children"][1]["children"], serde_json::json!([]));
    }
}
