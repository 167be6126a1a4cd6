use crate::image_classifier::error::ClassifierError;
use std::path::Path;

/// Parses a label file with one class per line, in model output order.
///
/// Lines may carry a WordNet synset id (`n02099601 golden retriever`) and a list of
/// synonyms (`tabby, tabby cat`); only the first name is kept.
pub fn parse_labels(contents: &str) -> Vec<String> {
    let mut labels: Vec<String> = contents.lines().map(parse_label_line).collect();

    while labels.last().is_some_and(|label| label.is_empty()) {
        labels.pop();
    }

    labels
}

fn parse_label_line(line: &str) -> String {
    let line = line.trim();

    let without_synset = match line.split_once(' ') {
        Some((id, rest)) if is_synset_id(id) => rest,
        _ => line,
    };

    without_synset
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn is_synset_id(token: &str) -> bool {
    token.len() == 9 && token.starts_with('n') && token[1..].chars().all(|c| c.is_ascii_digit())
}

pub fn load_labels(path: impl AsRef<Path>) -> Result<Vec<String>, ClassifierError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| ClassifierError::LabelsLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let labels = parse_labels(&contents);
    if labels.is_empty() {
        return Err(ClassifierError::LabelsLoad {
            path: path.display().to_string(),
            reason: "file has no labels".to_string(),
        });
    }

    Ok(labels)
}
