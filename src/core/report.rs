//! Result assembly: labeled advice panels for display, plus the canonical
//! JSON export with its derived filename.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::core::confidence::{self, ConfidenceDisplay};
use crate::core::format::{self, BulletItem, Segment};
use crate::core::model::AnalysisResult;

/// Placeholder shown when an advice field yields no bullet items.
pub const NO_INFORMATION: &str = "No information available.";

/// Suffix appended to the derived export filename.
const EXPORT_SUFFIX: &str = "_analysis.json";

/// One labeled advice panel: a checklist of formatted bullet items.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvicePanel {
    pub title: &'static str,
    pub items: Vec<BulletItem>,
}

impl AdvicePanel {
    /// Build a panel from one raw advice field. When `strip_quotes` is
    /// set, literal double quotes are removed from plain segments only;
    /// emphasized segments keep theirs. The original front-end had
    /// exactly this asymmetry, so it is reproduced behind an opt-out.
    fn from_field(title: &'static str, raw: &str, strip_quotes: bool) -> Self {
        let items = format::split_bullets(raw)
            .iter()
            .map(|item| {
                let item = format::format_item(item);
                if strip_quotes {
                    strip_plain_quotes(item)
                } else {
                    item
                }
            })
            .collect();
        Self { title, items }
    }
}

fn strip_plain_quotes(item: BulletItem) -> BulletItem {
    item.into_iter()
        .map(|seg| match seg {
            Segment::Plain(s) => Segment::Plain(s.replace('"', "")),
            emphasized => emphasized,
        })
        .collect()
}

/// Everything the result view needs, derived once per analysis.
#[derive(Debug, Clone)]
pub struct DiseaseReport {
    pub predicted_class: String,
    pub confidence: ConfidenceDisplay,
    /// Symptoms, causes, prevention, treatment — in display order.
    pub panels: Vec<AdvicePanel>,
}

impl DiseaseReport {
    pub fn from_result(result: &AnalysisResult, strip_quotes: bool) -> Self {
        let advice = &result.chatbot_answer;
        let fields: [(&'static str, &str); 4] = [
            ("Symptoms", &advice.symptoms),
            ("Causes", &advice.causes),
            ("Prevention", &advice.prevention),
            ("Treatment", &advice.treatment),
        ];
        Self {
            predicted_class: result.predicted_class.clone(),
            confidence: confidence::present(result.confidence),
            panels: fields
                .into_iter()
                .map(|(title, raw)| AdvicePanel::from_field(title, raw, strip_quotes))
                .collect(),
        }
    }
}

/// Canonical export: the result serialized with stable field order
/// (declaration order of the wire types) and 2-space indentation. The
/// record shape is fixed, so serialization cannot fail at runtime.
pub fn export_json(result: &AnalysisResult) -> String {
    serde_json::to_string_pretty(result).expect("fixed record shape serializes")
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Derive the export filename: runs of whitespace in the predicted class
/// become single underscores, then the fixed suffix is appended.
pub fn export_filename(predicted_class: &str) -> String {
    format!(
        "{}{}",
        whitespace_runs().replace_all(predicted_class, "_"),
        EXPORT_SUFFIX
    )
}

/// Write the export JSON into `dir` and return the full path.
pub fn save_report_to(dir: &Path, result: &AnalysisResult) -> io::Result<PathBuf> {
    let path = dir.join(export_filename(&result.predicted_class));
    std::fs::write(&path, export_json(result))?;
    Ok(path)
}

/// Write the export JSON to the user's download directory, falling back
/// to the current directory when no download directory is known.
pub fn save_report(result: &AnalysisResult) -> io::Result<PathBuf> {
    let dir = directories::UserDirs::new()
        .and_then(|d| d.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    save_report_to(&dir, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::confidence::ConfidenceBucket;
    use crate::core::model::AdviceRecord;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            predicted_class: "Leaf  Blight".to_string(),
            confidence: 0.87,
            chatbot_answer: AdviceRecord {
                symptoms: "Here are the symptoms:\n* \"Brown\" **lesions**\n* Wilting".to_string(),
                causes: "* Fungal spores".to_string(),
                prevention: String::new(),
                treatment: "* Apply **copper** fungicide".to_string(),
            },
        }
    }

    #[test]
    fn report_builds_four_panels_in_order() {
        let report = DiseaseReport::from_result(&sample_result(), true);
        let titles: Vec<_> = report.panels.iter().map(|p| p.title).collect();
        assert_eq!(titles, ["Symptoms", "Causes", "Prevention", "Treatment"]);
    }

    #[test]
    fn empty_field_yields_zero_items() {
        let report = DiseaseReport::from_result(&sample_result(), true);
        assert!(report.panels[2].items.is_empty());
    }

    #[test]
    fn quotes_stripped_from_plain_segments_only() {
        let raw = "* \"quoted\" and **\"bold quoted\"**";
        let panel = AdvicePanel::from_field("Symptoms", raw, true);
        assert_eq!(
            panel.items[0],
            vec![
                Segment::Plain("quoted and ".to_string()),
                Segment::Emphasized("\"bold quoted\"".to_string()),
            ]
        );
    }

    #[test]
    fn quote_stripping_can_be_disabled() {
        let panel = AdvicePanel::from_field("Symptoms", "* \"kept\"", false);
        assert_eq!(panel.items[0], vec![Segment::Plain("\"kept\"".to_string())]);
    }

    #[test]
    fn confidence_presented_with_report() {
        let report = DiseaseReport::from_result(&sample_result(), true);
        assert_eq!(report.confidence.percentage, 87);
        assert_eq!(report.confidence.bucket, ConfidenceBucket::High);
    }

    #[test]
    fn export_round_trips() {
        let result = sample_result();
        let json = export_json(&result);
        let parsed: AnalysisResult = serde_json::from_str(&json).expect("export parses back");
        assert_eq!(parsed, result);
    }

    #[test]
    fn export_uses_two_space_indent_and_stable_order() {
        let json = export_json(&sample_result());
        assert!(json.starts_with("{\n  \"predicted_class\""));
        let confidence_pos = json.find("\"confidence\"").unwrap();
        let answer_pos = json.find("\"chatbot_answer\"").unwrap();
        assert!(confidence_pos < answer_pos);
    }

    #[test]
    fn filename_collapses_whitespace_runs() {
        assert_eq!(export_filename("Leaf  Blight"), "Leaf_Blight_analysis.json");
        assert_eq!(export_filename("rust"), "rust_analysis.json");
    }

    #[test]
    fn save_report_writes_utf8_json() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let result = sample_result();
        let path = save_report_to(tmp.path(), &result).expect("save succeeds");
        assert!(path.ends_with("Leaf_Blight_analysis.json"));
        let written = std::fs::read_to_string(&path).expect("file readable");
        assert_eq!(written, export_json(&result));
    }
}
