use crate::writing9::{EssayDraft, EssayRecord};
use crate::CrawlerError;
use std::fs;
use std::path::{Path, PathBuf};

/// The accumulated output collection plus its on-disk location. The file is
/// re-written after every accepted record so an interrupted crawl keeps what
/// it has gathered so far.
pub struct EssayDump {
    path: PathBuf,
    records: Vec<EssayRecord>,
}

impl EssayDump {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EssayDump {
            path: path.into(),
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[EssayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validates the draft and, when it passes, appends a record with the
    /// next sequential id and persists the dump. Returns whether the draft
    /// was kept.
    pub fn append(&mut self, draft: EssayDraft, min_body_len: usize) -> Result<bool, CrawlerError> {
        if draft.question.is_empty() || draft.body.chars().count() <= min_body_len {
            return Ok(false);
        }
        let record = EssayRecord::build(self.records.len() + 1, draft);
        self.records.push(record);
        self.persist()?;
        Ok(true)
    }

    pub fn persist(&self) -> Result<(), CrawlerError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_dump(test: &str) -> EssayDump {
        let path = std::env::temp_dir()
            .join("writing9-crawler-tests")
            .join(format!("{}-{}.json", test, std::process::id()));
        EssayDump::new(path)
    }

    fn draft(question: &str, body_len: usize) -> EssayDraft {
        EssayDraft {
            question: question.to_string(),
            body: "x".repeat(body_len),
        }
    }

    #[test]
    fn test_append_rejects_short_body() {
        let mut dump = temp_dump("reject-short");
        assert!(!dump.append(draft("Q", 0), 200).unwrap());
        assert!(!dump.append(draft("Q", 200), 200).unwrap());
        assert!(dump.is_empty());
    }

    #[test]
    fn test_append_rejects_empty_question() {
        let mut dump = temp_dump("reject-empty-question");
        assert!(!dump.append(draft("", 300), 200).unwrap());
        assert!(dump.is_empty());
    }

    #[test]
    fn test_append_accepts_body_over_threshold() {
        let mut dump = temp_dump("accept");
        assert!(dump.append(draft("Q", 201), 200).unwrap());
        assert_eq!(dump.len(), 1);
        assert_eq!(dump.records()[0].id, "1");
    }

    #[test]
    fn test_ids_are_contiguous_in_insertion_order() {
        let mut dump = temp_dump("contiguous-ids");
        for i in 0..5 {
            assert!(dump.append(draft(&format!("Q{}", i), 300), 200).unwrap());
        }
        let ids: Vec<&str> = dump.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_dump_round_trips_through_json() {
        let mut dump = temp_dump("round-trip");
        dump.append(draft("Birinchi savol — ўзбекча белгилар", 250), 200)
            .unwrap();
        dump.append(draft("Second question", 300), 200).unwrap();

        let raw = fs::read_to_string(dump.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        for (i, entry) in array.iter().enumerate() {
            let obj = entry.as_object().unwrap();
            let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
            keys.sort_unstable();
            assert_eq!(
                keys,
                vec!["category", "id", "modelAnswer", "questionText", "tips", "title"]
            );
            assert_eq!(obj["id"], (i + 1).to_string());
            assert_eq!(entry["tips"], array[0]["tips"]);
        }
        // Non-ASCII survives literally rather than as \u escapes
        assert!(raw.contains("ўзбекча"));

        let parsed: Vec<EssayRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.as_slice(), dump.records());
    }

    #[test]
    fn test_persist_overwrites_previous_file() {
        let mut dump = temp_dump("overwrite");
        dump.append(draft("Q1", 300), 200).unwrap();
        dump.append(draft("Q2", 300), 200).unwrap();

        let fresh: Vec<EssayRecord> =
            serde_json::from_str(&fs::read_to_string(dump.path()).unwrap()).unwrap();
        assert_eq!(fresh.len(), 2);
    }
}
