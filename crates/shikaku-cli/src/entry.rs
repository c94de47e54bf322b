use serde::{Deserialize, Serialize};
use shikaku_core::LevelDto;
use shikaku_generator::GeneratedLevel;

/// One element of the JSON array read and written by the tool.
///
/// The level fields sit at the top level of the object. Generation metadata is
/// optional, so plain level objects are accepted as input.
///
/// # Examples
///
/// ```
/// use shikaku_cli::LevelEntry;
///
/// let json = r#"{"gridRows":2,"gridCols":2,"difficulty":1,"clues":[{"row":0,"col":0,"value":4}]}"#;
/// let entry: LevelEntry = serde_json::from_str(json)?;
/// assert_eq!(entry.level.grid_rows, 2);
/// assert_eq!(entry.seed, None);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEntry {
    /// The level itself.
    #[serde(flatten)]
    pub level: LevelDto,
    /// Seed the level was generated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    /// Whether the level came from a regular tiling or the fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Share code of the level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<&GeneratedLevel> for LevelEntry {
    fn from(generated: &GeneratedLevel) -> Self {
        Self {
            level: LevelDto::from(&generated.level),
            seed: Some(generated.seed.to_string()),
            source: Some(generated.source.to_string()),
            code: Some(generated.level.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use shikaku_core::Difficulty;
    use shikaku_generator::{LevelGenerator, LevelSeed};

    use super::*;

    #[test]
    fn test_generated_entry_json() {
        let seed = LevelSeed::from([0; 32]);
        let generated = LevelGenerator::new().generate_with_seed(Difficulty::D1, seed);
        let entry = LevelEntry::from(&generated);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["gridRows"], generated.level.size().rows());
        assert_eq!(json["difficulty"], 1);
        assert_eq!(json["seed"], "0".repeat(64));
        assert_eq!(json["source"], "tiled");
        assert_eq!(json["code"], generated.level.to_string());

        let back: LevelEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
