use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ConfigurationError, MIN_CHOICES};

/// Integer identifier of a selectable option within a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(pub u32);

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ChoiceId {
    fn from(id: u32) -> Self {
        ChoiceId(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultipleChoiceConfig {
    pub min_selections: u32,
    pub max_selections: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollMode {
    RankedWeighted,
    SingleChoice,
    MultipleChoice(MultipleChoiceConfig),
}

impl PollMode {
    pub fn name(&self) -> &'static str {
        match self {
            PollMode::RankedWeighted => "RankedWeighted",
            PollMode::SingleChoice => "SingleChoice",
            PollMode::MultipleChoice(_) => "MultipleChoice",
        }
    }
}

/// A validated poll: at least two choices and exactly one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PollDefinitionRecord", into = "PollDefinitionRecord")]
pub struct PollDefinition {
    choices: BTreeMap<ChoiceId, String>,
    mode: PollMode,
}

impl PollDefinition {
    pub fn new<I, L>(choices: I, mode: PollMode) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (ChoiceId, L)>,
        L: Into<String>,
    {
        let choices: BTreeMap<ChoiceId, String> = choices
            .into_iter()
            .map(|(id, label)| (id, label.into()))
            .collect();

        if choices.len() < MIN_CHOICES {
            return Err(ConfigurationError::TooFewChoices { found: choices.len() });
        }

        if let PollMode::MultipleChoice(config) = mode {
            if config.min_selections > config.max_selections {
                return Err(ConfigurationError::InvalidSelectionRange {
                    min: config.min_selections,
                    max: config.max_selections,
                });
            }
        }

        Ok(Self { choices, mode })
    }

    pub fn choices(&self) -> &BTreeMap<ChoiceId, String> {
        &self.choices
    }

    pub fn mode(&self) -> PollMode {
        self.mode
    }

    pub fn has_choice(&self, choice: ChoiceId) -> bool {
        self.choices.contains_key(&choice)
    }

    // Falls back to the raw id for choices the poll does not know.
    pub fn label(&self, choice: ChoiceId) -> String {
        self.choices
            .get(&choice)
            .cloned()
            .unwrap_or_else(|| format!("Unknown Option {}", choice))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWeightedConfig {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleChoiceConfig {}

/// Persisted shape of a poll definition, where the mode is whichever
/// config object is populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PollDefinitionRecord {
    pub choices: BTreeMap<ChoiceId, String>,
    #[serde(default)]
    pub ranked_weighted: Option<RankedWeightedConfig>,
    #[serde(default)]
    pub single_choice: Option<SingleChoiceConfig>,
    #[serde(default)]
    pub multiple_choice: Option<MultipleChoiceConfig>,
}

impl TryFrom<PollDefinitionRecord> for PollDefinition {
    type Error = ConfigurationError;

    fn try_from(record: PollDefinitionRecord) -> Result<Self, Self::Error> {
        let mut modes = Vec::new();
        if record.ranked_weighted.is_some() {
            modes.push(PollMode::RankedWeighted);
        }
        if record.single_choice.is_some() {
            modes.push(PollMode::SingleChoice);
        }
        if let Some(config) = record.multiple_choice {
            modes.push(PollMode::MultipleChoice(config));
        }

        let mode = match modes.as_slice() {
            [] => return Err(ConfigurationError::NoModeConfigured),
            [mode] => *mode,
            _ => {
                return Err(ConfigurationError::MultipleModesConfigured {
                    modes: modes.iter().map(PollMode::name).collect(),
                });
            }
        };

        PollDefinition::new(record.choices, mode)
    }
}

impl From<PollDefinition> for PollDefinitionRecord {
    fn from(definition: PollDefinition) -> Self {
        let mut record = PollDefinitionRecord {
            choices: definition.choices,
            ..Default::default()
        };
        match definition.mode {
            PollMode::RankedWeighted => record.ranked_weighted = Some(RankedWeightedConfig {}),
            PollMode::SingleChoice => record.single_choice = Some(SingleChoiceConfig {}),
            PollMode::MultipleChoice(config) => record.multiple_choice = Some(config),
        }
        record
    }
}

fn default_voting_power() -> f64 {
    1.0
}

/// One cast ballot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vote {
    #[serde(default = "default_voting_power")]
    pub voting_power: f64,
    #[serde(default)]
    pub is_tiebreaker: bool,
    #[serde(default)]
    pub selected_options: Vec<ChoiceId>,
}

impl Vote {
    pub fn new<I>(selected_options: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self {
            voting_power: default_voting_power(),
            is_tiebreaker: false,
            selected_options: selected_options.into_iter().map(ChoiceId).collect(),
        }
    }

    pub fn with_power(mut self, voting_power: f64) -> Self {
        self.voting_power = voting_power;
        self
    }

    pub fn tiebreaker(mut self) -> Self {
        self.is_tiebreaker = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChoiceScore {
    pub choice_id: ChoiceId,
    pub score: f64,
}

/// Outcome of one tally. Produced fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PollResult {
    pub results: Vec<ChoiceScore>,
    pub total_votes: f64,
    pub tiebreak_in_favour_of: Option<ChoiceId>,
}

impl PollResult {
    /// Choices sharing the top score, in ascending id order.
    pub fn top_group(&self) -> Vec<ChoiceId> {
        let Some(first) = self.results.first() else {
            return Vec::new();
        };
        self.results
            .iter()
            .take_while(|entry| entry.score == first.score)
            .map(|entry| entry.choice_id)
            .collect()
    }

    pub fn is_tied(&self) -> bool {
        self.top_group().len() > 1
    }

    /// The tiebreak winner if one was resolved, otherwise the sole top choice.
    pub fn winner(&self) -> Option<ChoiceId> {
        if self.tiebreak_in_favour_of.is_some() {
            return self.tiebreak_in_favour_of;
        }
        match self.top_group().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn score_of(&self, choice: ChoiceId) -> Option<f64> {
        self.results
            .iter()
            .find(|entry| entry.choice_id == choice)
            .map(|entry| entry.score)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Human-readable results, winner in bold.
    pub fn summary(&self, definition: &PollDefinition) -> String {
        let winner = self.winner();
        let mut summary = String::new();

        for entry in &self.results {
            let option_name = definition.label(entry.choice_id);
            let percentage = if self.total_votes > 0.0 {
                entry.score * 100.0 / self.total_votes
            } else {
                0.0
            };

            let line = if Some(entry.choice_id) == winner {
                format!("**{}**: {:.2} votes ({:.1}%)", option_name, entry.score, percentage)
            } else {
                format!("{}: {:.2} votes ({:.1}%)", option_name, entry.score, percentage)
            };

            summary.push_str(&line);
            summary.push('\n');
        }

        match (winner, self.tiebreak_in_favour_of) {
            (Some(_), Some(choice)) => summary.push_str(&format!(
                "\nTie at the top broken in favour of {}.",
                definition.label(choice)
            )),
            (None, _) => {
                let tied: Vec<String> = self
                    .top_group()
                    .into_iter()
                    .map(|choice| definition.label(choice))
                    .collect();
                summary.push_str(&format!("\nUnresolved tie between {}.", tied.join(", ")));
            }
            _ => {}
        }

        summary.push_str(&format!("\n{:.2} total weighted votes.", self.total_votes));
        summary
    }
}
