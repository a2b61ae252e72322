use crate::{Labels, MatchAction};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(tag = "type")]
pub enum SecondaryValidator {
    /// Any NRIC or FIN
    #[default]
    SingaporeNricChecksum,
    SingaporeUinChecksum,
    SingaporeFinChecksum,
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RuleConfig {
    #[serde(default)]
    pub validator: SecondaryValidator,
    #[serde(default)]
    pub match_action: MatchAction,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl RuleConfig {
    pub fn new(validator: SecondaryValidator) -> Self {
        Self {
            validator,
            match_action: MatchAction::None,
            labels: Labels::default(),
        }
    }

    pub fn validator(&self, validator: SecondaryValidator) -> Self {
        self.mutate_clone(|x| x.validator = validator)
    }

    pub fn match_action(&self, match_action: MatchAction) -> Self {
        self.mutate_clone(|x| x.match_action = match_action)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
