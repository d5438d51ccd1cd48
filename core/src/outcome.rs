use serde::{Deserialize, Serialize};

use crate::*;

/// What is printed under the foil. Decided once per session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "あたり！",
            Self::Lose => "ハズレ",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Win => "green",
            Self::Lose => "red",
        }
    }

    /// Parses the body of the result endpoint, `{"result": "win" | "lose"}`.
    pub fn from_body(body: &str) -> core::result::Result<Self, AcquireError> {
        let response: ResultResponse = serde_json::from_str(body)?;
        Ok(response.result)
    }

    /// Uniform coin flip, reproducible for a given seed.
    pub fn random_from_seed(seed: u64) -> Self {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(seed);
        if rng.random_bool(0.5) {
            Self::Win
        } else {
            Self::Lose
        }
    }
}

/// Wire shape of the result endpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultResponse {
    pub result: Outcome,
}

/// Takes the fetched outcome, or a random one when fetching failed.
pub fn resolve_outcome(
    fetched: core::result::Result<Outcome, AcquireError>,
    fallback_seed: u64,
) -> Outcome {
    match fetched {
        Ok(outcome) => {
            log::info!("outcome from endpoint: {:?}", outcome);
            outcome
        }
        Err(err) => {
            let outcome = Outcome::random_from_seed(fallback_seed);
            log::warn!("could not fetch outcome ({}), using random {:?}", err, outcome);
            outcome
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_results() {
        assert_eq!(Outcome::from_body(r#"{"result":"win"}"#).unwrap(), Outcome::Win);
        assert_eq!(
            Outcome::from_body(r#"{ "result": "lose", "extra": 1 }"#).unwrap(),
            Outcome::Lose
        );
    }

    #[test]
    fn rejects_malformed_bodies() {
        let bodies = [
            "",
            "not json",
            r#"{"result":"draw"}"#,
            r#"{"outcome":"win"}"#,
            r#"{"result":"WIN"}"#,
        ];
        for body in bodies {
            assert!(matches!(
                Outcome::from_body(body),
                Err(AcquireError::Malformed(_))
            ));
        }
    }

    #[test]
    fn labels_and_colors() {
        assert_eq!(Outcome::Win.label(), "あたり！");
        assert_eq!(Outcome::Win.color(), "green");
        assert_eq!(Outcome::Lose.label(), "ハズレ");
        assert_eq!(Outcome::Lose.color(), "red");
    }

    #[test]
    fn resolve_prefers_fetched_outcome() {
        for seed in 0..32 {
            assert_eq!(resolve_outcome(Ok(Outcome::Lose), seed), Outcome::Lose);
            assert_eq!(resolve_outcome(Ok(Outcome::Win), seed), Outcome::Win);
        }
    }

    #[test]
    fn fallback_is_deterministic_per_seed() {
        let err = || Err(AcquireError::Status(500));

        assert_eq!(resolve_outcome(err(), 7), Outcome::random_from_seed(7));
        assert_eq!(
            resolve_outcome(Err(AcquireError::Transport("offline".into())), 7),
            Outcome::random_from_seed(7)
        );
    }

    #[test]
    fn fallback_is_roughly_even() {
        let wins = (0..2000u64)
            .filter(|&seed| Outcome::random_from_seed(seed) == Outcome::Win)
            .count();

        assert!((800..=1200).contains(&wins), "wins: {}", wins);
    }
}
