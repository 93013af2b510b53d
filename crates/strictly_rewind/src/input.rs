//! Input events forwarded by front ends.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player gesture, as the controller understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Input {
    /// Click the cell at this index.
    #[display("c{}", _0)]
    Click(usize),
    /// Click the move-list entry for this step.
    #[display("j{}", _0)]
    Jump(usize),
    /// Click the order toggle.
    #[display("t")]
    ToggleOrder,
}

/// Token that is not a valid [`Input`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input '{}' (expected N, cN, jN or t)", token)]
pub struct InputParseError {
    /// The offending token.
    pub token: String,
}

impl FromStr for Input {
    type Err = InputParseError;

    /// Parses `N`/`cN` (click), `jN` (jump) and `t` (toggle order).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let err = || InputParseError {
            token: s.to_string(),
        };

        if token == "t" {
            return Ok(Input::ToggleOrder);
        }
        if let Some(step) = token.strip_prefix('j') {
            return step.parse().map(Input::Jump).map_err(|_| err());
        }
        token
            .strip_prefix('c')
            .unwrap_or(&token)
            .parse()
            .map(Input::Click)
            .map_err(|_| err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("4".parse::<Input>(), Ok(Input::Click(4)));
        assert_eq!("c8".parse::<Input>(), Ok(Input::Click(8)));
        assert_eq!(" J2 ".parse::<Input>(), Ok(Input::Jump(2)));
        assert_eq!("t".parse::<Input>(), Ok(Input::ToggleOrder));
        assert!("toggle".parse::<Input>().is_err());
    }

    #[test]
    fn test_out_of_range_click_still_parses() {
        // The controller, not the parser, decides what is on the board.
        assert_eq!("12".parse::<Input>(), Ok(Input::Click(12)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "jump".parse::<Input>().unwrap_err();
        assert_eq!(err.token, "jump");
        assert!("x".parse::<Input>().is_err());
        assert!("-1".parse::<Input>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for input in [Input::Click(3), Input::Jump(0), Input::ToggleOrder] {
            assert_eq!(input.to_string().parse::<Input>(), Ok(input));
        }
    }
}
