//! Gesture script: a tiny language for driving the deck without a screen.
//!
//! `drag:150 nudge:30 key:left like pass wait:100`

use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use swipe_core::domain::{InputEvent, Key};

/// Where drags start; any point works, only the delta matters.
const GRAB: (f64, f64) = (200.0, 300.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Drag { dx: f64, dy: f64 },
    Key(Key),
    Like,
    Pass,
    Wait(u64),
}

/// How the CLI should feed a gesture to the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Inputs(Vec<InputEvent>),
    Like,
    Pass,
    Wait(u64),
}

impl Gesture {
    pub fn step(&self) -> Step {
        match *self {
            Gesture::Drag { dx, dy } => {
                let (x, y) = GRAB;
                Step::Inputs(vec![
                    InputEvent::down(x, y),
                    InputEvent::drag_to(x + dx, y + dy),
                    InputEvent::up(),
                ])
            }
            Gesture::Key(key) => Step::Inputs(vec![InputEvent::key(key)]),
            Gesture::Like => Step::Like,
            Gesture::Pass => Step::Pass,
            Gesture::Wait(ms) => Step::Wait(ms),
        }
    }
}

impl FromStr for Gesture {
    type Err = anyhow::Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (verb, arg) = match token.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (token, None),
        };
        let need_arg = || arg.ok_or_else(|| anyhow!("'{verb}' needs an argument"));

        match verb {
            "drag" | "nudge" => {
                let raw = need_arg()?;
                let (dx, dy) = match raw.split_once(',') {
                    Some((dx, dy)) => (dx, dy),
                    None => (raw, "0"),
                };
                Ok(Gesture::Drag {
                    dx: dx.parse().with_context(|| format!("bad dx in '{token}'"))?,
                    dy: dy.parse().with_context(|| format!("bad dy in '{token}'"))?,
                })
            }
            "key" => match need_arg()? {
                "left" => Ok(Gesture::Key(Key::ArrowLeft)),
                "right" => Ok(Gesture::Key(Key::ArrowRight)),
                other => bail!("unknown key '{other}'"),
            },
            "like" => Ok(Gesture::Like),
            "pass" => Ok(Gesture::Pass),
            "wait" => Ok(Gesture::Wait(
                need_arg()?
                    .parse()
                    .with_context(|| format!("bad duration in '{token}'"))?,
            )),
            _ => bail!("unknown gesture '{token}'"),
        }
    }
}

/// Whitespace or `;` separated.
pub fn parse_script(script: &str) -> anyhow::Result<Vec<Gesture>> {
    script
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("drag:150", Gesture::Drag { dx: 150.0, dy: 0.0 })]
    #[case("drag:-130,25", Gesture::Drag { dx: -130.0, dy: 25.0 })]
    #[case("nudge:60", Gesture::Drag { dx: 60.0, dy: 0.0 })]
    #[case("key:left", Gesture::Key(Key::ArrowLeft))]
    #[case("key:right", Gesture::Key(Key::ArrowRight))]
    #[case("like", Gesture::Like)]
    #[case("pass", Gesture::Pass)]
    #[case("wait:250", Gesture::Wait(250))]
    fn parses_tokens(#[case] token: &str, #[case] expected: Gesture) {
        assert_eq!(token.parse::<Gesture>().unwrap(), expected);
    }

    #[rstest]
    #[case("drag")]
    #[case("drag:far")]
    #[case("key:up")]
    #[case("jump")]
    #[case("wait:-1")]
    fn rejects_bad_tokens(#[case] token: &str) {
        assert!(token.parse::<Gesture>().is_err());
    }

    #[test]
    fn script_splits_on_whitespace_and_semicolons() {
        let gestures = parse_script("drag:150; pass\n  key:left").unwrap();
        assert_eq!(
            gestures,
            vec![
                Gesture::Drag { dx: 150.0, dy: 0.0 },
                Gesture::Pass,
                Gesture::Key(Key::ArrowLeft),
            ]
        );
    }

    #[test]
    fn drag_becomes_press_move_release() {
        let Step::Inputs(events) = (Gesture::Drag { dx: -50.0, dy: 10.0 }).step() else {
            panic!("drag should produce inputs");
        };
        assert_eq!(
            events,
            vec![
                InputEvent::down(200.0, 300.0),
                InputEvent::drag_to(150.0, 310.0),
                InputEvent::up(),
            ]
        );
    }
}
