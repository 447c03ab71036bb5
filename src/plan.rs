// Workout plan model: the quote and exercise records decoded from the
// remote services, the plan that combines them, and its text rendering.

use crate::error::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// Upper bound on exercises kept in a plan.
pub const MAX_EXERCISES: usize = 5;

/// A motivational quote. The service calls the text field `quote`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub author: String,
    #[serde(rename = "quote")]
    pub text: String,
}

/// One exercise as returned by the exercises service. Extra fields in the
/// response (e.g. `type`) are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub muscle: String,
    pub equipment: String,
    pub difficulty: String,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub quote: Option<Quote>,
    pub exercises: Vec<Exercise>,
}

/// Pick one quote uniformly at random, or `None` if there are none.
pub fn pick_quote<R: Rng + ?Sized>(quotes: &[Quote], rng: &mut R) -> Option<Quote> {
    quotes.choose(rng).cloned()
}

/// Text form of a plan, see `WorkoutPlan::display`.
pub struct PlanText<'a> {
    plan: &'a WorkoutPlan,
    nickname: &'a str,
}

impl fmt::Display for PlanText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}, below is your personalised plan. We hope you enjoy your workout!",
            self.nickname
        )?;
        writeln!(f)?;
        if let Some(quote) = &self.plan.quote {
            writeln!(
                f,
                "To keep you motivated, here is a quote by {}: {}",
                quote.author, quote.text
            )?;
            writeln!(f)?;
        }
        // Five labelled lines per exercise, then a blank separator.
        for exercise in &self.plan.exercises {
            writeln!(f, "Exercise: {}", exercise.name)?;
            writeln!(f, "Muscle: {}", exercise.muscle)?;
            writeln!(f, "Equipment: {}", exercise.equipment)?;
            writeln!(f, "Difficulty: {}", exercise.difficulty)?;
            writeln!(f, "Instructions: {}", exercise.instructions)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl WorkoutPlan {
    /// Combine an optional quote with the exercises, keeping at most
    /// `MAX_EXERCISES` of them in their original order.
    pub fn new(quote: Option<Quote>, mut exercises: Vec<Exercise>) -> Self {
        exercises.truncate(MAX_EXERCISES);
        if exercises.is_empty() {
            warn!("workout plan has no exercises");
        }
        WorkoutPlan { quote, exercises }
    }

    /// The plan as plain text, greeting the user by `nickname`.
    pub fn display<'a>(&'a self, nickname: &'a str) -> PlanText<'a> {
        PlanText {
            plan: self,
            nickname,
        }
    }

    /// Write the plan text to any byte sink.
    pub fn write_to<W: Write>(&self, out: &mut W, nickname: &str) -> std::io::Result<()> {
        write!(out, "{}", self.display(nickname))
    }

    pub fn render(&self, nickname: &str) -> String {
        self.display(nickname).to_string()
    }

    /// Create or truncate `path` and write the plan into it. The file handle
    /// is dropped when this returns, whether or not the write succeeded.
    pub fn save(&self, path: &Path, nickname: &str) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out, nickname)?;
        out.flush()?;
        info!(path = %path.display(), exercises = self.exercises.len(), "workout plan saved");
        Ok(())
    }
}
