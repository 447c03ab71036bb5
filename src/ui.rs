// UI layer: the three `dialoguer` prompts and the single forward pass
// from answers to a saved workout plan.

use crate::api::WorkoutApi;
use crate::config::Config;
use crate::input;
use crate::plan::{pick_quote, WorkoutPlan};
use anyhow::{bail, Context, Result};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;
use tracing::debug;

/// Normalised answers to the console prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub nickname: String,
    pub fitness_level: String,
    pub include_quote: bool,
}

const NAME_PROMPT: &str = "Welcome to your motivational workout app! To get a personalised \
     workout, please start by telling us your name";

const QUOTE_PROMPT: &str = "Would you like some extra encouragement with a motivational quote \
     in your workout plan (y / n)?";

fn level_prompt(nickname: &str) -> String {
    format!(
        "It's great to meet you, {}, (we like nicknames around here)! To make sure the \
         plan we create is right for you, please tell us your fitness level \
         (beginner, intermediate, expert)",
        nickname
    )
}

/// Ask for name, fitness level and quote opt-in, in that order, through
/// `ask`, and normalise the raw answers. Empty answers are accepted as-is.
fn ask_all<F>(mut ask: F) -> Result<Answers>
where
    F: FnMut(&str) -> Result<String>,
{
    let name = ask(NAME_PROMPT)?;
    // The nickname is needed to phrase the next question.
    let nickname = input::nickname(&name);
    let prompt = level_prompt(&nickname);
    let level = ask(prompt.as_str())?;
    let quote = ask(QUOTE_PROMPT)?;

    Ok(Answers {
        nickname,
        fitness_level: input::fitness_level(&level),
        include_quote: input::wants_quote(&quote),
    })
}

/// Prompt on the terminal, or read the answers from stdin when it is not
/// one (dialoguer gives back empty strings instead of reading a pipe).
pub fn collect_answers() -> Result<Answers> {
    if io::stdin().is_terminal() {
        // `Input::interact_text()` prompts the user and returns the line.
        ask_all(|prompt| {
            let answer: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            Ok(answer)
        })
    } else {
        debug!("stdin is not a terminal, reading answers line by line");
        let stdin = io::stdin();
        read_answers(stdin.lock(), io::stdout())
    }
}

/// Answer the prompts from `input`, one line each, echoing the prompts to
/// `out`. Running out of input before the last question is an error.
pub fn read_answers<R: BufRead, W: Write>(mut input: R, mut out: W) -> Result<Answers> {
    ask_all(|prompt| {
        write!(out, "{}: ", prompt)?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input ended before this question was answered: {}", prompt);
        }
        writeln!(out)?;
        Ok(line)
    })
}

/// Fetch the optional quote and the exercises and combine them.
pub fn build_plan<A, R>(api: &A, answers: &Answers, rng: &mut R) -> Result<WorkoutPlan>
where
    A: WorkoutApi + ?Sized,
    R: Rng + ?Sized,
{
    let quote = if answers.include_quote {
        // show spinner while the quotes service answers
        let pb = spinner("Finding you a quote...")?;
        let quotes = api.fetch_quotes().context("Fetching motivational quotes");
        pb.finish_and_clear();
        // An empty collection simply means no quote in the plan.
        pick_quote(&quotes?, rng)
    } else {
        debug!("quote not requested");
        None
    };

    let pb = spinner("Picking your exercises...")?;
    let exercises = api
        .fetch_exercises(&answers.fitness_level)
        .with_context(|| format!("Fetching {} exercises", answers.fitness_level));
    pb.finish_and_clear();

    Ok(WorkoutPlan::new(quote, exercises?))
}

/// The whole program after configuration: prompt, fetch, save, confirm.
pub fn run<A: WorkoutApi + ?Sized>(api: &A, config: &Config) -> Result<()> {
    let answers = collect_answers()?;
    let plan = build_plan(api, &answers, &mut rand::thread_rng())?;
    plan.save(&config.output_path, &answers.nickname)
        .with_context(|| format!("Saving plan to {}", config.output_path.display()))?;
    println!(
        "Your motivational workout has been saved to '{}'",
        config.output_path.display()
    );
    Ok(())
}

fn spinner(message: &'static str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}
