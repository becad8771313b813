use std::{collections::HashMap, path::PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use console::{Term, style};
use rand::{SeedableRng, rngs::StdRng};
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use studykit_core::{
    Flashcard, QuizQuestion, StudyConfig, StudySet, build_study_set, format_flashcard_readable,
    format_flashcards_readable, format_json, format_quiz_readable, format_score,
    format_study_set_readable, format_summary_readable, load_config, load_default_config,
    load_transcript, pick_random_card, score_quiz,
};

#[derive(Clone, Copy, Default, ValueEnum)]
enum Section {
    #[default]
    All,
    Summary,
    Flashcards,
    Quiz,
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Readable,
    Json,
}

#[derive(Parser)]
#[command(name = "studykit")]
#[command(about = "Turn a transcript into a summary, flashcards and a quiz")]
struct Cli {
    /// Transcript file. Reads stdin when omitted or "-".
    input: Option<PathBuf>,

    /// Which artifact to print
    #[arg(short, long, default_value = "all")]
    section: Section,

    /// Output format
    #[arg(short, long, default_value = "readable")]
    format: OutputFormat,

    /// Maximum number of flashcards (overrides the config file)
    #[arg(short, long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Seed for quiz sampling (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Config file. Defaults to <config dir>/studykit/config.json when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Take the quiz on the terminal and print the score.
    /// Cannot be combined with --section, --format or --random.
    #[arg(short, long, conflicts_with_all = ["section", "format", "random"])]
    interactive: bool,

    /// Print one flashcard picked at random (seeded like the quiz)
    #[arg(short, long, conflicts_with = "section")]
    random: bool,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

async fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(load_transcript(path).await?),
        _ => {
            let mut transcript = String::new();
            tokio::io::stdin().read_to_string(&mut transcript).await?;
            Ok(transcript)
        }
    }
}

fn reads_stdin(input: Option<&PathBuf>) -> bool {
    input.is_none_or(|p| p.as_os_str() == "-")
}

/// Map a 1-based choice number typed by the user to the choice text
fn parse_selection<'a>(line: &str, choices: &'a [String]) -> Option<&'a String> {
    let n: usize = line.trim().parse().ok()?;
    choices.get(n.checked_sub(1)?)
}

fn run_interactive_quiz(quiz: &[QuizQuestion]) -> Result<()> {
    if quiz.is_empty() {
        println!("{}", style(studykit_core::format::EMPTY_QUIZ_HINT).dim());
        return Ok(());
    }

    let term = Term::stdout();
    let mut selections = HashMap::new();

    for (i, question) in quiz.iter().enumerate() {
        println!(
            "\n{} {}",
            style(format!("{}.", i + 1)).cyan().bold(),
            question.prompt
        );
        for (n, choice) in question.choices.iter().enumerate() {
            println!("   {} {}", style(format!("[{}]", n + 1)).dim(), choice);
        }
        term.write_str(&format!("{} ", style("Your answer:").dim()))?;
        let line = term.read_line()?;

        match parse_selection(&line, &question.choices) {
            Some(choice) => {
                selections.insert(question.id.clone(), choice.clone());
            }
            None => println!("{}", style("Skipped").yellow()),
        }
    }

    let score = score_quiz(quiz, &selections);
    println!("\n{}", style(format_score(&score)).green().bold());

    for question in quiz {
        let chosen = selections.get(&question.id);
        if chosen != Some(&question.answer) {
            println!(
                "{} {} {}",
                style("✗").red().bold(),
                style(&question.id).dim(),
                question.answer
            );
        }
    }

    Ok(())
}

fn render_random_card(
    cards: &[Flashcard],
    index: Option<usize>,
    format: OutputFormat,
) -> Result<String> {
    let card = index.and_then(|i| cards.get(i).map(|card| (i, card)));
    let output = match (format, card) {
        (OutputFormat::Json, card) => format_json(&card.map(|(_, card)| card))?,
        (OutputFormat::Readable, Some((i, card))) => {
            format_flashcard_readable(card, i + 1, cards.len())
        }
        (OutputFormat::Readable, None) => format_flashcards_readable(&[]),
    };
    Ok(output)
}

fn render(set: &StudySet, section: Section, format: OutputFormat) -> Result<String> {
    let output = match (format, section) {
        (OutputFormat::Json, Section::All) => format_json(set)?,
        (OutputFormat::Json, Section::Summary) => format_json(&set.summary)?,
        (OutputFormat::Json, Section::Flashcards) => format_json(&set.flashcards)?,
        (OutputFormat::Json, Section::Quiz) => format_json(&set.quiz)?,
        (OutputFormat::Readable, Section::All) => format_study_set_readable(set),
        (OutputFormat::Readable, Section::Summary) => format_summary_readable(&set.summary),
        (OutputFormat::Readable, Section::Flashcards) => {
            format_flashcards_readable(&set.flashcards)
        }
        (OutputFormat::Readable, Section::Quiz) => format_quiz_readable(&set.quiz),
    };
    Ok(output)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    if cli.interactive && reads_stdin(cli.input.as_ref()) {
        bail!("--interactive needs a transcript file, stdin is used for answers");
    }

    let mut config: StudyConfig = match &cli.config {
        Some(path) => load_config(path).await?,
        None => load_default_config().await?,
    };
    if let Some(limit) = cli.limit {
        config.flashcard_limit = limit;
    }
    if let Some(seed) = cli.seed {
        config.quiz_seed = Some(seed);
    }

    let transcript = read_input(cli.input.as_ref()).await?;
    info!(chars = transcript.chars().count(), "transcript.loaded");

    let mut rng = match config.quiz_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let set = match build_study_set(&transcript, &config, &mut rng) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    if set.is_empty() {
        eprintln!(
            "{} {}",
            style("Note:").yellow().bold(),
            style("the transcript is empty, nothing to study yet").dim()
        );
    }

    if cli.random {
        let index = pick_random_card(&set.flashcards, &mut rng);
        println!("{}", render_random_card(&set.flashcards, index, cli.format)?);
        return Ok(());
    }

    if cli.interactive {
        println!(
            "\n{}  {}",
            style("studykit").cyan().bold(),
            style("Quiz").dim()
        );
        return run_interactive_quiz(&set.quiz);
    }

    println!("{}", render(&set, cli.section, cli.format)?);

    Ok(())
}
