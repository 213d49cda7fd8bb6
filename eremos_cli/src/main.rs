use clap::{Parser, Subcommand};
use eremos_core::*;
use std::path::PathBuf;

/// Shown when the day's examination pool is empty
const FALLBACK_QUESTION: &str = "Reflect on this moment.";

#[derive(Parser)]
#[command(name = "eremos")]
#[command(about = "Guided daily prayer and examination", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start today's session (default day: last completed + 1)
    Begin {
        /// Plan day override
        #[arg(long)]
        day: Option<u32>,
    },

    /// Show today's readings, prompts and benediction (default)
    Show,

    /// Save the answer for a wizard step
    Answer {
        /// Step id (meditation-1..3, examination-1..3, prayer-free)
        step: String,

        /// Answer text
        text: String,
    },

    /// Toggle a reading checklist item by its label
    Check {
        /// Chapter label, e.g. "Genesis 1"
        reference: String,
    },

    /// Record the affective state (1-10)
    Mood {
        value: u8,

        /// Optional note
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Advance to the next wizard step
    Next,

    /// Go back one wizard step
    Back,

    /// Mark today's session completed
    Complete,

    /// Export the current session as markdown
    Export {
        /// Output directory (default: <data_dir>/exports)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Roll completed sessions into the CSV archive
    Archive,
}

/// Resolved file locations for one invocation
struct Paths {
    journal: PathBuf,
    archive_csv: PathBuf,
    plan_csv: PathBuf,
    questions_csv: Option<PathBuf>,
    exports: PathBuf,
}

fn main() -> Result<()> {
    eremos_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let paths = Paths {
        journal: data_dir.join("journal.json"),
        archive_csv: data_dir.join("sessions.csv"),
        plan_csv: config.plan_path(&data_dir),
        questions_csv: config.sources.questions_csv.clone(),
        exports: data_dir.join("exports"),
    };

    match cli.command {
        Some(Commands::Begin { day }) => cmd_begin(&paths, day),
        Some(Commands::Show) | None => cmd_show(&paths),
        Some(Commands::Answer { step, text }) => cmd_answer(&paths, &step, &text),
        Some(Commands::Check { reference }) => cmd_check(&paths, &reference),
        Some(Commands::Mood { value, note }) => cmd_mood(&paths, value, &note),
        Some(Commands::Next) => cmd_step(&paths, true),
        Some(Commands::Back) => cmd_step(&paths, false),
        Some(Commands::Complete) => cmd_complete(&paths),
        Some(Commands::Export { out }) => cmd_export(&paths, out),
        Some(Commands::Archive) => cmd_archive(&paths),
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn load_questions(paths: &Paths) -> Vec<ExaminationQuestion> {
    match &paths.questions_csv {
        Some(path) if path.exists() => match load_examination_questions(path) {
            Ok(questions) => questions,
            Err(e) => {
                eprintln!("Failed to load questions from {:?}: {}. Using built-ins.", path, e);
                default_examination_questions()
            }
        },
        _ => default_examination_questions(),
    }
}

/// Prompts for a session's plan day, honoring the plan's category override
fn prompts_for(session_day: u32, plan: &ReadingPlan, questions: &[ExaminationQuestion]) -> PromptSelection {
    let override_category = plan
        .entry(session_day)
        .and_then(|e| e.category.as_deref());
    compute_prompts_for(session_day, questions, override_category)
}

fn cmd_begin(paths: &Paths, day: Option<u32>) -> Result<()> {
    let today = today();
    let mut journal = Journal::load(&paths.journal)?;

    if let Some(session) = journal.current_session(&today) {
        if session.date == today {
            println!("Session for {} already exists (day {}).", today, session.plan_day);
            println!("Run `eremos show` to continue it.");
            return Ok(());
        }
    }

    let plan_day = match day {
        Some(d) if d >= 1 => d,
        Some(_) => return Err(Error::Session("Plan day must be >= 1".into())),
        None => archive::next_plan_day(&journal, &paths.archive_csv)?,
    };

    let plan = ReadingPlan::load_or_empty(&paths.plan_csv);
    let checklist_refs: Vec<String> = plan
        .entry(plan_day)
        .map(|entry| {
            parse_all_references(&entry.references)
                .into_iter()
                .map(|r| r.label)
                .collect()
        })
        .unwrap_or_default();

    let session = journal.start_session(&today, plan_day, checklist_refs)?;
    println!("✓ Began day {} ({} readings).", session.plan_day, session.checklist.len());
    journal.save(&paths.journal)?;

    cmd_show(paths)
}

fn cmd_show(paths: &Paths) -> Result<()> {
    let today = today();
    let journal = Journal::load(&paths.journal)?;

    let Some(session) = journal.current_session(&today) else {
        println!("No session in progress. Run `eremos begin` to start one.");
        return Ok(());
    };

    let plan = ReadingPlan::load_or_empty(&paths.plan_csv);
    let questions = load_questions(paths);
    let selection = prompts_for(session.plan_day, &plan, &questions);
    let benediction = benediction_for_day(session.plan_day);

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  DAY {} — {}", session.plan_day, session.date);
    println!("╰─────────────────────────────────────────╯");

    let step = &steps::STEPS[session.current_step.min(steps::step_count() - 1)];
    println!("\n  Current step: {} ({})", step.title, step.id);

    println!("\n  Scripture Reading");
    if session.checklist.is_empty() {
        println!("    (no readings found for today)");
    } else {
        for item in &session.checklist {
            let mark = if item.completed { "✓" } else { " " };
            println!("    [{}] {}", mark, item.reference);
        }
    }

    println!("\n  Meditation");
    for prompt in &selection.meditation {
        println!("    {} ({}): {}", prompt.id, prompt.slot.as_str(), prompt.question);
    }

    println!("\n  Examination — {}", selection.category);
    if selection.examination.is_empty() {
        println!("    {}", FALLBACK_QUESTION);
    } else {
        for (i, q) in selection.examination.iter().enumerate() {
            println!("    examination-{}: {}", i + 1, q.question);
        }
    }

    if let Some(mood) = &session.mood {
        println!("\n  Mood: {}/10 ({})", mood.value, mood_label(mood.value));
    }

    println!("\n  Benediction ({})", benediction.reference);
    println!("    {}", benediction.text);
    println!();

    Ok(())
}

fn cmd_answer(paths: &Paths, step_id: &str, text: &str) -> Result<()> {
    if !steps::is_response_step(step_id) {
        return Err(Error::Session(format!(
            "Step {:?} does not take a written answer",
            step_id
        )));
    }

    let today = today();
    let plan = ReadingPlan::load_or_empty(&paths.plan_csv);
    let questions = load_questions(paths);

    Journal::update(&paths.journal, |journal| {
        let session = journal
            .current_session_mut(&today)
            .ok_or_else(|| Error::Session("No session in progress".into()))?;

        let selection = prompts_for(session.plan_day, &plan, &questions);
        let question = question_for_step(step_id, &selection);
        session.save_response(step_id, &question, text)
    })?;

    println!("✓ Saved answer for {}.", step_id);
    Ok(())
}

/// The question text a step presents, snapshotted alongside the answer
fn question_for_step(step_id: &str, selection: &PromptSelection) -> String {
    if let Some(index) = step_id.strip_prefix("meditation-") {
        if let Ok(i) = index.parse::<usize>() {
            if (1..=3).contains(&i) {
                return selection.meditation[i - 1].question.clone();
            }
        }
    }
    if let Some(index) = step_id.strip_prefix("examination-") {
        if let Ok(i) = index.parse::<usize>() {
            return selection
                .examination
                .get(i.saturating_sub(1))
                .map(|q| q.question.clone())
                .unwrap_or_else(|| FALLBACK_QUESTION.to_string());
        }
    }
    "Speak freely to your Father.".to_string()
}

fn cmd_check(paths: &Paths, reference: &str) -> Result<()> {
    let today = today();
    let mut completed = false;

    Journal::update(&paths.journal, |journal| {
        let session = journal
            .current_session_mut(&today)
            .ok_or_else(|| Error::Session("No session in progress".into()))?;
        completed = session.toggle_checklist(reference)?;
        Ok(())
    })?;

    if completed {
        println!("✓ Marked {:?} read.", reference);
    } else {
        println!("Unmarked {:?}.", reference);
    }
    Ok(())
}

fn cmd_mood(paths: &Paths, value: u8, note: &str) -> Result<()> {
    let today = today();

    Journal::update(&paths.journal, |journal| {
        let session = journal
            .current_session_mut(&today)
            .ok_or_else(|| Error::Session("No session in progress".into()))?;
        session.set_mood(value, note)
    })?;

    println!("✓ Mood recorded: {}/10 ({}).", value, mood_label(value));
    Ok(())
}

fn cmd_step(paths: &Paths, forward: bool) -> Result<()> {
    let today = today();
    let mut step_index = 0;

    Journal::update(&paths.journal, |journal| {
        let session = journal
            .current_session_mut(&today)
            .ok_or_else(|| Error::Session("No session in progress".into()))?;
        if forward {
            session.advance_step();
        } else {
            session.back_step();
        }
        step_index = session.current_step;
        Ok(())
    })?;

    let step = &steps::STEPS[step_index];
    println!("→ {} ({})", step.title, step.id);
    Ok(())
}

fn cmd_complete(paths: &Paths) -> Result<()> {
    let today = today();
    let mut plan_day = 0;

    Journal::update(&paths.journal, |journal| {
        let session = journal
            .current_session_mut(&today)
            .ok_or_else(|| Error::Session("No session in progress".into()))?;
        session.complete();
        plan_day = session.plan_day;
        Ok(())
    })?;

    println!("✓ Day {} completed. Go in peace.", plan_day);
    Ok(())
}

fn cmd_export(paths: &Paths, out: Option<PathBuf>) -> Result<()> {
    let today = today();
    let journal = Journal::load(&paths.journal)?;

    let session = journal
        .current_session(&today)
        .ok_or_else(|| Error::Session("No session to export".into()))?;

    let plan = ReadingPlan::load_or_empty(&paths.plan_csv);
    let dir = out.unwrap_or_else(|| paths.exports.clone());
    let path = export::write_markdown(session, plan.entry(session.plan_day), &dir)?;

    println!("✓ Exported to {}", path.display());
    Ok(())
}

fn cmd_archive(paths: &Paths) -> Result<()> {
    let count = archive::archive_completed(&paths.journal, &paths.archive_csv)?;

    if count == 0 {
        println!("No completed sessions to archive.");
    } else {
        println!("✓ Archived {} session(s) to CSV", count);
        println!("  CSV: {}", paths.archive_csv.display());
    }
    Ok(())
}
