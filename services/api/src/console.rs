use crate::cli::{QuestionsArgs, ScoreArgs, TakeArgs};
use crate::infra::policy_override;
use analyst_fit::assessment::{
    AnswerSheet, AssessmentReport, AssessmentResults, AssessmentSession, AssessmentStage,
    FinalScores, QuestionBank, Section, SessionError,
};
use analyst_fit::config::AppConfig;
use analyst_fit::error::AppError;
use analyst_fit::telemetry::{self, LogOutput};
use chrono::Utc;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;

const TITLE: &str = "Should I Become a Market Research Analyst?";

/// How an interactive run ended.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ConsoleOutcome {
    /// Scores of the most recently finished attempt.
    Completed(FinalScores),
    Abandoned,
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Next,
    Previous,
    Blank,
    Answer(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Self::Blank,
            "q" | "Q" => Self::Quit,
            "n" | "N" => Self::Next,
            "p" | "P" => Self::Previous,
            value => Self::Answer(value.to_string()),
        }
    }
}

/// Drives an [`AssessmentSession`] from line-based input.
pub(crate) struct ConsoleAssessment<R, W> {
    session: AssessmentSession,
    input: R,
    output: W,
    announced: Option<Section>,
    last_completed: Option<FinalScores>,
}

impl<R: BufRead, W: Write> ConsoleAssessment<R, W> {
    pub(crate) fn new(session: AssessmentSession, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            announced: None,
            last_completed: None,
        }
    }

    pub(crate) fn run(mut self) -> Result<ConsoleOutcome, AppError> {
        loop {
            let keep_going = match self.session.stage() {
                AssessmentStage::Hero => self.hero()?,
                AssessmentStage::Introduction => self.introduction()?,
                AssessmentStage::Psychometric
                | AssessmentStage::Technical
                | AssessmentStage::Wiscar => self.question()?,
                AssessmentStage::Results => self.results()?,
            };

            if !keep_going {
                return Ok(match self.last_completed {
                    Some(scores) => ConsoleOutcome::Completed(scores),
                    None => ConsoleOutcome::Abandoned,
                });
            }
        }
    }

    fn hero(&mut self) -> Result<bool, AppError> {
        writeln!(self.output, "\n{TITLE}")?;
        writeln!(
            self.output,
            "A 20-minute self-assessment of personality fit, technical readiness and career alignment."
        )?;
        if self.prompt("Press Enter to start (q to quit): ")? == Input::Quit {
            return Ok(false);
        }
        self.session = self.session.start()?;
        Ok(true)
    }

    fn introduction(&mut self) -> Result<bool, AppError> {
        writeln!(self.output, "\nThe assessment has three parts:")?;
        for section in Section::ordered() {
            writeln!(
                self.output,
                "  {}. {} - {}",
                section.step(),
                section.title(),
                section.subtitle()
            )?;
        }
        if self.prompt("Press Enter to begin (q to quit): ")? == Input::Quit {
            return Ok(false);
        }
        self.session = self.session.begin()?;
        Ok(true)
    }

    fn question(&mut self) -> Result<bool, AppError> {
        let (Some(progress), Some(view)) = (self.session.progress(), self.session.current_view())
        else {
            return Ok(false);
        };

        if self.announced != Some(view.section) {
            self.announced = Some(view.section);
            writeln!(
                self.output,
                "\nStep {} of {}: {}",
                progress.step,
                progress.total_steps,
                view.section.title()
            )?;
            writeln!(self.output, "{}", view.section.subtitle())?;
        }

        writeln!(
            self.output,
            "\nQuestion {} of {} [{}]",
            progress.question.position, progress.question.total, view.tag_label
        )?;
        writeln!(self.output, "{}", view.text)?;
        let current = self.session.current_answer().map(str::to_owned);
        for option in &view.options {
            let marker = if current.as_deref() == Some(option.value) {
                "*"
            } else {
                " "
            };
            writeln!(self.output, " {marker} {}) {}", option.value, option.label)?;
        }

        match self.prompt("Answer (n next, p previous, q quit): ")? {
            Input::Quit => return Ok(false),
            Input::Blank => {}
            Input::Previous => self.session = self.session.previous()?,
            Input::Next => {
                if self.session.can_advance() {
                    self.session = self.session.next()?;
                } else {
                    writeln!(self.output, "Choose an option before moving on.")?;
                }
            }
            Input::Answer(value) => match self.session.select(&value) {
                Ok(answered) => self.session = answered.next()?,
                Err(SessionError::Validation(err)) => writeln!(self.output, "{err}")?,
                Err(err) => return Err(err.into()),
            },
        }
        Ok(true)
    }

    fn results(&mut self) -> Result<bool, AppError> {
        let Some(results) = self.session.results() else {
            return Ok(false);
        };
        self.last_completed = Some(self.session.scores().final_scores());
        writeln!(self.output)?;
        render_results(&results, &mut self.output)?;

        match self.prompt("Take the assessment again? [y/N]: ")? {
            Input::Answer(answer) if answer.eq_ignore_ascii_case("y") => {
                self.session = self.session.restart()?;
                self.announced = None;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Reads one line; end of input counts as quitting.
    fn prompt(&mut self, text: &str) -> io::Result<Input> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Input::Quit);
        }
        Ok(Input::parse(&line))
    }
}

pub(crate) fn render_results<W: Write>(results: &AssessmentResults, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Recommendation: {} (average {:.1}%, confidence {}%)",
        results.tier_label, results.average_score, results.confidence_percent
    )?;
    writeln!(out, "{}", results.message)?;

    writeln!(out, "\nCore scores")?;
    for entry in &results.core_scores {
        writeln!(
            out,
            "- {}: {}% ({})",
            entry.label, entry.rounded, entry.description
        )?;
    }

    writeln!(out, "\nWISCAR breakdown")?;
    for entry in &results.dimension_breakdown {
        writeln!(
            out,
            "- [{}] {}: {}% ({})",
            entry.letter, entry.name, entry.rounded, entry.description
        )?;
    }

    writeln!(out, "\nJob matches")?;
    for job in &results.job_matches {
        writeln!(
            out,
            "- {}: {}% {} match. {}",
            job.title,
            job.rounded,
            job.strength.label(),
            job.description
        )?;
    }

    writeln!(out, "\nLearning path")?;
    for phase in &results.learning_path {
        writeln!(
            out,
            "{}. {}: {}",
            phase.step,
            phase.title,
            phase.topics.join(", ")
        )?;
    }
    Ok(())
}

fn write_catalog<W: Write>(bank: &QuestionBank, section: Option<Section>, out: &mut W) -> io::Result<()> {
    let sections: Vec<Section> = match section {
        Some(section) => vec![section],
        None => Section::ordered().to_vec(),
    };

    for section in sections {
        writeln!(out, "Step {}: {}", section.step(), section.title())?;
        for question in bank.questions(section) {
            let view = question.view();
            writeln!(out, "  {} [{}] {}", view.id, view.tag_label, view.text)?;
            for option in &view.options {
                writeln!(out, "      {}) {}", option.value, option.label)?;
            }
        }
    }
    Ok(())
}

/// Loads configuration for a console command and sends logs to stderr.
fn console_config(lenient: bool) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(policy) = policy_override(lenient) {
        config.assessment.answer_policy = policy;
    }
    telemetry::init(&config.telemetry, LogOutput::Stderr)?;
    Ok(config)
}

pub(crate) fn run_take(args: TakeArgs) -> Result<(), AppError> {
    let config = console_config(args.lenient)?;
    let session = AssessmentSession::with_policy(
        Arc::new(QuestionBank::standard()),
        config.assessment.answer_policy,
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = ConsoleAssessment::new(session, stdin.lock(), stdout.lock()).run()?;

    match outcome {
        ConsoleOutcome::Completed(scores) => info!(
            overall_confidence = scores.overall_confidence,
            "interactive assessment completed"
        ),
        ConsoleOutcome::Abandoned => info!("interactive assessment abandoned"),
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        json,
        lenient,
    } = args;
    let config = console_config(lenient)?;

    let bank = Arc::new(QuestionBank::standard());
    let sheet = AnswerSheet::from_path(&bank, &answers)?;
    let session = AssessmentSession::replay(bank, &sheet, config.assessment.answer_policy)?;
    info!(answers = sheet.len(), path = %answers.display(), "replayed answer sheet");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        let report = AssessmentReport::new(session.scores(), Utc::now());
        writeln!(out, "{}", report.to_json_pretty()?)?;
    } else if let Some(results) = session.results() {
        render_results(&results, &mut out)?;
    }
    Ok(())
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let bank = QuestionBank::standard();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_catalog(&bank, args.section, &mut out)?;
    Ok(())
}
