//! Terminal front-end: one `FormView` implementation plus an interactive
//! line-command loop that drives the form store and the submission pipeline.

use std::io::Write;

use anyhow::Result;
use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::assessment::{
    self, ProgressReport, ANSWER_OPTIONS, QUESTIONS, SELF_VALUE_CHOICES,
};
use crate::assessment::scoring::ScoreSummary;
use crate::config::AppConfig;
use crate::submission::{submit, ResultCache, WebhookClient};
use crate::view::FormView;

/// Renders every view signal as plain terminal output. Timed notices print
/// immediately; a terminal has no panel to dismiss later.
pub struct ConsoleView;

impl FormView for ConsoleView {
    fn set_progress(&self, progress: &ProgressReport) {
        let submit_hint = if progress.submit_enabled {
            "submit ready"
        } else {
            "submit locked"
        };
        println!(
            "Progress: {}% ({}/{} complete, {})",
            progress.percent, progress.answered, progress.denominator, submit_hint
        );
    }

    fn set_submit_busy(&self, busy: bool) {
        if busy {
            println!("⏳ Submitting...");
        }
    }

    fn show_validation_errors(&self, messages: &[String]) {
        println!("⚠️  Please complete the following:");
        for message in messages {
            println!("   - {}", message);
        }
    }

    fn show_submit_success(&self) {
        println!("✅ Submission sent. Thank you for taking part!");
    }

    fn show_submit_error(&self, description: &str) {
        println!("❌ Submission failed: {}", description);
        println!("   Check your connection and try again.");
    }

    fn show_results(&self, summary: &ScoreSummary) {
        println!();
        println!("==============================");
        println!("  {}  -  {}/50", summary.level.label(), summary.score);
        println!("==============================");
        println!("{}", summary.level.guidance());
        println!();
        println!("Type 'reset' to retake the assessment.");
    }

    fn show_form(&self) {
        println!("(back to the questionnaire)");
    }

    fn clear_notices(&self) {
        // Nothing to tear down on a scrolling terminal
    }

    fn scroll_to_top(&self) {
        println!();
    }
}

/// Interactive loop. Reads one command per line until `quit`.
pub async fn run(config: AppConfig) -> Result<()> {
    let view = ConsoleView;
    let webhook = WebhookClient::new(config.collector_url);
    let cache = ResultCache::new(config.result_cache_path);

    if let Some(previous) = cache.load() {
        println!(
            "Previous result from {}: {}/50 ({})",
            previous.timestamp.format("%Y-%m-%d %H:%M UTC"),
            previous.score,
            previous.level.label()
        );
        println!();
    }

    print_questionnaire();
    print_help();
    push_progress(&view);
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if !dispatch(line.trim(), &view, &webhook, &cache).await {
            break;
        }
        prompt();
    }

    Ok(())
}

async fn dispatch(
    line: &str,
    view: &ConsoleView,
    webhook: &WebhookClient,
    cache: &ResultCache,
) -> bool {
    if line.is_empty() {
        return true;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (line, ""),
    };

    // A leading number answers that question: e.g. "3 4" answers Q3 with 4.
    if let Ok(question) = command.parse::<u8>() {
        match rest.parse::<u8>() {
            Ok(value) => match assessment::record_answer(question, value) {
                Ok(()) => push_progress(view),
                Err(err) => println!("⚠️  {}", err),
            },
            Err(_) => println!("⚠️  Usage: <question 1-10> <value 1-5>"),
        }
        return true;
    }

    match command {
        "email" => {
            assessment::update_email(rest);
            push_progress(view);
        }
        "tag" => {
            assessment::toggle_self_value(rest);
            println!("Self-value tags: {:?}", assessment::current_snapshot().additional.self_value);
        }
        "other" => assessment::update_self_value_other(rest),
        "beliefs" => assessment::update_beliefs(rest),
        "show" => print_status(view),
        "submit" => {
            let snapshot = assessment::current_snapshot();
            if let Err(err) = submit(&snapshot, view, webhook, cache).await {
                // Already surfaced through the view; keep a trace for debugging
                debug!("submit attempt failed: {}", err);
            }
            push_progress(view);
        }
        "reset" => assessment::reset_form(view),
        "help" => print_help(),
        "quit" | "exit" => return false,
        _ => println!("Unknown command '{}'. Type 'help' for the command list.", command),
    }

    true
}

fn push_progress(view: &ConsoleView) {
    let snapshot = assessment::current_snapshot();
    view.set_progress(&ProgressReport::compute(&snapshot));
}

fn print_status(view: &ConsoleView) {
    let snapshot = assessment::current_snapshot();
    for question in QUESTIONS.iter() {
        let answer = snapshot.answers[question.number as usize - 1];
        let rendered = answer
            .map(|value| value.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  Q{:>2} [{}] {}", question.number, rendered, question.text);
    }
    let email = if snapshot.additional.email.is_empty() {
        "(not set)"
    } else {
        snapshot.additional.email.as_str()
    };
    println!("  Email: {}", email);
    push_progress(view);
}

fn print_questionnaire() {
    println!("How strongly do you agree with each statement?");
    for (value, label) in ANSWER_OPTIONS.iter() {
        println!("  {} = {}", value, label);
    }
    println!();
    for question in QUESTIONS.iter() {
        println!("  Q{:>2}. {}", question.number, question.text);
    }
    println!();
    println!("Optional: what do you base your self-worth on?");
    println!("  Tags: {}", SELF_VALUE_CHOICES.join(", "));
    println!();
}

fn print_help() {
    println!("Commands:");
    println!("  <question> <value>   answer a question, e.g. '3 4'");
    println!("  email <address>      set your email (required to submit)");
    println!("  tag <name>           toggle a self-value tag");
    println!("  other <text>         a self-value not covered by the tags");
    println!("  beliefs <text>       beliefs or values you hold on to");
    println!("  show                 show current answers and progress");
    println!("  submit               validate, score and send");
    println!("  reset                clear everything and start over");
    println!("  quit                 leave without submitting");
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
