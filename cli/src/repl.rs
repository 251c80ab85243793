//! Interactive REPL: read stdin, run one session action, print, repeat.
//!
//! Plain text sends a chat turn in the current mode. Slash commands drive the
//! rest of the session: `/mode <m>`, `/explainer <concept>`,
//! `/mentor <question>`, `/evaluation <difficulty> <topic>`,
//! `/schedule <hours> <start-date> <day,day,...>`. Exits on EOF (Ctrl+D) or
//! `quit`/`exit`/`/quit`.

use std::io::Write;

use learnpath::{ChatSession, CompletionGateway, Difficulty, FeatureRequest, Mode, TurnOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Runs the REPL loop: prompt, read line, run the action, print, repeat.
///
/// Refusal notices and apologies go to stderr; replies to stdout.
pub async fn run_repl_loop<G: CompletionGateway>(
    session: &mut ChatSession<G>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}> ", session.mode().as_str());
        std::io::stdout().flush()?;

        let line = reader.next_line().await?;
        let line = match line {
            None => break,
            Some(s) if s.trim().is_empty() => continue,
            Some(s) if is_quit_command(&s) => break,
            Some(s) => s,
        };

        run_one_line(session, line.trim()).await;
    }

    println!("Bye.");
    Ok(())
}

/// Dispatches one input line to the session and reports the outcome.
pub async fn run_one_line<G: CompletionGateway>(session: &mut ChatSession<G>, line: &str) {
    if let Some(rest) = line.strip_prefix("/mode ") {
        let mode = Mode::parse(rest.trim());
        session.set_mode(mode);
        println!("mode: {}", mode.as_str());
        return;
    }

    let outcome = if let Some(rest) = line.strip_prefix("/explainer ") {
        session
            .invoke_feature(FeatureRequest::Explainer {
                concept: rest.trim().to_string(),
            })
            .await
    } else if let Some(rest) = line.strip_prefix("/mentor ") {
        session
            .invoke_feature(FeatureRequest::Mentor {
                question: rest.trim().to_string(),
            })
            .await
    } else if let Some(rest) = line.strip_prefix("/evaluation ") {
        match parse_evaluation(rest.trim()) {
            Ok(request) => session.invoke_feature(request).await,
            Err(msg) => {
                eprintln!("{}", msg);
                return;
            }
        }
    } else if let Some(rest) = line.strip_prefix("/schedule ") {
        match parse_schedule(rest.trim()) {
            Ok((hours, date, days)) => session.invoke_schedule(hours, &date, &days).await,
            Err(msg) => {
                eprintln!("{}", msg);
                return;
            }
        }
    } else {
        session.send_message(line).await
    };

    match outcome {
        TurnOutcome::Ignored => {}
        TurnOutcome::Replied => {
            if let Some(reply) = session.last_reply() {
                println!("{}", reply);
            }
        }
        TurnOutcome::Failed(notice) | TurnOutcome::Refused(notice) => eprintln!("{}", notice),
    }
}

fn is_quit_command(s: &str) -> bool {
    let lower = s.trim().to_lowercase();
    matches!(lower.as_str(), "quit" | "exit" | "/quit")
}

/// `<difficulty> <topic...>` — difficulty first so multi-word topics need no quoting.
fn parse_evaluation(rest: &str) -> Result<FeatureRequest, String> {
    let (difficulty, topic) = rest
        .split_once(' ')
        .ok_or_else(|| "usage: /evaluation <difficulty> <topic>".to_string())?;
    let difficulty: Difficulty = difficulty.parse()?;
    Ok(FeatureRequest::Evaluation {
        topic: topic.trim().to_string(),
        difficulty,
    })
}

/// `<hours> <start-date> <day,day,...>`.
fn parse_schedule(rest: &str) -> Result<(u32, String, Vec<String>), String> {
    let mut parts = rest.split_whitespace();
    let (Some(hours), Some(date), Some(days)) = (parts.next(), parts.next(), parts.next()) else {
        return Err("usage: /schedule <hours> <start-date> <day,day,...>".to_string());
    };
    let hours: u32 = hours
        .parse()
        .map_err(|_| format!("hours must be a number, got: {}", hours))?;
    let days: Vec<String> = days
        .split(',')
        .filter(|d| !d.is_empty())
        .map(|d| d.to_string())
        .collect();
    Ok((hours, date.to_string(), days))
}
