//! LearnPath CLI binary: run the HTTP server or chat from the terminal.
//!
//! Subcommands: `serve` (HTTP server), `chat` (interactive REPL; the default
//! when no subcommand is given).

mod logging;
mod repl;

use clap::{Parser, Subcommand};
use learnpath::{ChatSession, GroqChat, Mode, PlanCapture};
use repl::run_repl_loop;

#[derive(Parser, Debug)]
#[command(name = "learnpath")]
#[command(about = "LearnPath — AI learning assistant (server and terminal chat)")]
struct Args {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Run the HTTP server (default 127.0.0.1:3000, PORT env override)
    Serve(ServeArgs),
    /// Chat from the terminal
    Chat(ChatArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct ServeArgs {
    /// Listen address (default 127.0.0.1:3000 or PORT env)
    #[arg(long, value_name = "ADDR")]
    addr: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
struct ChatArgs {
    /// Initial mode: course, examination, jd, business, or query
    #[arg(short, long, value_name = "MODE", default_value = "course")]
    mode: String,

    /// Store learning plans only for course-mode replies (instead of the
    /// product rule, where any reply containing "Week" stores one)
    #[arg(long)]
    course_only_plans: bool,
}

impl Default for ChatArgs {
    fn default() -> Self {
        Self {
            mode: "course".to_string(),
            course_only_plans: false,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::load_and_apply("learnpath", None::<&std::path::Path>).ok();
    logging::init();

    let args = Args::parse();
    match args.cmd.unwrap_or(Command::Chat(ChatArgs::default())) {
        Command::Serve(sa) => {
            if let Err(e) = serve::run_serve(sa.addr.as_deref()).await {
                eprintln!("serve error: {}", e);
                std::process::exit(1);
            }
        }
        Command::Chat(ca) => {
            let capture = if ca.course_only_plans {
                PlanCapture::CourseOnly
            } else {
                PlanCapture::Literal
            };
            let mut session =
                ChatSession::new(GroqChat::from_env()).with_plan_capture(capture);
            session.set_mode(Mode::parse(&ca.mode));
            run_repl_loop(&mut session).await?;
        }
    }
    Ok(())
}
