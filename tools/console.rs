/// Console — interactive playtest shell for the derelict terminal.
///
/// Usage: console [--seed <n>]
///
/// Anything you type is sent to the engine as the player message.
/// Meta commands:
///   :state   — dump the current state snapshot
///   :restart — start a fresh session
///   :quit    — exit
use std::io::{self, BufRead, Write};

use derelict_terminal::core::engine::Engine;
use derelict_terminal::schema::session::{ReplyLine, ReplyRole, SessionResult};
use derelict_terminal::schema::state::GameState;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut seed: Option<u64> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().ok();
            }
            "--help" | "-h" => {
                println!("Usage: console [--seed <n>]");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let engine = match seed {
        Some(s) => Engine::with_seed(s),
        None => Engine::new(),
    };

    let mut session = engine.new_session();
    render(&session.reply_lines);
    let mut state: Option<GameState> = Some(session.state.clone());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let input = line.trim_end_matches('\n');

        match input.trim() {
            ":quit" | ":q" => break,
            ":restart" => {
                session = engine.new_session();
                state = Some(session.state.clone());
                render(&session.reply_lines);
                continue;
            }
            ":state" => {
                match state.as_ref().map(GameState::to_ron_string) {
                    Some(Ok(snapshot)) => println!("{}", snapshot),
                    Some(Err(e)) => eprintln!("snapshot error: {}", e),
                    None => println!("(no state)"),
                }
                continue;
            }
            _ => {}
        }

        render(&[ReplyLine {
            role: ReplyRole::User,
            text: input.to_string(),
        }]);

        session = engine.step(state.as_ref(), input);
        render(&session.reply_lines);
        state = Some(session.state.clone());

        if session.done {
            print_epilogue(&session);
            break;
        }
    }
}

fn render(lines: &[ReplyLine]) {
    for line in lines {
        match line.role {
            ReplyRole::System => println!("{}", line.text),
            role => println!("[{}] {}", role.label(), line.text),
        }
    }
}

fn print_epilogue(session: &SessionResult) {
    if session.game_over {
        println!(
            "\n-- connection lost at turn {} --",
            session.state.turn
        );
    } else {
        println!(
            "\n-- all {} fragments recovered in {} turns --",
            session.state.found_fragment_ids.len(),
            session.state.turn
        );
        for fragment in session.state.found_fragments() {
            println!("   {}", fragment.title);
        }
    }
}
