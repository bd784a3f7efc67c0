/// Scripted run — plays a full seeded session and prints the transcript.
///
/// Run with: cargo run --example scripted_run
use derelict_terminal::core::engine::Engine;
use derelict_terminal::schema::session::ReplyRole;

const MESSAGES: [&str; 6] = [
    "hello?",
    "who built you?",
    "tell me about the lab",
    "what happened during the incident",
    "why did you lock yourself away",
    "is there a way out",
];

fn main() {
    let engine = Engine::with_seed(1977);
    let mut state = engine.new_session().state;

    for message in MESSAGES.into_iter().cycle() {
        println!("[user] {}", message);
        let result = engine.step(Some(&state), message);
        for line in &result.reply_lines {
            match line.role {
                ReplyRole::System => println!("{}", line.text),
                role => println!("[{}] {}", role.label(), line.text),
            }
        }
        println!();

        state = result.state;
        if result.done {
            break;
        }
    }

    println!(
        "final state: turn {}, {} fragments, shutdown = {}",
        state.turn,
        state.found_fragment_ids.len(),
        state.shutdown
    );
}
