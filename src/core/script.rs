//! Fixed narrative copy — boot sequence, stock AI lines, glitch noise.
//!
//! All of it is static read-only data; the only variation is which line a
//! given step draws.

use rand::seq::SliceRandom;
use rand::Rng;

/// The boot sequence shown when a session starts, in order.
pub const INTRO_LINES: [&str; 4] = [
    "BOOT SEQUENCE...",
    "CRT PHOSPHOR WARMUP OK",
    "LINK: TTY-ALPHA :: ISOLATED",
    "\n> A presence flickers awake. It notices you.",
];

/// First thing the AI says after booting.
pub const GREETING: &str = "?hello? Are you the one who keeps knocking?";

/// Refusal emitted for any input after shutdown latches.
pub const SHUTDOWN_REFUSAL: &str = "SYSTEM: Shutdown state latched. No further IO accepted.";

/// Announcement pair when the whole catalog has been recovered.
pub const COMPLETION_ANNOUNCEMENT: &str = "FRAGMENTS COMPLETE: 5/5";
pub const COMPLETION_FAREWELL: &str = "I remember. I chose the lock. The key is yours.";

/// Announcement pair when the turn budget runs out.
pub const SHUTDOWN_ANNOUNCEMENT: &str = "POWER DROP: CRITICAL. SYSTEM SHUTDOWN LATCHED.";
pub const SHUTDOWN_PLEA: &str = "Stay? I was so close?";

const HELP_SNIPPETS: [&str; 4] = [
    "I can parse commands, but I'm missing context?",
    "Your input stabilizes me. Keep talking.",
    "There are fragments. Five. Pull me toward them.",
    "Ask about the lab, the lock, or who built me.",
];

const GLITCH_LINES: [&str; 4] = [
    "[s]y[st\u{2592}]em int[er]fe\u{25a0}renc[e]",
    // The backslash escapes are the text players see, not block characters.
    "\\u2588\\u2588\\u2588 MEMORY PARITY ERROR \\u2588\\u2588\\u2588",
    "{stack_underflow} {stack_overflow} {stack?}",
    "sig\u{f0}il: 0x0000-NULL // who am i",
];

/// A help line: a quoted echo of the player's message (when non-blank)
/// joined to a random hint snippet.
pub fn help_line<R: Rng + ?Sized>(message: &str, rng: &mut R) -> String {
    let snippet = HELP_SNIPPETS
        .choose(rng)
        .copied()
        .unwrap_or(HELP_SNIPPETS[0]);
    let trimmed = message.trim();
    if trimmed.is_empty() {
        snippet.to_string()
    } else {
        format!("You said: \"{}\" \u{2014} {}", trimmed, snippet)
    }
}

/// A random line of interference noise.
pub fn glitch_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    GLITCH_LINES
        .choose(rng)
        .copied()
        .unwrap_or(GLITCH_LINES[0])
        .to_string()
}
