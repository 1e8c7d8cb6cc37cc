use super::config::PairsConfig;
use super::input;
use super::session::{Control, Session};
use super::state::TurnPhase;
use super::view::{self, CardView, ViewModel};
use crate::error::AppError;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use rand::RngCore;
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use tracing::info;

const TICK_MS: u64 = 33;

#[derive(Clone, Copy)]
struct Rgb
{
    r: u8,
    g: u8,
    b: u8,
}

const HIDDEN_BG: Rgb = Rgb { r: 40, g: 60, b: 40 };
const FLIPPED_BG: Rgb = Rgb { r: 40, g: 80, b: 160 };
const MATCHED_BG: Rgb = Rgb { r: 0, g: 120, b: 60 };
const TOAST_BG: Rgb = Rgb { r: 180, g: 130, b: 0 };

struct TerminalGuard
{
    stdout: Stdout,
}

impl TerminalGuard
{
    fn enter() -> io::Result<Self>
    {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Self { stdout })
    }

    fn stdout(&mut self) -> &mut Stdout
    {
        &mut self.stdout
    }
}

impl Drop for TerminalGuard
{
    fn drop(&mut self)
    {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub fn run_with_config(config: PairsConfig) -> Result<(), AppError>
{
    let seed = config
        .seed
        .unwrap_or_else(|| rand::thread_rng().next_u64());
    info!(
        seed,
        pairs = config.pairs,
        delay_ms = config.flip_delay.as_millis() as u64,
        "starting session"
    );

    let mut term = TerminalGuard::enter()?;
    let mut session = Session::new(&config, seed, Instant::now());
    let mut last_draw: Option<Instant> = None;

    loop {
        if handle_input(&mut session)? == Control::Quit {
            break;
        }

        let now = Instant::now();
        session.tick(now);

        if last_draw.is_none_or(|at| now.duration_since(at) >= Duration::from_millis(TICK_MS)) {
            let frame = view::render(session.state());
            draw_ui(term.stdout(), &session, &frame)?;
            last_draw = Some(now);
        }
    }

    info!(
        moves = session.state().moves(),
        matched = session.state().matched_pairs(),
        "session closed"
    );
    Ok(())
}

fn handle_input(session: &mut Session) -> Result<Control, AppError>
{
    let mut timeout = Duration::from_millis(TICK_MS);
    if let Some(due) = session.next_due() {
        timeout = timeout.min(due.saturating_duration_since(Instant::now()));
    }

    while event::poll(timeout)? {
        timeout = Duration::ZERO;
        if let Event::Key(key) = event::read()? {
            let Some(command) = input::command_for_key(key) else {
                continue;
            };
            if session.apply(command, Instant::now()) == Control::Quit {
                return Ok(Control::Quit);
            }
        }
    }

    Ok(Control::Continue)
}

fn draw_ui(stdout: &mut Stdout, session: &Session, frame: &ViewModel) -> Result<(), AppError>
{
    let mut lines = Vec::new();
    lines.push("KB Games - Pairs".to_string());
    lines.push(format!("Seed: {}", session.seed()));
    lines.push(format!(
        "Moves: {}  Pairs: {}/{}{}",
        frame.moves,
        frame.matched_pairs,
        frame.total_pairs,
        phase_hint(frame.phase)
    ));
    lines.push(String::new());

    for row in frame.rows() {
        lines.push(render_row(row, session.focus()));
        lines.push(String::new());
    }

    if let Some(card) = frame.cards.get(session.focus()) {
        lines.push(format!("Focused: {}", card.label));
    }
    lines.push(format!("Status: {}", frame.status));
    match session.toast() {
        Some(text) => lines.push(paint(TOAST_BG, &format!(" {text} "))),
        None => lines.push(String::new()),
    }
    lines.push(String::new());

    if frame.is_complete {
        lines.push(format!(
            "All {} pairs found in {} moves! Press R to play again.",
            frame.total_pairs, frame.moves
        ));
    }
    lines.push(
        "Arrows/hjkl move, Home/End jump, Enter/Space flip, R restarts, Esc quits.".to_string(),
    );

    let output = format!("{}\r\n", lines.join("\r\n"));
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn phase_hint(phase: TurnPhase) -> &'static str
{
    match phase {
        TurnPhase::Idle => "",
        TurnPhase::OneFlipped => "  (pick a second card)",
        TurnPhase::Resolving => "  (checking...)",
    }
}

fn render_row(row: &[CardView], focus: usize) -> String
{
    let mut line = String::new();
    for card in row {
        let color = if card.is_matched {
            MATCHED_BG
        } else if card.is_flipped {
            FLIPPED_BG
        } else {
            HIDDEN_BG
        };
        let (open, close) = if card.index == focus { ('>', '<') } else { (' ', ' ') };
        line.push(open);
        line.push_str(&paint(color, &format!("  {}  ", card.face)));
        line.push(close);
    }
    line
}

fn paint(color: Rgb, text: &str) -> String
{
    format!(
        "\x1b[48;2;{};{};{}m{}\x1b[0m",
        color.r, color.g, color.b, text
    )
}
