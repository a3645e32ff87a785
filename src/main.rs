//! Letter Trainer - alphabet drills for children with spoken feedback
//!
//! Single-session terminal application. One letter at a time is shown with
//! its word and picture; pressing the right key advances, a wrong key speaks
//! a hint.

mod alphabet;
mod cli;
mod config;
mod scheduler;
mod session;
mod speech;

use clap::Parser;
use cli::display::Display;
use cli::input::{Command, Input, InputHandler};
use cli::view::View;
use config::Config;
use scheduler::TimerQueue;
use session::{Event, LetterTrainer};
use speech::{CommandSpeech, SilentSpeech, SpeechDriver};
use std::collections::VecDeque;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "Letter Trainer")]
#[command(about = "Learn the alphabet one key at a time, with spoken feedback")]
struct Args {
    /// Path to JSON config (phrases, languages, delays)
    #[arg(short, long, default_value = "letter-trainer.json")]
    config: PathBuf,

    /// Speech synthesizer binary (default: espeak-ng, espeak or say from PATH)
    #[arg(short, long)]
    synth: Option<PathBuf>,

    /// Disable speech, show text feedback only
    #[arg(short, long)]
    mute: bool,

    /// Letters only, without the paired word and picture
    #[arg(short, long)]
    basic: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}

/// Event loop: key presses and due timers feed the trainer one event at a time
fn run<S: SpeechDriver>(
    trainer: &mut LetterTrainer<S>,
    display: &mut Display,
) -> Result<(), Box<dyn Error>> {
    let input = InputHandler::new();
    let mut timers = TimerQueue::new();
    let mut events: VecDeque<Event> = VecDeque::new();

    timers.schedule_all(trainer.start(), Instant::now());

    loop {
        display.render(&View::of(trainer.state(), trainer.config()))?;

        match input.read_input()? {
            Some(Input::Key(key)) => {
                match InputHandler::classify(&key, trainer.state().is_completed()) {
                    Command::Exit => break,
                    Command::PlayAgain => events.push_back(Event::PlayAgain),
                    Command::Press(press) => events.push_back(Event::Key(press)),
                    Command::Ignore => {}
                }
            }
            Some(Input::Resize) => display.invalidate(),
            None => {}
        }

        events.extend(timers.pop_due(Instant::now()));
        while let Some(event) = events.pop_front() {
            let scheduled = trainer.handle(event);
            timers.schedule_all(scheduled, Instant::now());
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.debug);

    let mut config = Config::load(&args.config)?;
    if args.basic {
        config.show_words = false;
    }

    let speech: Box<dyn SpeechDriver> = if args.mute {
        Box::new(SilentSpeech)
    } else {
        Box::new(CommandSpeech::detect(args.synth.as_deref()))
    };
    let mut trainer = LetterTrainer::new(speech, config);

    // Display first: its Drop leaves the alternate screen and raw mode
    let mut display = Display::fullscreen()?;
    let result = InputHandler::enable_raw_mode()
        .map_err(Into::into)
        .and_then(|()| run(&mut trainer, &mut display));

    // Cleanup, best effort so the run error is not lost
    if let Err(e) = InputHandler::disable_raw_mode() {
        log::warn!("Could not leave raw mode: {}", e);
    }
    if let Err(e) = display.shutdown() {
        log::warn!("Could not restore terminal: {}", e);
    }
    drop(display);
    result?;

    // Summary
    let mistakes = trainer.mistakes();
    println!(
        "🎉 Rounds completed: {} | Letter reached: {} | Wrong keys: {}",
        trainer.rounds_completed(),
        trainer.state().expected_letter(),
        mistakes.total()
    );
    let problems = mistakes.problem_letters();
    if !problems.is_empty() {
        println!("⚠️  Letters to practice: {:?}", problems);
        for &letter in &problems {
            println!("   {}: missed {}x", letter, mistakes.misses_for(letter));
        }
        for ((expected, got), count) in mistakes.top_pairs(3) {
            println!("   {} pressed as {} ({}x)", expected, got, count);
        }
    }

    Ok(())
}
