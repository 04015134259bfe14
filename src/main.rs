use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dasher::core::constants::EVENT_LOG_CAPACITY;
use dasher::core::tick::{advance, TickEvent};
use dasher::simulator::{run_simulation, JumpPolicy, SimConfig};
use dasher::ui::effects::ParticleSystem;
use dasher::ui::game_scene::render_game_scene;
use dasher::ui::title_scene::TitleScreen;
use dasher::{GameConfig, GameState};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

enum Screen {
    Title,
    Game,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "simulate" => {
                run_simulate_command(&args[2..]);
                std::process::exit(0);
            }
            "--version" | "-v" => {
                println!("dasher {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Dasher - Terminal Side-Scrolling Runner\n");
                println!("Usage: dasher [command]\n");
                println!("Commands:");
                println!("  simulate   Run headless balance simulations");
                println!("             [--runs N] [--seed S] [--steps T] [--level]");
                println!("             [--jitter] [--json] [--verbose]");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'dasher --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut current_screen = Screen::Title;
    let mut title_screen = TitleScreen::new();
    let mut game_state: Option<GameState> = None;

    loop {
        match current_screen {
            Screen::Title => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    title_screen.draw(frame, area);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Up | KeyCode::Char('k') => title_screen.select_prev(),
                            KeyCode::Down | KeyCode::Char('j') => title_screen.select_next(),
                            KeyCode::Enter => {
                                let config = if title_screen.selected == 1 {
                                    GameConfig::level()
                                } else {
                                    GameConfig::endless()
                                };
                                // Preset configs validate by construction
                                game_state = Some(
                                    GameState::new(config)
                                        .expect("preset game config is valid"),
                                );
                                current_screen = Screen::Game;
                            }
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            _ => {}
                        }
                    }
                }
            }

            Screen::Game => {
                let mut state = game_state
                    .take()
                    .expect("game state is initialized when entering the game screen");

                let mut particles = ParticleSystem::new();
                let mut log: VecDeque<String> = VecDeque::new();
                let mut rng = rand::thread_rng();
                let mut last_frame = Instant::now();

                loop {
                    terminal.draw(|frame| {
                        let area = frame.size();
                        render_game_scene(frame, area, &state, &particles, &log);
                    })?;

                    // Poll for input (10ms keeps the frame cadence smooth)
                    if event::poll(Duration::from_millis(10))? {
                        if let Event::Key(key_event) = event::read()? {
                            match key_event.code {
                                KeyCode::Char(' ') | KeyCode::Up => {
                                    state.request_jump();
                                }
                                KeyCode::Char('r') | KeyCode::Char('R') => {
                                    state.restart();
                                    particles.clear();
                                    push_log(&mut log, "Fresh run.".to_string());
                                }
                                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                    current_screen = Screen::Title;
                                    break;
                                }
                                _ => {}
                            }
                        }
                    }

                    // Advance the simulation by real elapsed time; physics
                    // runs in fixed steps inside.
                    let now = Instant::now();
                    let dt_ms = now.duration_since(last_frame).as_millis() as u64;
                    last_frame = now;

                    let result = advance(&mut state, dt_ms);
                    for tick_event in result.events {
                        match tick_event {
                            TickEvent::Jumped { x, y } => particles.burst(x, y, &mut rng),
                            TickEvent::Crashed { obstacle } => {
                                push_log(
                                    &mut log,
                                    format!("Hit a {:.0}px block.", obstacle.height),
                                );
                            }
                            TickEvent::RunReset => {
                                particles.clear();
                                push_log(&mut log, "Back to the start.".to_string());
                            }
                            TickEvent::LevelCleared => {
                                push_log(&mut log, "Level complete!".to_string());
                            }
                            TickEvent::ObstacleSpawned { .. } => {}
                        }
                    }
                    particles.update(dt_ms);
                }
            }
        }
    }
}

fn push_log(log: &mut VecDeque<String>, entry: String) {
    if log.len() >= EVENT_LOG_CAPACITY {
        log.pop_back();
    }
    log.push_front(entry);
}

/// Parse `simulate` flags and print the report.
fn run_simulate_command(args: &[String]) {
    let mut config = SimConfig::default();
    let mut json = false;
    let mut jitter = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--runs" => {
                config.num_runs = parse_flag_value(iter.next(), "--runs");
            }
            "--seed" => {
                config.seed = Some(parse_flag_value(iter.next(), "--seed"));
            }
            "--steps" => {
                config.max_steps_per_run = parse_flag_value(iter.next(), "--steps");
            }
            "--level" => config.level_mode = true,
            "--jitter" => jitter = true,
            "--json" => json = true,
            "--verbose" => config.verbosity = 2,
            other => {
                eprintln!("Unknown simulate flag: {}", other);
                eprintln!("Run 'dasher --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    config.policy = match (config.level_mode, jitter) {
        (_, true) => JumpPolicy::Jittered {
            distance: 85.0,
            jitter: 25.0,
        },
        (true, false) => JumpPolicy::Threshold { distance: 78.0 },
        (false, false) => JumpPolicy::Threshold { distance: 90.0 },
    };
    if json {
        config.verbosity = 0;
    }

    let report = run_simulation(&config);

    if json {
        match report.to_json() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", report.to_text());
    }
}

fn parse_flag_value<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> T {
    match value.and_then(|v| v.parse().ok()) {
        Some(parsed) => parsed,
        None => {
            eprintln!("{} expects a numeric value", flag);
            std::process::exit(1);
        }
    }
}
