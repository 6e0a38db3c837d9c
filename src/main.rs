//! Voidcore CLI
//!
//! Usage:
//!   voidcore                            # Interactive void terminal
//!   voidcore --command "help"           # Single command evaluation
//!   voidcore --simulate                 # Scripted scroll/cursor sweep
//!   voidcore --simulate --json          # JSON frame output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use voidcore::content;
use voidcore::core::{
    CursorSampler, DocumentGeometry, PointerEvent, ResourceOpener, ScrollEvent, ScrollSampler,
    TerminalSession, VoidStore,
};
use voidcore::types::{LineKind, Phase, TerminalLine};
use voidcore::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "voidcore",
    version = VERSION,
    about = "Void experience core - scroll-driven phases and the void terminal",
    long_about = "Voidcore drives the interactive core of the Void experience.\n\n\
                  The simulation sweeps scroll progress through all five phases\n\
                  while a synthetic pointer wanders, printing one state line per\n\
                  frame. The terminal mode runs the void command interpreter on\n\
                  stdin.\n\n\
                  Phases:\n  \
                  BREACH   - Opening sequence\n  \
                  SIGNAL   - First transmission\n  \
                  MEMORY   - Fragments surfacing\n  \
                  SCAN     - Deep skill scan\n  \
                  TERMINAL - Direct link established"
)]
struct Args {
    /// Single command to evaluate in the void terminal
    #[arg(short, long)]
    command: Option<String>,

    /// Interactive void terminal - read commands from stdin
    #[arg(short, long)]
    terminal: bool,

    /// Run the scripted scroll/cursor sweep
    #[arg(short, long)]
    simulate: bool,

    /// Print the persona, projects, experience and skills content
    #[arg(short, long)]
    profile: bool,

    /// Frames in the simulated sweep
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Simulated document height in pixels
    #[arg(long, default_value_t = 5800.0)]
    height: f64,

    /// Simulated viewport height in pixels
    #[arg(long, default_value_t = 800.0)]
    viewport: f64,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    if args.simulate {
        run_simulate(&args);
    } else if args.profile {
        run_profile(&args);
    } else if let Some(ref command) = args.command {
        run_single(command, &args);
    } else if args.terminal {
        run_terminal(&args);
    } else {
        // Default to the terminal if no mode specified
        run_terminal(&args);
    }
}

/// Opener that prints the link instead of spawning a browser
struct ConsoleOpener {
    no_color: bool,
}

impl ResourceOpener for ConsoleOpener {
    fn open_url(&mut self, url: &str) {
        if self.no_color {
            println!("  -> {}", url);
        } else {
            println!("  {} {}", "->".cyan(), url.cyan().underline());
        }
    }
}

/// Evaluate a single command and print its output
fn run_single(command: &str, args: &Args) {
    let mut session = TerminalSession::new();
    let mut opener = ConsoleOpener {
        no_color: args.no_color,
    };

    let before = session.lines().len();
    session.submit(command, &mut opener);

    if args.json {
        let produced: Vec<&TerminalLine> = session.lines().iter().skip(before).collect();
        println!("{}", serde_json::to_string(&produced).unwrap());
        return;
    }

    for line in session.lines().iter().skip(before) {
        if line.kind == LineKind::Output {
            println!("{}", render_output(line, args.no_color));
        }
    }
}

/// Run the interactive void terminal
fn run_terminal(args: &Args) {
    print_header("Void Terminal", args.no_color);

    let mut session = TerminalSession::new();
    let mut opener = ConsoleOpener {
        no_color: args.no_color,
    };

    for line in session.lines() {
        println!("{}", render_output(line, args.no_color));
    }
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", format_prompt(args.no_color));
        stdout.flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            println!(
                "\nConnection closed. Commands this session: {}",
                session.command_history().len()
            );
            break;
        }

        let before = session.lines().len();
        session.submit(line, &mut opener);

        if session.lines().len() < before {
            // `clear` emptied the display
            if !args.no_color {
                print!("\x1b[2J\x1b[H");
            }
            continue;
        }

        for produced in &session.lines()[before..] {
            if produced.kind == LineKind::Output {
                println!("{}", render_output(produced, args.no_color));
            }
        }
    }
}

/// Run the scripted scroll/cursor sweep
fn run_simulate(args: &Args) {
    let mut store = VoidStore::new();
    let mut scroll = ScrollSampler::new();
    let mut cursor = CursorSampler::new();
    let geometry = DocumentGeometry::new(args.height, args.viewport);

    if !args.json {
        print_header("Simulation", args.no_color);
    }

    let frames = args.frames.max(1);
    let max_scroll = geometry.max_scroll();
    let mut last_phase = store.phase();

    for frame in 0..=frames {
        let t = frame as f64 / frames as f64;
        let timestamp_ms = frame as u64 * 16; // ~60fps

        // Smoothstep sweep down the document
        let eased = t * t * (3.0 - 2.0 * t);
        scroll.record(ScrollEvent {
            scroll_y: eased * max_scroll,
            timestamp_ms,
        });

        // The pointer wanders while the page scrolls
        let x = 640.0 + 600.0 * (t * 12.0).sin();
        let y = 360.0 + 300.0 * (t * 7.0).cos();
        cursor.record(PointerEvent { x, y, timestamp_ms });

        scroll.flush(&mut store, &geometry);
        cursor.flush(&mut store);

        let output = store.frame_output();
        if args.json {
            println!("{}", serde_json::to_string(&output).unwrap());
        } else if args.no_color {
            println!("{}", output.to_parseable_string());
        } else {
            println!("{}", output.to_terminal_string());
        }

        if store.phase() != last_phase {
            if !args.json {
                print_phase_banner(store.phase(), args.no_color);
            }
            last_phase = store.phase();
        }
    }

    if !args.json {
        println!();
        println!(
            "Sweep complete. Final phase: {} | Reality integrity: {:.1}",
            store.phase(),
            store.reality_integrity()
        );
    }
}

/// Print the static content sections
fn run_profile(args: &Args) {
    let info = content::personal_info();
    let projects = content::projects();
    let experiences = content::experiences();
    let skills = content::skills();

    if args.json {
        #[derive(serde::Serialize)]
        struct Profile {
            personal_info: content::PersonalInfo,
            projects: Vec<content::Project>,
            experiences: Vec<content::Experience>,
            skills: Vec<content::SkillNode>,
        }

        let profile = Profile {
            personal_info: info,
            projects,
            experiences,
            skills,
        };
        println!("{}", serde_json::to_string_pretty(&profile).unwrap());
        return;
    }

    print_header("Profile", args.no_color);

    println!("{} - {}", info.name, info.role);
    println!("{}", info.tagline);
    println!("{}", info.email);
    println!();

    println!("Projects:");
    for project in &projects {
        let marker = if project.featured { "*" } else { " " };
        println!("  {} {} - {}", marker, project.title, project.description);
    }
    println!();

    println!("Experience:");
    for experience in &experiences {
        println!(
            "  {} @ {} ({})",
            experience.role, experience.company, experience.period
        );
        for achievement in &experience.achievements {
            println!("    - {}", achievement);
        }
    }
    println!();

    println!("Skills:");
    for skill in &skills {
        println!("  {:<16} {} [{}]", skill.name, "●".repeat(skill.level as usize), skill.category);
    }
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Voidcore v{} - {}", VERSION, mode);
        println!("========================================");
    } else {
        let title = format!("  Voidcore v{} - {}", VERSION, mode);
        println!("{}", "╔══════════════════════════════════════╗".bold());
        println!("{}", title.bold().green());
        println!("{}", "╚══════════════════════════════════════╝".bold());
    }
    println!();
}

/// Format the terminal prompt
fn format_prompt(no_color: bool) -> String {
    if no_color {
        "> ".to_string()
    } else {
        format!("{} ", ">".green().bold())
    }
}

/// Render an output line (input echoes are skipped by callers)
fn render_output(line: &TerminalLine, no_color: bool) -> String {
    if no_color {
        line.content.clone()
    } else {
        match line.kind {
            LineKind::Input => line.content.green().to_string(),
            LineKind::Output => line.content.dimmed().to_string(),
        }
    }
}

/// Announce a phase transition
fn print_phase_banner(phase: Phase, no_color: bool) {
    let label = match phase {
        Phase::Breach => "REALITY BREACH IN PROGRESS",
        Phase::Signal => "SIGNAL ACQUIRED",
        Phase::Memory => "MEMORY FRAGMENTS SURFACING",
        Phase::Scan => "DEEP SCAN INITIATED",
        Phase::Terminal => "TERMINAL LINK ESTABLISHED",
    };

    if no_color {
        println!("  >> {}", label);
    } else {
        println!(
            "{}  {} {}{}",
            phase.color_code(),
            phase.glyph(),
            label,
            Phase::color_reset()
        );
    }
}
