use std::fs;
use std::process::ExitCode;

use clap::Parser;
use epainter_lang::{run, Canvas, Color, Diagnostics};

#[derive(Parser)]
#[command(name = "epainter")]
#[command(about = "Runs an E-Painter program against a square canvas", version)]
struct Cli {
    /// Program source file
    input: String,

    /// Canvas side length in pixels
    #[arg(short, long, default_value_t = 64)]
    size: usize,

    /// Write the final canvas as a plain PPM image
    #[arg(short, long)]
    output: Option<String>,

    /// Print the canvas to stdout as text
    #[arg(long)]
    show: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: cannot read {}: {error}", cli.input);
            return ExitCode::FAILURE;
        }
    };

    let outcome = run(&source, cli.size);
    report(&outcome.diagnostics);

    if cli.show {
        print_canvas(&outcome.canvas);
    }

    if let Some(path) = &cli.output {
        if let Err(error) = fs::write(path, ppm(&outcome.canvas)) {
            eprintln!("error: cannot write {path}: {error}");
            return ExitCode::FAILURE;
        }
    }

    if outcome.diagnostics.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn report(diagnostics: &Diagnostics) {
    for (phase, errors) in [
        ("lexical", &diagnostics.lexical),
        ("syntax", &diagnostics.syntax),
        ("semantic", &diagnostics.semantic),
    ] {
        for error in errors {
            eprintln!("{phase} error: {error}");
        }
    }
    for warning in &diagnostics.warnings {
        eprintln!("warning: {warning}");
    }
    if let Some(error) = &diagnostics.runtime {
        eprintln!("{error}");
    }
}

fn print_canvas(canvas: &Canvas) {
    let size = canvas.size() as i64;
    for y in 0..size {
        let mut row = String::with_capacity(size as usize);
        for x in 0..size {
            row.push(glyph(canvas.get(x, y).unwrap_or(Color::White)));
        }
        println!("{row}");
    }
}

fn glyph(color: Color) -> char {
    match color {
        Color::Red => 'R',
        Color::Blue => 'B',
        Color::Green => 'G',
        Color::Yellow => 'Y',
        Color::Orange => 'O',
        Color::Purple => 'P',
        Color::Black => '#',
        Color::White => '.',
        Color::Transparent => ' ',
    }
}

/// Plain-text PPM (P3). The palette-to-RGB mapping lives here; the canvas
/// itself knows nothing about rendering.
fn ppm(canvas: &Canvas) -> String {
    let size = canvas.size();
    let mut out = format!("P3\n{size} {size}\n255\n");
    for y in 0..size as i64 {
        for x in 0..size as i64 {
            let (r, g, b) = rgb(canvas.get(x, y).unwrap_or(Color::White));
            out.push_str(&format!("{r} {g} {b}\n"));
        }
    }
    out
}

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Red => (220, 50, 47),
        Color::Blue => (38, 139, 210),
        Color::Green => (64, 160, 43),
        Color::Yellow => (230, 200, 50),
        Color::Orange => (230, 126, 34),
        Color::Purple => (125, 60, 152),
        Color::Black => (0, 0, 0),
        Color::White | Color::Transparent => (255, 255, 255),
    }
}
